//! ゲーム状態管理モジュール
//! 盤面、手番、進行状態、手の履歴をまとめて管理する。

use super::board::Board;
use super::types::{Cell, Move, Player, PlayerKey, Position};
use crate::ai::MinimaxAI;
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ゲームの進行状態を表すenum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲーム進行中
    InProgress,
    /// ゲーム終了（勝者と最終スコアを記録）。勝者Noneは引き分け
    Finished {
        winner: Option<PlayerKey>,
        score: (usize, usize),
    },
}

/// 1局分の全体状態
/// プレイヤー1が先手で、手番側に合法手がなくなった時点で終局する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub id: Uuid,
    pub board: Board,
    pub players: [Player; 2],
    pub current_player: PlayerKey,
    pub game_status: GameStatus,
    pub move_history: Vec<Move>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl GameState {
    /// 初期配置済みの新しいゲームを作成する
    /// 2x2未満の盤面には初期配置を置けないため、石のないまま即座に終局する
    pub fn new(rows: usize, cols: usize, players: [Player; 2]) -> Self {
        let mut state = Self {
            id: Uuid::new_v4(),
            board: Board::new(rows, cols),
            players,
            current_player: PlayerKey::One,
            game_status: GameStatus::InProgress,
            move_history: Vec::new(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        };
        state.restart();
        state
    }

    /// 人間同士の8x8ゲーム
    pub fn standard() -> Self {
        Self::new(
            8,
            8,
            [Player::human(PlayerKey::One), Player::human(PlayerKey::Two)],
        )
    }

    /// 盤面を空にして初期配置からやり直す
    /// 手の履歴も消去する
    pub fn restart(&mut self) {
        self.board.reset_to_empty();
        self.board.seed_starting_pieces(PlayerKey::One, PlayerKey::Two);
        self.current_player = PlayerKey::One;
        self.game_status = GameStatus::InProgress;
        self.move_history.clear();
        self.refresh_turn();
        self.last_updated = Utc::now();
    }

    /// 指定キーのプレイヤー情報
    pub fn player(&self, key: PlayerKey) -> Player {
        match key {
            PlayerKey::One => self.players[0],
            PlayerKey::Two => self.players[1],
        }
    }

    /// 手番のプレイヤーがAIかどうか
    pub fn is_ai_turn(&self) -> bool {
        self.player(self.current_player).is_ai
    }

    /// ゲームが終了しているかチェックする
    pub fn is_finished(&self) -> bool {
        matches!(self.game_status, GameStatus::Finished { .. })
    }

    /// 手番側の合法手
    pub fn valid_moves(&self) -> &[Position] {
        self.board.available_moves()
    }

    /// 手番側の着手を検証してから適用する
    /// 合法手一覧にない位置はInvalidMoveとして拒否する
    pub fn play_move(&mut self, position: Position) -> Result<usize> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        if self.board.get_cell(position).is_none() {
            return Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
            });
        }

        if !self.board.available_moves().contains(&position) {
            return Err(GameError::InvalidMove {
                reason: format!(
                    "Position ({}, {}) is not a valid move for player {}",
                    position.row,
                    position.col,
                    self.current_player.key()
                ),
            });
        }

        let flipped = self.board.place_and_flip(position, self.current_player);
        self.move_history
            .push(Move::new(self.current_player, position, flipped));

        self.current_player = self.current_player.opposite();
        self.refresh_turn();
        self.last_updated = Utc::now();

        Ok(flipped)
    }

    /// 手番側の手をAIに選ばせて打つ
    pub fn play_ai_move(&mut self, ai: &MinimaxAI) -> Result<Position> {
        ai.play(self)
    }

    /// 手番側の合法手を再計算し、なければ終局させる
    fn refresh_turn(&mut self) {
        let next = self.current_player;
        if self.board.compute_legal_moves(next, next.opposite()).is_empty() {
            self.finish();
        }
    }

    /// 石数で勝者を決めてゲームを終了させる
    pub fn finish(&mut self) {
        let score = self.get_score();
        self.game_status = GameStatus::Finished {
            winner: Self::determine_winner(score),
            score,
        };
        self.last_updated = Utc::now();
    }

    /// 同数の場合はNone（引き分け）を返す
    fn determine_winner((one, two): (usize, usize)) -> Option<PlayerKey> {
        if one > two {
            Some(PlayerKey::One)
        } else if two > one {
            Some(PlayerKey::Two)
        } else {
            None
        }
    }

    /// 現在のスコアを取得する
    /// 戻り値: (プレイヤー1の石数, プレイヤー2の石数)
    pub fn get_score(&self) -> (usize, usize) {
        (
            self.board.count_pieces(Cell::PlayerOne),
            self.board.count_pieces(Cell::PlayerTwo),
        )
    }

    /// これまでの手数を取得する
    pub fn get_move_count(&self) -> usize {
        self.move_history.len()
    }

    /// n手目を打った直後の盤面を初期配置から再現する
    /// n=0は初期配置。手数を超える場合はNone
    pub fn board_after(&self, n: usize) -> Option<Board> {
        if n > self.move_history.len() {
            return None;
        }

        let mut board = Board::new(self.board.rows(), self.board.cols());
        board.seed_starting_pieces(PlayerKey::One, PlayerKey::Two);
        for game_move in &self.move_history[..n] {
            board.place_and_flip(game_move.position, game_move.player);
        }
        Some(board)
    }

    /// 対局の振り返り用に、初期配置から各手の後までの盤面を並べる
    pub fn review(&self) -> Vec<Board> {
        (0..=self.move_history.len())
            .filter_map(|n| self.board_after(n))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
