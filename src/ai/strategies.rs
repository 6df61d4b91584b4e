//! AI対局者の実装モジュール
//! 難易度を探索深度に対応させ、ゲーム状態から手を選んで打つ。

use serde::{Deserialize, Serialize};

use super::evaluation::EvalWeights;
use super::search::{SearchEngine, SearchResult};
use crate::error::{AIError, Result};
use crate::game::{GameState, Position};

/// AIの難易度
/// 数値1〜3がそのまま探索深度になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 探索深度を返す
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// 数値レベル（1〜3）から難易度を得る
    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// ミニマックス法で手を選ぶAI
#[derive(Debug, Clone)]
pub struct MinimaxAI {
    pub difficulty: Difficulty,
    engine: SearchEngine,
}

impl MinimaxAI {
    pub fn new(difficulty: Difficulty, weights: EvalWeights) -> Self {
        Self {
            difficulty,
            engine: SearchEngine::new(weights),
        }
    }

    /// 標準8x8盤面用の重みで作成する
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty, EvalWeights::default())
    }

    /// rows x cols の盤面に合わせた重みで作成する
    pub fn for_board(difficulty: Difficulty, rows: usize, cols: usize) -> Self {
        Self::new(difficulty, EvalWeights::for_dimensions(rows, cols))
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// ゲーム状態から手番側の最善手を計算する
    pub fn calculate_move(&self, game_state: &GameState) -> std::result::Result<SearchResult, AIError> {
        if game_state.is_finished() {
            return Err(AIError::StrategyError {
                message: "Cannot calculate move for finished game".to_string(),
            });
        }

        let current = game_state.current_player;
        self.engine
            .choose_move_with_stats(
                &game_state.board,
                current,
                current.opposite(),
                self.difficulty.depth(),
            )?
            .ok_or(AIError::NoValidMoves)
    }

    /// 最善手を計算してそのまま打つ
    pub fn play(&self, game_state: &mut GameState) -> Result<Position> {
        let result = self.calculate_move(game_state)?;
        game_state.play_move(result.position)?;
        Ok(result.position)
    }

    pub fn get_name(&self) -> &'static str {
        "MinimaxAI"
    }
}
