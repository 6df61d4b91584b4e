//! 固定深度のミニマックス探索
//! 候補手ごとに盤面を複製して打ち、子局面を再帰的に評価する。
//! 枝刈りはせず、設定した深さまで全ての手を展開する。

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::evaluation::{BoardEvaluator, EvalWeights};
use crate::error::AIError;
use crate::game::{Board, PlayerKey, Position};

/// 探索結果と統計情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 選択した手
    pub position: Position,
    /// 選択した手の評価値
    pub score: f64,
    /// 評価したノード数
    pub nodes_evaluated: u64,
    /// 思考時間（ミリ秒）
    pub thinking_time_ms: u64,
}

/// ミニマックス探索エンジン
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    pub weights: EvalWeights,
}

impl SearchEngine {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// 評価テーブルの寸法が盤面と一致するか確認する
    pub fn check_dimensions(&self, board: &Board) -> Result<(), AIError> {
        let squares = &self.weights.squares;
        if squares.rows() == board.rows() && squares.cols() == board.cols() {
            Ok(())
        } else {
            Err(AIError::ConfigurationError {
                message: format!(
                    "weight table is {}x{} but board is {}x{}",
                    squares.rows(),
                    squares.cols(),
                    board.rows(),
                    board.cols()
                ),
            })
        }
    }

    /// board に保持された合法手（current の手番で計算済み）から最善手を選ぶ
    /// 同点の場合は先に見つかった手を優先する。合法手がなければ Ok(None)
    pub fn choose_move(
        &self,
        board: &Board,
        current: PlayerKey,
        other: PlayerKey,
        depth: u32,
    ) -> Result<Option<Position>, AIError> {
        Ok(self
            .choose_move_with_stats(board, current, other, depth)?
            .map(|result| result.position))
    }

    /// choose_move と同じ探索を行い、評価値とノード数も返す
    pub fn choose_move_with_stats(
        &self,
        board: &Board,
        current: PlayerKey,
        other: PlayerKey,
        depth: u32,
    ) -> Result<Option<SearchResult>, AIError> {
        self.check_dimensions(board)?;

        let start_time = Instant::now();
        let mut nodes = 0;
        let mut best: Option<(Position, f64)> = None;

        for &position in board.available_moves() {
            let mut simulated = board.clone_independent();
            let flipped = simulated.place_and_flip(position, current);
            simulated.compute_legal_moves(other, current);

            let score = self.minimax(&simulated, other, flipped, depth, false, &mut nodes);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((position, score)),
            }
        }

        Ok(best.map(|(position, score)| SearchResult {
            position,
            score,
            nodes_evaluated: nodes,
            thinking_time_ms: start_time.elapsed().as_millis() as u64,
        }))
    }

    /// 局面の評価値を返す
    /// board の合法手は player の手番で計算済みであること
    pub fn evaluate(
        &self,
        board: &Board,
        player: PlayerKey,
        turned_coins: usize,
        depth: u32,
        maximizing: bool,
    ) -> Result<f64, AIError> {
        self.check_dimensions(board)?;
        let mut nodes = 0;
        Ok(self.minimax(board, player, turned_coins, depth, maximizing, &mut nodes))
    }

    fn minimax(
        &self,
        board: &Board,
        player: PlayerKey,
        turned_coins: usize,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;

        if depth == 0 || board.available_moves().is_empty() {
            return BoardEvaluator::evaluate_position(board, player, turned_coins, &self.weights);
        }

        let opponent = player.opposite();
        let child_scores = board.available_moves().iter().map(|&position| {
            let mut simulated = board.clone_independent();
            let flipped = simulated.place_and_flip(position, player);
            simulated.compute_legal_moves(opponent, player);
            self.minimax(&simulated, opponent, flipped, depth - 1, !maximizing, nodes)
        });

        if maximizing {
            child_scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            child_scores.fold(f64::INFINITY, f64::min)
        }
    }
}
