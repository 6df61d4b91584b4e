//! AIの盤面評価システム
//! 自分の石が置かれたマスの位置評価値の合計と、
//! 直前の手で反転させた石数から局面の点数を付ける。

use crate::game::{Board, PlayerKey, Position, WeightTable};

/// 反転した石1個あたりの加点
pub const DEFAULT_TURNED_COIN_COEFFICIENT: f64 = 2.0;

/// 評価関数の重み係数を管理する構造体
#[derive(Debug, Clone, PartialEq)]
pub struct EvalWeights {
    /// マスごとの位置評価値
    pub squares: WeightTable,
    /// 反転した石数に掛ける係数
    pub turned_coin_coefficient: f64,
}

impl EvalWeights {
    pub fn for_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            squares: WeightTable::for_dimensions(rows, cols),
            turned_coin_coefficient: DEFAULT_TURNED_COIN_COEFFICIENT,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            squares: WeightTable::standard(),
            turned_coin_coefficient: DEFAULT_TURNED_COIN_COEFFICIENT,
        }
    }
}

/// 盤面評価を行うスタティックメソッド集
pub struct BoardEvaluator;

impl BoardEvaluator {
    /// player の石があるマスの重み合計 + 係数 × 反転数
    /// 相手の石は差し引かない
    pub fn evaluate_position(
        board: &Board,
        player: PlayerKey,
        turned_coins: usize,
        weights: &EvalWeights,
    ) -> f64 {
        let positional = Self::evaluate_occupancy(board, player, &weights.squares);
        positional as f64 + weights.turned_coin_coefficient * turned_coins as f64
    }

    /// player の石があるマスの重み合計
    pub fn evaluate_occupancy(board: &Board, player: PlayerKey, squares: &WeightTable) -> i32 {
        let player_cell = player.to_cell();
        let mut score = 0;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if board.get_cell(Position::new(row, col)) == Some(player_cell) {
                    score += squares.weight(row, col);
                }
            }
        }
        score
    }
}
