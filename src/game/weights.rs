//! マスごとの位置評価値テーブル
//! 角は強く、角の隣は弱いという定石を数値化したもの。

use serde::{Deserialize, Serialize};

/// 8x8盤面の左上象限（4x4）の重み
/// 端からの距離(行, 列)で引く。距離3以上は中央扱い
const QUADRANT_WEIGHTS: [[i32; 4]; 4] = [
    [120, -20, 20, 5],
    [-20, -40, -5, -5],
    [20, -5, 15, 3],
    [5, -5, 3, 3],
];

/// 盤面サイズに合わせた位置評価テーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    rows: usize,
    cols: usize,
    weights: Vec<i32>,
}

impl WeightTable {
    /// 標準の8x8テーブル
    pub fn standard() -> Self {
        Self::for_dimensions(8, 8)
    }

    /// 任意サイズの盤面用テーブルを生成する
    /// 各マスの上下端・左右端への最短距離で象限テーブルを参照するため、
    /// 8x8では元のテーブルと完全に一致し、常に鏡映対称になる
    pub fn for_dimensions(rows: usize, cols: usize) -> Self {
        let mut weights = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let dr = row.min(rows - 1 - row).min(3);
            for col in 0..cols {
                let dc = col.min(cols - 1 - col).min(3);
                weights.push(QUADRANT_WEIGHTS[dr][dc]);
            }
        }
        Self { rows, cols, weights }
    }

    /// 行ごとの重みからテーブルを作る
    /// 行の長さが揃っていない場合はNoneを返す
    pub fn from_rows(rows: &[Vec<i32>]) -> Option<Self> {
        let cols = rows.first().map(Vec::len)?;
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            weights: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 指定マスの重みを返す
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[row * self.cols + col]
    }

    /// 上下・左右の鏡映で不変かどうか
    pub fn is_symmetric(&self) -> bool {
        (0..self.rows).all(|row| {
            (0..self.cols).all(|col| {
                let w = self.weight(row, col);
                w == self.weight(self.rows - 1 - row, col) && w == self.weight(row, self.cols - 1 - col)
            })
        })
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
