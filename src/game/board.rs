//! オセロ盤面の状態を管理するモジュール
//! 任意サイズのグリッド、合法手の探索、石の反転処理を担当する。

use super::types::{Cell, PlayerKey, Position};
use serde::{Deserialize, Serialize};

/// 盤面上の8方向への移動ベクトル
/// 合法手の探索と石の反転で共通に使う
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// 行数×列数のオセロ盤面
/// セル状態と、直近に計算した合法手の一覧を保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    available_moves: Vec<Position>,
}

impl Board {
    /// 空の盤面を作成する
    /// 初期配置は呼び出し側が seed_starting_pieces で行う
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            available_moves: Vec::new(),
        }
    }

    /// 空の8x8盤面
    pub fn standard() -> Self {
        Self::new(8, 8)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 中央4マスに初期配置を置く
    /// first は左上-右下の対角、second はもう一方の対角
    /// 行または列が2未満の盤面には何も置かない
    pub fn seed_starting_pieces(&mut self, first: PlayerKey, second: PlayerKey) {
        if self.rows < 2 || self.cols < 2 {
            return;
        }
        let (r, c) = (self.rows / 2, self.cols / 2);
        self.set_cell(Position::new(r - 1, c - 1), first.to_cell());
        self.set_cell(Position::new(r, c), first.to_cell());
        self.set_cell(Position::new(r, c - 1), second.to_cell());
        self.set_cell(Position::new(r - 1, c), second.to_cell());
    }

    /// 座標が盤面内かどうか
    /// 探索中は盤外に出る負の座標も扱うため符号付きで受け取る
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// 指定した位置のセル状態を取得する
    /// 範囲外の場合はNoneを返す
    pub fn get_cell(&self, position: Position) -> Option<Cell> {
        if position.row < self.rows && position.col < self.cols {
            Some(self.cells[position.row * self.cols + position.col])
        } else {
            None
        }
    }

    /// 指定した位置にセル状態を設定する
    /// 範囲外の場合はfalseを返す
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> bool {
        if position.row < self.rows && position.col < self.cols {
            self.cells[position.row * self.cols + position.col] = cell;
            true
        } else {
            false
        }
    }

    /// 指定した位置が空かチェックする
    pub fn is_empty(&self, position: Position) -> bool {
        matches!(self.get_cell(position), Some(Cell::Empty))
    }

    /// 盤内であることを確認済みの符号付き座標でセルを読む
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if self.is_in_bounds(row, col) {
            Some(self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    /// 直近の compute_legal_moves の結果
    pub fn available_moves(&self) -> &[Position] {
        &self.available_moves
    }

    /// next の合法手を計算し、保持している合法手一覧を置き換える
    /// next の全ての石から8方向に走査し、last の石が1個以上続いた先の
    /// 盤内の空きマスを合法手とする。同じマスは一度だけ登録する
    pub fn compute_legal_moves(&mut self, next: PlayerKey, last: PlayerKey) -> &[Position] {
        let next_cell = next.to_cell();
        let last_cell = last.to_cell();
        let mut moves: Vec<Position> = Vec::new();

        for row in 0..self.rows as isize {
            for col in 0..self.cols as isize {
                if self.cell_at(row, col) != Some(next_cell) {
                    continue;
                }

                for &(dr, dc) in &DIRECTIONS {
                    let (mut r, mut c) = (row + dr, col + dc);
                    if self.cell_at(r, c) != Some(last_cell) {
                        continue;
                    }
                    while self.cell_at(r, c) == Some(last_cell) {
                        r += dr;
                        c += dc;
                    }
                    if self.cell_at(r, c) == Some(Cell::Empty) {
                        let destination = Position::new(r as usize, c as usize);
                        if !moves.contains(&destination) {
                            moves.push(destination);
                        }
                    }
                }
            }
        }

        self.available_moves = moves;
        &self.available_moves
    }

    /// 置いた石から8方向に相手の石を挟んでいれば反転し、反転数を返す
    /// 合法性は検証しない。呼び出し側が事前に position へ player の石を置いておくこと
    pub fn apply_move(&mut self, position: Position, player: PlayerKey) -> usize {
        let player_cell = player.to_cell();
        let opponent_cell = player.opposite().to_cell();
        let (origin_row, origin_col) = (position.row as isize, position.col as isize);
        let mut flipped = 0;

        for &(dr, dc) in &DIRECTIONS {
            let (mut r, mut c) = (origin_row + dr, origin_col + dc);
            if self.cell_at(r, c) != Some(opponent_cell) {
                continue;
            }
            while self.cell_at(r, c) == Some(opponent_cell) {
                r += dr;
                c += dc;
            }
            if self.cell_at(r, c) != Some(player_cell) {
                continue;
            }

            // 自分の石から置いた位置へ戻りながら反転する
            r -= dr;
            c -= dc;
            while (r, c) != (origin_row, origin_col) {
                self.cells[r as usize * self.cols + c as usize] = player_cell;
                flipped += 1;
                r -= dr;
                c -= dc;
            }
        }

        flipped
    }

    /// 石を置いてから反転する
    pub fn place_and_flip(&mut self, position: Position, player: PlayerKey) -> usize {
        self.set_cell(position, player.to_cell());
        self.apply_move(position, player)
    }

    /// 指定したセル状態のマス数を数える
    pub fn count_pieces(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// 盤面を空に戻す
    pub fn reset_to_empty(&mut self) {
        self.cells = vec![Cell::Empty; self.rows * self.cols];
        self.available_moves.clear();
    }

    /// 元の盤面と記憶領域を共有しない複製を作る
    /// 探索の各ノードはこの複製の上で手を試す
    pub fn clone_independent(&self) -> Board {
        Board {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
            available_moves: self.available_moves.clone(),
        }
    }

    /// デバッグ用の盤面表示文字列を生成する
    /// ●でプレイヤー1、○でプレイヤー2、.で空マスを表現
    pub fn display(&self) -> String {
        let mut result = String::from(" ");
        for col in 0..self.cols {
            result.push_str(&format!(" {}", col % 10));
        }
        result.push('\n');

        for row in 0..self.rows {
            result.push_str(&format!("{}", row % 10));
            for col in 0..self.cols {
                let symbol = match self.cells[row * self.cols + col] {
                    Cell::Empty => ".",
                    Cell::PlayerOne => "●",
                    Cell::PlayerTwo => "○",
                };
                result.push_str(&format!(" {}", symbol));
            }
            result.push('\n');
        }

        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// プレイヤー1を(3,3),(4,4)、プレイヤー2を(4,3),(3,4)に置いた盤面
    fn seeded_board() -> Board {
        let mut board = Board::standard();
        board.seed_starting_pieces(PlayerKey::One, PlayerKey::Two);
        board
    }

    fn sorted(moves: &[Position]) -> Vec<Position> {
        let mut moves = moves.to_vec();
        moves.sort();
        moves
    }

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new(6, 10);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 10);
        assert_eq!(board.count_pieces(Cell::Empty), 60);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_seed_starting_pieces() {
        let board = seeded_board();

        assert_eq!(board.get_cell(Position::new(3, 3)), Some(Cell::PlayerOne));
        assert_eq!(board.get_cell(Position::new(4, 4)), Some(Cell::PlayerOne));
        assert_eq!(board.get_cell(Position::new(4, 3)), Some(Cell::PlayerTwo));
        assert_eq!(board.get_cell(Position::new(3, 4)), Some(Cell::PlayerTwo));
        assert_eq!(board.count_pieces(Cell::Empty), 60);
    }

    #[test]
    fn test_seed_skips_boards_smaller_than_two() {
        for (rows, cols) in [(1, 1), (1, 4), (4, 1), (0, 0)] {
            let mut board = Board::new(rows, cols);
            board.seed_starting_pieces(PlayerKey::One, PlayerKey::Two);

            assert_eq!(board.count_pieces(Cell::Empty), rows * cols);
            assert!(board
                .compute_legal_moves(PlayerKey::One, PlayerKey::Two)
                .is_empty());
        }
    }

    #[test]
    fn test_is_in_bounds() {
        let board = Board::new(8, 6);

        assert!(board.is_in_bounds(0, 0));
        assert!(board.is_in_bounds(7, 5));
        assert!(!board.is_in_bounds(-1, 0));
        assert!(!board.is_in_bounds(0, -1));
        assert!(!board.is_in_bounds(8, 0));
        assert!(!board.is_in_bounds(0, 6));
    }

    #[test]
    fn test_get_and_set_cell_out_of_bounds() {
        let mut board = Board::standard();
        assert_eq!(board.get_cell(Position::new(8, 0)), None);
        assert!(!board.set_cell(Position::new(0, 8), Cell::PlayerOne));
        assert!(board.set_cell(Position::new(0, 0), Cell::PlayerOne));
        assert!(!board.is_empty(Position::new(0, 0)));
    }

    #[test]
    fn test_legal_moves_on_seeded_board() {
        let mut board = seeded_board();
        let moves = sorted(board.compute_legal_moves(PlayerKey::Two, PlayerKey::One));

        assert_eq!(
            moves,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_legal_moves_for_other_side() {
        let mut board = seeded_board();
        let moves = sorted(board.compute_legal_moves(PlayerKey::One, PlayerKey::Two));

        assert_eq!(
            moves,
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_legal_moves_deduplicated() {
        // (0,2)には(0,0)からと(2,2)からの2通りで到達できる
        let mut board = Board::new(4, 4);
        board.set_cell(Position::new(0, 0), Cell::PlayerOne);
        board.set_cell(Position::new(0, 1), Cell::PlayerTwo);
        board.set_cell(Position::new(2, 2), Cell::PlayerOne);
        board.set_cell(Position::new(1, 2), Cell::PlayerTwo);

        let moves = board.compute_legal_moves(PlayerKey::One, PlayerKey::Two).to_vec();
        let target = Position::new(0, 2);
        assert_eq!(moves.iter().filter(|&&m| m == target).count(), 1);
    }

    #[test]
    fn test_legal_moves_replaced_each_call() {
        let mut board = seeded_board();
        board.compute_legal_moves(PlayerKey::Two, PlayerKey::One);
        board.reset_to_empty();
        assert!(board.available_moves().is_empty());
        assert!(board.compute_legal_moves(PlayerKey::Two, PlayerKey::One).is_empty());
    }

    #[test]
    fn test_run_to_edge_is_not_a_move() {
        let mut board = Board::new(4, 4);
        board.set_cell(Position::new(0, 1), Cell::PlayerOne);
        board.set_cell(Position::new(0, 2), Cell::PlayerTwo);
        board.set_cell(Position::new(0, 3), Cell::PlayerTwo);

        assert!(board.compute_legal_moves(PlayerKey::One, PlayerKey::Two).is_empty());
    }

    #[test]
    fn test_apply_move_flips_single_piece() {
        let mut board = seeded_board();
        board.compute_legal_moves(PlayerKey::Two, PlayerKey::One);

        let flipped = board.place_and_flip(Position::new(2, 3), PlayerKey::Two);

        assert_eq!(flipped, 1);
        assert_eq!(board.get_cell(Position::new(3, 3)), Some(Cell::PlayerTwo));
        assert_eq!(board.count_pieces(Cell::PlayerOne), 1);
        assert_eq!(board.count_pieces(Cell::PlayerTwo), 4);
    }

    #[test]
    fn test_apply_move_multiple_directions() {
        let mut board = Board::new(5, 5);
        // 中央(2,2)に置くと横と縦の2方向で挟める
        board.set_cell(Position::new(2, 0), Cell::PlayerOne);
        board.set_cell(Position::new(2, 1), Cell::PlayerTwo);
        board.set_cell(Position::new(0, 2), Cell::PlayerOne);
        board.set_cell(Position::new(1, 2), Cell::PlayerTwo);
        board.set_cell(Position::new(2, 3), Cell::PlayerTwo);

        let flipped = board.place_and_flip(Position::new(2, 2), PlayerKey::One);

        assert_eq!(flipped, 2);
        assert_eq!(board.get_cell(Position::new(2, 1)), Some(Cell::PlayerOne));
        assert_eq!(board.get_cell(Position::new(1, 2)), Some(Cell::PlayerOne));
        // 右側は自分の石で閉じていないので残る
        assert_eq!(board.get_cell(Position::new(2, 3)), Some(Cell::PlayerTwo));
    }

    #[test]
    fn test_apply_move_long_run() {
        let mut board = Board::new(1, 6);
        board.set_cell(Position::new(0, 0), Cell::PlayerOne);
        for col in 1..5 {
            board.set_cell(Position::new(0, col), Cell::PlayerTwo);
        }

        let flipped = board.place_and_flip(Position::new(0, 5), PlayerKey::One);

        assert_eq!(flipped, 4);
        assert_eq!(board.count_pieces(Cell::PlayerOne), 6);
    }

    #[test]
    fn test_apply_move_illegal_placement_flips_nothing() {
        let mut board = seeded_board();
        let flipped = board.place_and_flip(Position::new(0, 0), PlayerKey::Two);

        assert_eq!(flipped, 0);
        // 置いた石はそのまま残る（合法性チェックは呼び出し側の責任）
        assert_eq!(board.get_cell(Position::new(0, 0)), Some(Cell::PlayerTwo));
        assert_eq!(board.count_pieces(Cell::PlayerOne), 2);
    }

    #[test]
    fn test_count_pieces_sums_to_cell_count() {
        let mut board = seeded_board();
        board.place_and_flip(Position::new(2, 3), PlayerKey::Two);

        let total = board.count_pieces(Cell::PlayerOne)
            + board.count_pieces(Cell::PlayerTwo)
            + board.count_pieces(Cell::Empty);
        assert_eq!(total, 64);
    }

    #[test]
    fn test_reset_to_empty() {
        let mut board = seeded_board();
        board.compute_legal_moves(PlayerKey::Two, PlayerKey::One);
        board.reset_to_empty();

        assert_eq!(board.count_pieces(Cell::Empty), 64);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_clone_independent_does_not_alias() {
        let mut board = seeded_board();
        board.compute_legal_moves(PlayerKey::Two, PlayerKey::One);
        let original = board.clone_independent();

        let mut copy = board.clone_independent();
        copy.place_and_flip(Position::new(2, 3), PlayerKey::Two);
        copy.compute_legal_moves(PlayerKey::One, PlayerKey::Two);

        assert_eq!(board, original);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_board_display() {
        let board = seeded_board();
        let display = board.display();

        assert!(display.contains("0 1 2 3 4 5 6 7"));
        assert!(display.contains("●"));
        assert!(display.contains("○"));
        assert!(display.contains("."));
    }
}
