//! ゲームの基本型定義モジュール
//! オセロで使用される基本的な型とenum、構造体を定義する。

use serde::{Deserialize, Serialize};

/// 盤面の各マスの状態を表現するenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// プレイヤーを識別するキー
/// プレイヤーは常に2人で、キー1が先手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKey {
    One,
    Two,
}

impl PlayerKey {
    /// 相手プレイヤーのキーを返す
    pub fn opposite(self) -> PlayerKey {
        match self {
            PlayerKey::One => PlayerKey::Two,
            PlayerKey::Two => PlayerKey::One,
        }
    }

    /// キーを対応するセル状態に変換する
    pub fn to_cell(self) -> Cell {
        match self {
            PlayerKey::One => Cell::PlayerOne,
            PlayerKey::Two => Cell::PlayerTwo,
        }
    }

    /// 数値キー（1または2）を返す
    pub fn key(self) -> u8 {
        match self {
            PlayerKey::One => 1,
            PlayerKey::Two => 2,
        }
    }
}

/// 対局者を表す不変の値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub key: PlayerKey,
    pub is_ai: bool,
}

impl Player {
    pub fn human(key: PlayerKey) -> Self {
        Self { key, is_ai: false }
    }

    pub fn ai(key: PlayerKey) -> Self {
        Self { key, is_ai: true }
    }
}

/// 盤面上の座標を表す構造体
/// 範囲チェックは盤面の寸法を知るBoard側で行う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

/// ゲームの1手を表現する構造体
/// 着手位置とひっくり返した石の数、タイムスタンプを保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: PlayerKey,
    pub position: Position,
    pub flipped: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Move {
    /// 新しい手を作成する
    /// タイムスタンプは現在時刻で自動設定される
    pub fn new(player: PlayerKey, position: Position, flipped: usize) -> Self {
        Self {
            player,
            position,
            flipped,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_key_opposite() {
        assert_eq!(PlayerKey::One.opposite(), PlayerKey::Two);
        assert_eq!(PlayerKey::Two.opposite(), PlayerKey::One);
    }

    #[test]
    fn test_player_key_to_cell() {
        assert_eq!(PlayerKey::One.to_cell(), Cell::PlayerOne);
        assert_eq!(PlayerKey::Two.to_cell(), Cell::PlayerTwo);
    }

    #[test]
    fn test_player_key_numeric() {
        assert_eq!(PlayerKey::One.key(), 1);
        assert_eq!(PlayerKey::Two.key(), 2);
    }

    #[test]
    fn test_player_constructors() {
        let human = Player::human(PlayerKey::One);
        let ai = Player::ai(PlayerKey::Two);

        assert!(!human.is_ai);
        assert!(ai.is_ai);
        assert_eq!(ai.key, PlayerKey::Two);
    }

    #[test]
    fn test_move_creation() {
        let pos = Position::new(2, 3);
        let move_obj = Move::new(PlayerKey::Two, pos, 1);

        assert_eq!(move_obj.player, PlayerKey::Two);
        assert_eq!(move_obj.position, pos);
        assert_eq!(move_obj.flipped, 1);
    }
}
