//! アプリケーション全体のエラー定義モジュール
//! 盤面操作、ゲーム進行、AI探索のエラーを統一管理。

use thiserror::Error;

/// ゲームロジックに関連するエラー
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("Position out of bounds: ({row}, {col})")]
    OutOfBounds { row: usize, col: usize },

    #[error("Game already finished")]
    GameFinished,

    #[error("AI calculation failed: {source}")]
    AIError {
        #[from]
        source: AIError,
    },
}

/// AI探索に関連するエラー
#[derive(Debug, Error)]
pub enum AIError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("AI strategy error: {message}")]
    StrategyError { message: String },

    #[error("AI configuration error: {message}")]
    ConfigurationError { message: String },
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
