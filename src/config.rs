//! アプリケーション設定管理モジュール
//! 盤面サイズ、対局者、AIの設定を
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::ai::{Difficulty, EvalWeights, MinimaxAI};
use crate::game::{GameState, Player, PlayerKey, WeightTable};

/// 設定ファイルの探索順
const CONFIG_PATHS: [&str; 2] = ["othello.json", "config/othello.json"];

/// 盤面サイズの設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { rows: 8, cols: 8 }
    }
}

/// 対局者の設定
/// どちらの席をAIが担当するか
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersConfig {
    pub player_one_ai: bool,
    pub player_two_ai: bool,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            player_one_ai: false,
            player_two_ai: true,
        }
    }
}

/// AIの設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub turned_coin_coefficient: f64,
    /// 位置評価テーブル。省略時は盤面サイズから生成する
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Vec<i32>>>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            turned_coin_coefficient: crate::ai::DEFAULT_TURNED_COIN_COEFFICIENT,
            weights: None,
        }
    }
}

/// アプリケーションの全設定を統合するメイン設定構造体
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub ai: AiConfig,
}

/// 設定関連のエラーを表すenum
/// ファイル読み込み、パース、検証エラーなどを含む
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },

    #[error("設定値が無効です: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

/// 環境変数の値をパースし、失敗時はEnvVarErrorにする
fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::EnvVarError {
        name: name.to_string(),
        value,
    })
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数から設定を読み込む
    /// デフォルト値をベースに環境変数で上書きする
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_overrides(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// lookup で得られる値で設定を上書きする
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rows) = lookup("OTHELLO_ROWS") {
            self.board.rows = parse_var("OTHELLO_ROWS", rows)?;
        }

        if let Some(cols) = lookup("OTHELLO_COLS") {
            self.board.cols = parse_var("OTHELLO_COLS", cols)?;
        }

        if let Some(level) = lookup("OTHELLO_DIFFICULTY") {
            let parsed: u8 = parse_var("OTHELLO_DIFFICULTY", level.clone())?;
            self.ai.difficulty = Difficulty::from_level(parsed).ok_or(ConfigError::EnvVarError {
                name: "OTHELLO_DIFFICULTY".to_string(),
                value: level,
            })?;
        }

        if let Some(coefficient) = lookup("OTHELLO_TURNED_COIN_COEFFICIENT") {
            self.ai.turned_coin_coefficient =
                parse_var("OTHELLO_TURNED_COIN_COEFFICIENT", coefficient)?;
        }

        if let Some(flag) = lookup("OTHELLO_PLAYER_ONE_AI") {
            self.players.player_one_ai = parse_var("OTHELLO_PLAYER_ONE_AI", flag)?;
        }

        if let Some(flag) = lookup("OTHELLO_PLAYER_TWO_AI") {
            self.players.player_two_ai = parse_var("OTHELLO_PLAYER_TWO_AI", flag)?;
        }

        Ok(())
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_first(&CONFIG_PATHS)?;
        config.apply_overrides(|name| env::var(name).ok())?;
        Ok(config)
    }

    /// 候補パスのうち最初に存在するファイルを読み込む
    /// 存在しても読めない、または壊れているファイルはエラーにする
    pub fn load_first<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.as_ref().exists()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 設定値の妥当性をチェックする
    /// 不正な値がある場合はConfigErrorを返す
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("board.rows", self.board.rows), ("board.cols", self.board.cols)] {
            // 中央4マスに初期配置を置くため偶数かつ4以上
            if value < 4 || value % 2 != 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let coefficient = self.ai.turned_coin_coefficient;
        if !coefficient.is_finite() || coefficient < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "ai.turned_coin_coefficient".to_string(),
                value: coefficient.to_string(),
            });
        }

        self.weight_table()?;
        Ok(())
    }

    /// 盤面サイズに合った位置評価テーブル
    pub fn weight_table(&self) -> Result<WeightTable, ConfigError> {
        let Some(rows) = &self.ai.weights else {
            return Ok(WeightTable::for_dimensions(self.board.rows, self.board.cols));
        };

        match WeightTable::from_rows(rows) {
            Some(table) if table.rows() == self.board.rows && table.cols() == self.board.cols => {
                Ok(table)
            }
            _ => Err(ConfigError::InvalidValue {
                field: "ai.weights".to_string(),
                value: format!(
                    "{} rows, expected {}x{}",
                    rows.len(),
                    self.board.rows,
                    self.board.cols
                ),
            }),
        }
    }

    pub fn eval_weights(&self) -> Result<EvalWeights, ConfigError> {
        Ok(EvalWeights {
            squares: self.weight_table()?,
            turned_coin_coefficient: self.ai.turned_coin_coefficient,
        })
    }

    pub fn players(&self) -> [Player; 2] {
        [
            Player {
                key: PlayerKey::One,
                is_ai: self.players.player_one_ai,
            },
            Player {
                key: PlayerKey::Two,
                is_ai: self.players.player_two_ai,
            },
        ]
    }

    /// 設定に従って初期配置済みのゲームを作る
    pub fn new_game(&self) -> GameState {
        GameState::new(self.board.rows, self.board.cols, self.players())
    }

    /// 設定に従ってAIを作る
    pub fn build_ai(&self) -> Result<MinimaxAI, ConfigError> {
        Ok(MinimaxAI::new(self.ai.difficulty, self.eval_weights()?))
    }
}
