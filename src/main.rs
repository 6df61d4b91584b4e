//! オセロ対局CLIのエントリポイント
//! 設定読み込み、AI初期化、対局の実行と振り返り表示を行う。

use clap::Parser;
use std::path::PathBuf;

use othello::{
    ai::Difficulty,
    config::Config,
    game::{GameState, GameStatus},
};

#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Othello with a fixed-depth minimax opponent")]
struct Args {
    /// 設定ファイル（省略時は othello.json などを探す）
    #[arg(long)]
    config: Option<PathBuf>,

    /// AIの強さ（1〜3、探索深度）
    #[arg(long)]
    difficulty: Option<u8>,

    /// デフォルト設定をファイルに書き出して終了する
    #[arg(long)]
    generate_config: Option<PathBuf>,

    /// 終局後に各手の盤面を表示する
    #[arg(long)]
    review: bool,
}

/// メイン関数 - 設定の読み込みと対局の実行を担当
fn main() {
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        if let Err(e) = Config::default().save_to_file(&path) {
            eprintln!("設定ファイル書き出し失敗 {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("デフォルト設定を生成: {}", path.display());
        return;
    }

    let loaded = match &args.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("設定読み込みエラー: {}", e);
        std::process::exit(1);
    });

    if let Some(level) = args.difficulty {
        config.ai.difficulty = Difficulty::from_level(level).unwrap_or_else(|| {
            eprintln!("難易度は1〜3で指定してください: {}", level);
            std::process::exit(1);
        });
    }

    if let Err(e) = config.validate() {
        eprintln!("設定エラー: {}", e);
        eprintln!("デフォルト設定を生成: othello --generate-config othello.json");
        std::process::exit(1);
    }

    println!("設定読み込み完了:");
    println!("  盤面: {}x{}", config.board.rows, config.board.cols);
    println!(
        "  AI: プレイヤー1={} プレイヤー2={}",
        config.players.player_one_ai, config.players.player_two_ai
    );
    println!(
        "  難易度: {:?} (深度 {})",
        config.ai.difficulty,
        config.ai.difficulty.depth()
    );
    println!("  反転係数: {}", config.ai.turned_coin_coefficient);

    let ai = match config.build_ai() {
        Ok(ai) => ai,
        Err(e) => {
            eprintln!("AI作成失敗: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = config.new_game();
    while !game.is_finished() {
        let player = game.current_player;
        let outcome = if game.is_ai_turn() {
            game.play_ai_move(&ai)
        } else {
            // 対話UIは持たないため、人間側の席は最初の合法手を打つ
            let Some(&position) = game.valid_moves().first() else {
                break;
            };
            game.play_move(position).map(|_| position)
        };

        match outcome {
            Ok(position) => println!(
                "{}手目: プレイヤー{} -> ({}, {})",
                game.get_move_count(),
                player.key(),
                position.row,
                position.col
            ),
            Err(e) => {
                eprintln!("着手失敗: {}", e);
                std::process::exit(1);
            }
        }
    }

    print_result(&game);

    if args.review {
        for (n, board) in game.review().iter().enumerate() {
            println!("--- {}手目 ---", n);
            print!("{}", board.display());
        }
    }
}

fn print_result(game: &GameState) {
    print!("{}", game.board.display());
    if let GameStatus::Finished { winner, score } = &game.game_status {
        println!("最終スコア: {} - {}", score.0, score.1);
        match winner {
            Some(key) => println!("勝者: プレイヤー{}", key.key()),
            None => println!("引き分け"),
        }
    }
}
