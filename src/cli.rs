use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lookalike")]
#[command(about = "アイドルそっくりデータセット閲覧・管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データセットJSONファイル（省略時は設定ファイルの値）
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全員を一覧表示（show-all）
    List {
        /// 名前・グループの前方一致で絞り込み
        #[arg(short, long)]
        query: Option<String>,

        /// ビューモデルをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1人と類似上位を表示（show-one）
    Show {
        /// アイドル名（大文字小文字を区別）
        #[arg(required = true)]
        name: String,

        /// ビューモデルをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 2人を比較（show-two）
    Compare {
        /// 基準のアイドル名
        #[arg(required = true)]
        a: String,

        /// 比較相手のアイドル名
        #[arg(required = true)]
        b: String,

        /// ビューモデルをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// データセットの整合性をチェック
    Validate,

    /// members.json からプロフィール画像をダウンロード
    FetchImages {
        /// プロフィールフォルダ（グループ/members.json）
        #[arg(short, long)]
        profile_dir: Option<PathBuf>,

        /// 同時ダウンロード数
        #[arg(short, long)]
        concurrency: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// データセットのパスを設定
        #[arg(long)]
        set_data_path: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
