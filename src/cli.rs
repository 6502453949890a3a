use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "johnek")]
#[command(about = "Johnek Architects サイトのコンテンツ閲覧・検証ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// コンテンツフォルダ（content.json / projects.json / services.json）
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロジェクト一覧（カテゴリ・キーワードで絞り込み）
    Projects {
        /// カテゴリ（all/residential/commercial/...）
        #[arg(short, long, default_value = "all")]
        category: String,

        /// 名前・所在地・説明の部分一致（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// サービス一覧
    Services {
        /// カテゴリID
        #[arg(short, long, default_value = "all")]
        category: String,

        /// タイトル・説明の部分一致
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// プロジェクト/サービスの詳細
    Show {
        /// 種類 (project/service)
        kind: ItemKind,

        /// slug
        slug: String,
    },

    /// WhatsApp問い合わせリンクを出力
    Share {
        /// 種類 (project/service)
        kind: ItemKind,

        /// slug
        slug: String,
    },

    /// タイプライター表示のプレビュー
    Reveal {
        /// 表示する文字列
        text: String,

        /// 1文字あたりの間隔（ms、省略時は設定値）
        #[arg(short, long)]
        delay: Option<u64>,

        /// 全文表示後に消して繰り返す
        #[arg(long = "loop")]
        looping: bool,

        /// この経過時間（ms）の表示だけを出力
        #[arg(long, conflicts_with = "play")]
        at: Option<u64>,

        /// ターミナルで再生
        #[arg(long)]
        play: bool,

        /// ループ再生の長さ（ms）
        #[arg(long, default_value = "10000")]
        duration: u64,
    },

    /// コンテンツの整合性チェック
    Validate,

    /// 問い合わせフォーム（未指定の項目は対話入力）
    Contact {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// WhatsApp番号を設定
        #[arg(long)]
        set_whatsapp_number: Option<String>,

        /// 既定のコンテンツフォルダを設定
        #[arg(long)]
        set_content_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Project,
    Service,
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" | "p" => Ok(ItemKind::Project),
            "service" | "services" | "s" => Ok(ItemKind::Service),
            _ => Err(format!("Unknown kind: {}. Use project or service", s)),
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Project => write!(f, "project"),
            ItemKind::Service => write!(f, "service"),
        }
    }
}
