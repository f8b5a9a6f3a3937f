// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

#[derive(Parser, Debug)]
#[command(name = "recipe_stats", version, about = "レシピ配達統計の集計ツール")]
pub struct Args {
    /// 配達記録のJSONファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// 時間帯集計の対象郵便番号
    #[arg(long, default_value = "10120")]
    pub postcode: String,

    /// 時間帯の開始時 (AM)
    #[arg(long, default_value_t = 10)]
    pub from: u32,

    /// 時間帯の終了時 (PM)
    #[arg(long, default_value_t = 3)]
    pub to: u32,

    /// レシピ名を絞り込むキーワード（カンマ区切り・複数指定可）
    #[arg(long, value_delimiter = ',')]
    pub name: Vec<String>,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// total_json_objects を出力に含める
    #[arg(long)]
    pub totals: bool,
}
