// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use topup_report_domain::config::{
    DEFAULT_COMPANIES_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_USERS_FILE, ReportPaths,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "topup_report",
    version = crate::VERSION,
    about = "会社別にユーザーを分類し、トークン補充レポートを出力します"
)]
pub struct Args {
    /// 会社データ (JSON配列)
    #[arg(long, default_value = DEFAULT_COMPANIES_FILE, value_hint = ValueHint::FilePath)]
    pub companies: PathBuf,

    /// ユーザーデータ (JSON配列)
    #[arg(long, default_value = DEFAULT_USERS_FILE, value_hint = ValueHint::FilePath)]
    pub users: PathBuf,

    /// レポートの出力先
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// ファイルではなく標準出力へレポートを書き出す
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// ログ出力を詳細にする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn paths(&self) -> ReportPaths {
        ReportPaths::new(&self.companies, &self.users, &self.output)
    }
}
