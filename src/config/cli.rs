use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cos-provider")]
#[command(about = "Upload and delete files on Tencent Cloud COS")]
pub struct CliConfig {
    /// TOML 設定檔；未給時從環境變數讀取
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the configuration schema as JSON
    Schema,

    /// Upload a local file and print the resulting metadata
    Upload {
        file: PathBuf,

        /// Key stem; defaults to the file stem
        #[arg(long)]
        hash: Option<String>,

        #[arg(long)]
        path: Option<String>,

        #[arg(long)]
        mime: Option<String>,
    },

    /// Delete an object by its key parts
    Delete {
        #[arg(long)]
        hash: String,

        /// Extension including the leading dot
        #[arg(long)]
        ext: String,

        #[arg(long)]
        path: Option<String>,
    },
}
