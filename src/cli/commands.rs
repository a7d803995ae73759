//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tiddly2md")]
#[command(
    about = "Convert TiddlyWiki tiddlers exported as CSV to individual Markdown files",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Exported CSV file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = "output")]
    pub outdir: PathBuf,

    /// File extension
    #[arg(short, long, default_value = "md")]
    pub ext: String,

    /// Valid tag to export, can be given multiple times
    #[arg(short, long = "tags", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Write only the converted body, without frontmatter
    #[arg(long)]
    pub no_frontmatter: bool,

    /// TOML config file (e.g. to change the language tags)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log every written file
    #[arg(short, long)]
    pub verbose: bool,
}
