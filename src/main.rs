use clap::Parser;
use tiddly2md::application::{ExportOptions, ExportService};
use tiddly2md::cli::{format_summary, Cli};
use tiddly2md::error::Tiddly2MdError;
use tiddly2md::infrastructure::{Config, CsvSource};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Tiddly2MdError> {
    let config = Config::load(cli.config.as_deref())?;

    let options = ExportOptions {
        outdir: cli.outdir,
        ext: cli.ext,
        tag_filters: cli.tags,
        frontmatter: !cli.no_frontmatter,
        languages: config.languages(),
    };

    let service = ExportService::new(CsvSource::new(cli.input_file));
    let summary = service.execute(&options)?;

    println!("{}", format_summary(&summary));
    Ok(())
}
