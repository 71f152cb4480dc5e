use std::path::PathBuf;
use std::process::ExitCode;

use amber::{AmberService, RenderOptions};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "amber")]
#[command(author, version)]
#[command(about = "Convert an HTML file to Amber XML")]
struct Cli {
    #[arg(help = "HTML file to convert")]
    input: PathBuf,

    #[arg(help = "Path the Amber XML is written to")]
    output: PathBuf,

    #[arg(long, default_value = "bash")]
    #[arg(help = "Snippet language for code blocks that declare none")]
    default_language: String,

    #[arg(long)]
    #[arg(help = "Keep level-1 headings instead of dropping them")]
    keep_h1: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            default_language: self.default_language.clone(),
            drop_level_one_headings: !self.keep_h1,
            ..RenderOptions::default()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let service = AmberService::with_options(cli.render_options());
    service
        .convert_file(&cli.input, &cli.output)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors exit with 1 rather than clap's 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
