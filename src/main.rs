use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dirtree::{Stats, TreeGenerator, normalize_output_path};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let root = cli
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut generator = TreeGenerator::new(cli.tree_config(), cli.format);

    let Some(output) = cli.output.as_deref() else {
        let rendered = generator.render_to_string(&root).await?;
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        return Ok(exit_code(&generator.stats()));
    };

    let stats = generator.render_to_file(&root, output).await?;
    log_stats(&stats);
    println!(
        "Output saved to: {}",
        normalize_output_path(output, cli.format).display()
    );
    Ok(exit_code(&stats))
}

fn exit_code(stats: &Stats) -> ExitCode {
    if stats.errors > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn log_stats(stats: &Stats) {
    info!(
        dirs = stats.dirs,
        files = stats.files,
        skipped = stats.skipped,
        "Generation statistics"
    );
    if stats.errors > 0 {
        warn!(errors = stats.errors, "Some directories could not be read");
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dirtree=debug,warn")
    } else {
        EnvFilter::new("dirtree=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
