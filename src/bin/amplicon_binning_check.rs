use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use amplicon_binning_check::error::{CheckError, Result};
use amplicon_binning_check::{check_binning, DEFAULT_TRUTH_SET_PATH};

#[derive(Parser, Debug)]
#[command(name = "amplicon-binning-check",
          version,
          about = "Scores amplicon binning assignments against an alignment-report truth set",
          long_about = None,
          arg_required_else_help(true))]
struct Cli {
    #[clap(help = "Tab-delimited binning result file (read id, assigned amplicon, ...)")]
    #[clap(value_name = "BINNING")]
    binning_path: PathBuf,

    #[clap(short = 't')]
    #[clap(long = "truth")]
    #[clap(help = "Alignment report used as the truth set (default is relative to the current directory)")]
    #[clap(value_name = "TRUTH")]
    #[clap(default_value = DEFAULT_TRUTH_SET_PATH)]
    truth_path: PathBuf,

    #[clap(short = 'm')]
    #[clap(long = "mismatches")]
    #[clap(help = "Also write every incorrect assignment to this TSV file")]
    #[clap(value_name = "PATH")]
    mismatches_path: Option<PathBuf>,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    verbosity: u8,
}

fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(filter_level)
        .filter_module(env!("CARGO_CRATE_NAME"), filter_level)
        .init();
}

fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg.to_string());
    spinner
}

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!(
        "Running {}-{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let progress = spinner("Scoring binning assignments...");
    let results = check_binning(
        &cli.truth_path,
        &cli.binning_path,
        cli.mismatches_path.is_some(),
    );
    progress.finish_and_clear();
    let results = results?;

    if let Some(path) = &cli.mismatches_path {
        fs::write(path, results.get_mismatch_text())
            .map_err(|e| CheckError::io(path.display().to_string(), e))?;
        log::info!(
            "Wrote {} incorrect assignments to {}",
            results.tally.mismatches.len(),
            path.display()
        );
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(results.get_report_text().as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| CheckError::io("<stdout>", e))?;

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
