//! Command-line pool maker.
//!
//! Reads one or more roster files, draws each into club-balanced pools and
//! prints a report per file.

mod config;
mod logging;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use config::{CliConfig, OutputFormat, Overrides};
use log::{error, info};
use pico_args::Arguments;
use pool_maker::PoolMaker;
use report::DrawReport;

const HELP: &str = "\
Draw ranked competitors into club-balanced pools

USAGE:
  pm_cli [OPTIONS] <ROSTER>...

OPTIONS:
  --sizes      LIST        Pool size pairs in priority order  [default: env POOL_SIZE_PAIRS or 6:7,7:8,5:6]
  --unrated    C           Rank class of unrated competitors  [default: env POOL_UNRATED_CLASS or U]
  --format     FORMAT      Report format, text or json        [default: env POOL_OUTPUT_FORMAT or text]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  POOL_SIZE_PAIRS          Comma-separated small:large pairs (e.g., 6:7,7:8)
  POOL_UNRATED_CLASS       Single character marking unrated competitors
  POOL_OUTPUT_FORMAT       text or json
  RUST_LOG                 Log filter (e.g., debug)
";

struct Args {
    overrides: Overrides,
    rosters: Vec<PathBuf>,
}

fn parse_args(mut pargs: Arguments) -> Result<Args, pico_args::Error> {
    let overrides = Overrides {
        sizes: pargs.opt_value_from_str("--sizes")?,
        unrated: pargs.opt_value_from_str("--unrated")?,
        format: pargs.opt_value_from_str("--format")?,
    };
    let rosters = pargs
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect();
    Ok(Args { overrides, rosters })
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = parse_args(pargs)?;
    if args.rosters.is_empty() {
        anyhow::bail!("No roster files given, see --help");
    }

    logging::init();

    let config = CliConfig::from_env(args.overrides)?;
    config.validate()?;
    info!(
        "Drawing {} roster(s) with size pairs {:?}",
        args.rosters.len(),
        config.draw.size_pairs
    );

    let maker = PoolMaker::new(config.draw.clone())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for path in &args.rosters {
        if let Err(e) = run_one(&maker, path, config.format, &mut out) {
            error!("{e:#}");
            failed += 1;
        }
    }
    out.flush()?;

    if failed > 0 {
        anyhow::bail!("{failed} of {} roster(s) failed", args.rosters.len());
    }
    Ok(())
}

/// Read, draw and report a single roster file
fn run_one<W: Write>(
    maker: &PoolMaker,
    path: &Path,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), Error> {
    let name = path.display().to_string();
    let roster = maker
        .reader()
        .read_path(path)
        .with_context(|| format!("Failed to read roster {name}"))?;
    let draw = maker
        .draw(&roster)
        .with_context(|| format!("Failed to draw roster {name}"))?;

    let report = DrawReport::new(&name, &roster, &draw);
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => report.write_json(out)?,
    }
    Ok(())
}
