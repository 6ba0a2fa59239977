mod cli;

use clap::Parser;
use cvss_calc::engine::Formula;
use cvss_calc::error::CvssError;
use cvss_calc::types::config::{CalcConfig, OutputFormat};
use cvss_calc::types::report::Calculation;
use cvss_calc::{catalog, config, report, vector, Calculator};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_SELECTION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32, CvssError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?;
    debug!(?cfg, "configuration loaded");

    match cli.command {
        cli::Commands::Score(cmd) => {
            let selection = cmd.metrics.selection()?;
            let formula = cmd.formula.map(Formula::from).unwrap_or(cfg.scoring.formula);
            let format = cmd.format.map(OutputFormat::from).unwrap_or(cfg.output.format);

            let calculation = Calculation::new(&selection, formula, cfg.output.vector_prefix)?;
            let rendered = report::render(&calculation, format)?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Vector(cmd) => {
            let selection = cmd.metrics.selection()?;
            let encoded = vector::encode_vector(&selection)?;
            if cmd.prefix || cfg.output.vector_prefix {
                println!("{}", vector::with_prefix(&encoded));
            } else {
                println!("{encoded}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Metrics(cmd) => {
            let format = cmd.format.map(OutputFormat::from).unwrap_or(cfg.output.format);
            let rendered = report::render_catalog(catalog::all(), format)?;
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session(cmd) => {
            let formula = cmd.formula.map(Formula::from).unwrap_or(cfg.scoring.formula);
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_session(stdin.lock(), &mut stdout.lock(), formula, &cfg)
        }
    }
}

/// Drive a calculator from `KEY=Value` lines, printing both outputs after each change.
fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    formula: Formula,
    cfg: &CalcConfig,
) -> Result<i32, CvssError> {
    let mut calculator = Calculator::new(formula);
    print_outcome(out, &calculator, cfg)?;

    let mut rejected = 0usize;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((code, label)) = line.split_once('=') else {
            eprintln!("error: line {}: expected KEY=Value, got '{}'", index + 1, line);
            rejected += 1;
            continue;
        };

        match calculator.select(code.trim(), label.trim()) {
            Ok(_) => print_outcome(out, &calculator, cfg)?,
            Err(e) => {
                eprintln!("error: line {}: {}", index + 1, e);
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn print_outcome<W: Write>(
    out: &mut W,
    calculator: &Calculator,
    cfg: &CalcConfig,
) -> io::Result<()> {
    let outcome = calculator.outcome();
    let vector = match &outcome.vector {
        Some(v) if cfg.output.vector_prefix => vector::with_prefix(v),
        Some(v) => v.clone(),
        None => "N/A".to_string(),
    };
    writeln!(out, "score: {} vector: {}", outcome.score, vector)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_selection_error() {
                exit_code::INVALID_SELECTION
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
