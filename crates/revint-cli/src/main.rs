//! revint CLI
//!
//! Command-line interface for integer digit reversal and suite judging.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use revint_harness::{Judge, Suite, SuiteReport};
use revint_parser::ParseMode;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where the integers come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Values(Vec<String>),
    Input(String),
    Suite(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    source: Source,
    mode: ParseMode,
    keep_going: bool,
    json: bool,
    verbosity: u8,
}

impl RunConfig {
    fn from_matches(matches: &ArgMatches) -> Self {
        let source = if let Some(path) = matches.get_one::<PathBuf>("suite") {
            Source::Suite(path.clone())
        } else if let Some(text) = matches.get_one::<String>("input") {
            Source::Input(text.clone())
        } else if let Some(values) = matches.get_many::<String>("values") {
            Source::Values(values.cloned().collect())
        } else {
            Source::Stdin
        };

        let mode = if matches.get_flag("strict") {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        };

        Self {
            source,
            mode,
            keep_going: matches.get_flag("keep-going"),
            json: matches.get_flag("json"),
            verbosity: matches.get_count("verbose"),
        }
    }

    fn judge(&self) -> Judge {
        Judge::new().mode(self.mode).keep_going(self.keep_going)
    }
}

fn cli() -> Command {
    Command::new("revint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reverse the decimal digits of integers within the signed 32-bit range")
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .help("Integers to reverse (an overflowing reversal prints 0)")
                .num_args(1..)
                .allow_negative_numbers(true)
                .conflicts_with_all(["input", "suite"]),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("TEXT")
                .help("Reverse every integer in TEXT (one per line, comma separated or [a,b])")
                .num_args(1)
                .allow_hyphen_values(true)
                .conflicts_with("suite"),
        )
        .arg(
            Arg::new("suite")
                .short('s')
                .long("suite")
                .value_name("FILE")
                .help("Judge a JSON test suite")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject inputs outside the signed 32-bit range")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-going")
                .long("keep-going")
                .help("Judge every case instead of stopping at the first failure")
                .action(ArgAction::SetTrue)
                .requires("suite"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (RUST_LOG overrides)")
                .action(ArgAction::Count),
        )
        .after_help("With no VALUE, --input or --suite, integers are read from stdin.")
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() {
    let matches = cli().get_matches();
    let config = RunConfig::from_matches(&matches);
    init_tracing(config.verbosity);
    debug!(?config, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

fn run(config: &RunConfig, out: &mut impl Write) -> Result<i32> {
    let judge = config.judge();

    let exit_code = match &config.source {
        Source::Values(values) => {
            let mut reversed = Vec::with_capacity(values.len());
            for (index, value) in values.iter().enumerate() {
                reversed.extend(judge.reverse_input(value, &format!("<arg {}>", index + 1))?);
            }
            write_values(out, &reversed, config.json)?;
            0
        }
        Source::Input(text) => {
            let reversed = judge.reverse_input(text, "<input>")?;
            write_values(out, &reversed, config.json)?;
            0
        }
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            let reversed = judge.reverse_input(&text, "<stdin>")?;
            write_values(out, &reversed, config.json)?;
            0
        }
        Source::Suite(path) => {
            info!(path = %path.display(), "loading suite");
            let suite = Suite::load(path).context("failed to load suite")?;
            let report = judge.run_suite(&suite);
            write_report(out, &report, config.json)?;
            i32::from(!report.accepted())
        }
    };

    out.flush()?;
    Ok(exit_code)
}

fn write_values(out: &mut impl Write, values: &[i32], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(values)?)?;
    } else {
        for value in values {
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

fn write_report(out: &mut impl Write, report: &SuiteReport, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    let name = if report.name.is_empty() {
        "suite"
    } else {
        report.name.as_str()
    };
    writeln!(
        out,
        "{name}: {} ({}/{} passed)",
        report.status, report.passed, report.total
    )?;

    for result in &report.results {
        let case = result.index + 1;
        if result.hidden {
            writeln!(out, "  case {case} (hidden): {}", result.verdict)?;
        } else if result.passed {
            writeln!(out, "  case {case}: {}", result.verdict)?;
        } else if let Some(error) = &result.error {
            writeln!(out, "  case {case}: {}: {error}", result.verdict)?;
        } else {
            writeln!(
                out,
                "  case {case}: {}: input {}, expected {}, got {}",
                result.verdict,
                result.input.trim(),
                result.expected_output.trim(),
                result.actual_output
            )?;
        }
    }

    if let Some(reason) = &report.failure_reason {
        writeln!(out, "failure: {reason}")?;
    }
    Ok(())
}
