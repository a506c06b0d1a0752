//! Stable Match - Binary Entry Point
//!
//! ```text
//! stable-match match  <input> [--students-propose]
//! stable-match verify <input> <matching> [--students-propose]
//! ```
//!
//! The matching or verdict goes to stdout, logs go to stderr (`RUST_LOG`,
//! default `warn`). Exit status: 0 success/valid, 1 invalid, 2 usage or
//! input error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stable_match::engine::MatchingEngine;
use stable_match::io::{load_matching, load_model, write_matching};
use stable_match::types::{MatchSummary, Side};
use stable_match::verifier::verify;

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "stable-match")]
#[command(about = "Compute and verify hospital/student stable matchings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the stable matching of an instance and print it
    Match {
        /// Instance file
        input: PathBuf,
        /// Let students propose (student-optimal matching)
        #[arg(long)]
        students_propose: bool,
    },
    /// Check a matching file against an instance (exit 1 if invalid)
    Verify {
        /// Instance file
        input: PathBuf,
        /// Matching file, one `hospital student` pair per line
        matching: PathBuf,
        /// Orient pairs with students proposing
        #[arg(long)]
        students_propose: bool,
    },
}

fn proposing_side(students_propose: bool) -> Side {
    if students_propose {
        Side::Student
    } else {
        Side::Hospital
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_ERROR),
            };
        }
    };

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Match {
            input,
            students_propose,
        } => {
            let proposing = proposing_side(students_propose);
            let model = load_model(&input, proposing)
                .with_context(|| format!("failed to load instance {}", input.display()))?;

            let mut engine = MatchingEngine::new();
            let outcome = engine.run(&model).context("matching failed")?;

            let stdout = io::stdout();
            write_matching(stdout.lock(), &outcome.matching).context("failed to write matching")?;

            let summary = MatchSummary::new(&model, &outcome.matching, outcome.proposals)?;
            info!(
                size = summary.size,
                proposals = summary.proposals,
                proposer_mean_rank = ?summary.mean_proposer_rank(),
                receiver_mean_rank = ?summary.mean_receiver_rank(),
                "matching computed"
            );
            debug!(
                fingerprint = %summary.fingerprint_hex(),
                rejections = outcome.rejections,
                displacements = outcome.displacements,
                "run details"
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            input,
            matching,
            students_propose,
        } => {
            let proposing = proposing_side(students_propose);
            let model = load_model(&input, proposing)
                .with_context(|| format!("failed to load instance {}", input.display()))?;
            let pairs = load_matching(&matching, proposing)
                .with_context(|| format!("failed to load matching {}", matching.display()))?;

            let result = verify(&model, &pairs);

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in result.report_lines(proposing) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;

            if result.is_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                info!(violations = result.violations().len(), "matching rejected");
                Ok(ExitCode::from(EXIT_INVALID))
            }
        }
    }
}
