//! `attendance` CLI — compute shared lesson-attendance time from JSON logs.
//!
//! ## Usage
//!
//! ```sh
//! # Compute shared time (stdin → stdout)
//! echo '{"lesson":[10,20],"pupil":[9,12,15,18],"tutor":[11,16]}' | attendance compute
//!
//! # Compute from file to file
//! attendance compute -i session.json -o total.txt
//!
//! # Run the built-in verification table
//! attendance check
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use attendance_core::shared_time_from_json;

mod vectors;

#[derive(Parser)]
#[command(
    name = "attendance",
    version,
    about = "Shared lesson-attendance time calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the shared time for a JSON attendance log
    Compute {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run the built-in verification table
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { input, output } => {
            let json = read_input(input.as_deref())?;
            let total = shared_time_from_json(&json)?;
            write_output(output.as_deref(), &format!("{total}\n"))?;
        }
        Commands::Check => run_check()?,
    }

    Ok(())
}

/// Iterate the verification table, printing the running case index, and
/// stop with an error on the first mismatch.
fn run_check() -> Result<()> {
    for (i, case) in vectors::CASES.iter().enumerate() {
        println!("case {}", i);
        let got = shared_time_from_json(case.input)
            .with_context(|| format!("Case {} failed to parse", i))?;
        anyhow::ensure!(
            got == case.expected,
            "Case {}: got {}, expected {}",
            i,
            got,
            case.expected
        );
    }
    println!("all {} cases passed", vectors::CASES.len());
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
