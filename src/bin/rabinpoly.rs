//! `rabinpoly` — decide whether a polynomial is irreducible over GF(p).
//!
//! **Usage:**
//! ```text
//! rabinpoly --modulus <p> [--degree <n>] <c0> <c1> ... <cn>
//! ```
//!
//! Coefficients are given lowest degree first: `rabinpoly -p 2 1 1 0 1`
//! checks `x^3 + x + 1` over GF(2).

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use rabinpoly::{check_polynomial, Report};

/// Decide whether a polynomial is irreducible over GF(p).
#[derive(Parser)]
#[command(name = "rabinpoly", version, about)]
struct Args {
    /// Prime modulus p of the coefficient field.
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    modulus: i64,

    /// Declared degree n; defaults to the number of coefficients minus one.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    degree: Option<i64>,

    /// Coefficients of x^0, x^1, ..., x^n.
    #[arg(required = true, allow_negative_numbers = true)]
    coeffs: Vec<i64>,

    /// Print the report as JSON (requires the `serde` feature).
    #[arg(long)]
    json: bool,

    /// Log the steps of the test to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let degree = args.degree.unwrap_or(args.coeffs.len() as i64 - 1);
    let report = check_polynomial(args.modulus, degree, &args.coeffs)
        .with_context(|| format!("cannot test polynomial over GF({})", args.modulus))?;

    if args.json {
        return print_json(&report);
    }

    println!("Polynomial: {}", report.rendering);
    println!(
        "Status: {}",
        if report.irreducible {
            "irreducible"
        } else {
            "reducible"
        }
    );

    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_report: &Report) -> Result<()> {
    anyhow::bail!("JSON output needs the `serde` feature")
}
