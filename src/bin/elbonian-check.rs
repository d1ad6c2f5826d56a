// src/bin/elbonian-check.rs
// ============================================================================
// ELBONIAN CHECKER - Diagnóstico completo de un número
// ============================================================================
//
// A diferencia del conversor, no para en el primer error: muestra todas
// las reglas que fallan y avisa de entradas válidas pero no canónicas.
//
// Uso:
//   elbonian-check "IVV" [--json]
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;

use elbonian_convert::{diagnose, ValidationReport};

#[derive(Parser)]
#[command(name = "elbonian-check")]
#[command(about = "Diagnose an Arabic or Elbonian numeral")]
struct Args {
    /// Number to check
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn print_report(report: &ValidationReport) {
    println!("\n{}", "=".repeat(48));
    println!("  INPUT: '{}'", report.input);
    println!("{}", "=".repeat(48));

    match report.form {
        Some(form) => println!("  Form:  {}", form),
        None => println!("  Form:  unrecognized"),
    }
    if let Some(value) = report.value {
        println!("  Value: {}", value);
    }

    for error in &report.errors {
        println!("  ✗ {}", error);
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }

    println!("{}", "=".repeat(48));
    if report.valid {
        println!("  ✓ VALID");
    } else {
        println!("  ✗ INVALID ({} errors)", report.errors.len());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let report = diagnose(&args.number);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize validation report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}
