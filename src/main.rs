// src/main.rs
// ============================================================================
// ELBONIAN-CONVERT CLI
// ============================================================================
//
// Uso:
//   elbonian-convert 945            → DemV
//   elbonian-convert DemV           → 945
//   elbonian-convert 945 --to arabic
//   elbonian-convert " MDC " --json
//
// Códigos de salida:
//   0 - OK
//   2 - MalformedNumber
//   3 - ValueOutOfBounds
//
// ============================================================================

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use elbonian_convert::{ConvertError, Converter, NumberForm};

/// Notación destino
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    /// La contraria a la de entrada
    Auto,
    Arabic,
    Elbonian,
}

#[derive(Parser, Debug)]
#[command(name = "elbonian-convert")]
#[command(about = "Convert between Arabic and Elbonian numerals")]
#[command(version)]
struct Args {
    /// Number to convert (Arabic digits or Elbonian symbols)
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    number: String,

    /// Target notation
    #[arg(long, value_enum, default_value_t = Target::Auto)]
    to: Target,

    /// Print a JSON report instead of the bare result
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn exit_code(err: &ConvertError) -> i32 {
    match err {
        ConvertError::MalformedNumber { .. } => 2,
        ConvertError::ValueOutOfBounds { .. } => 3,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let converter = match Converter::new(&args.number) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&converter.report())
            .context("Failed to serialize conversion report")?;
        println!("{}", json);
        return Ok(());
    }

    let target = match (args.to, converter.form()) {
        (Target::Auto, NumberForm::Decimal) => Target::Elbonian,
        (Target::Auto, NumberForm::Symbolic) => Target::Arabic,
        (t, _) => t,
    };

    match target {
        Target::Arabic => println!("{}", converter.to_decimal()),
        _ => println!("{}", converter.to_symbol_form()),
    }

    Ok(())
}
