//! MT940 Export - CLI tool for exporting MT940 statements as JSON or CSV.

use clap::Parser;
use mt940_statements::{
    csv_format::CsvExport, json_format::JsonExport, Bank, Error, Format, Mt940, Result, Statement,
};
use std::fs::File;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mt940_export")]
#[command(about = "Export MT940 bank statements as JSON or CSV", long_about = None)]
struct Cli {
    /// Input file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Output format (json, csv)
    #[arg(long = "output-format", default_value = "json")]
    output_format: String,

    /// Decode transaction descriptions (rabo, abn-amro, ing, regiobank); JSON only
    #[arg(long)]
    bank: Option<String>,

    /// Output file path (or stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let output_format = cli.output_format.parse::<Format>()?;
    let bank = cli.bank.as_deref().map(str::parse::<Bank>).transpose()?;
    check_options(output_format, bank)?;

    let mt940 = if let Some(ref input_path) = cli.input {
        Mt940::from_path(input_path)?
    } else {
        let mut stdin = io::stdin();
        Mt940::from_read(&mut stdin)?
    };
    info!(statements = mt940.statements.len(), "parsed input");

    if let Some(ref output_path) = cli.output {
        let mut file = File::create(output_path)?;
        write_output(&mut file, &mt940.statements, output_format, bank)?;
    } else {
        let mut stdout = io::stdout();
        write_output(&mut stdout, &mt940.statements, output_format, bank)?;
    }

    Ok(())
}

/// Decoded descriptions only have a place in JSON output.
fn check_options(format: Format, bank: Option<Bank>) -> Result<()> {
    match (format, bank) {
        (Format::Csv, Some(bank)) => Err(Error::InvalidFormat(format!(
            "--bank {bank:?} needs json output, got csv"
        ))),
        _ => Ok(()),
    }
}

fn write_output<W: Write>(
    writer: &mut W,
    statements: &[Statement],
    format: Format,
    bank: Option<Bank>,
) -> Result<()> {
    match format {
        Format::Json => JsonExport { statements, bank }.write_to(writer),
        Format::Csv => CsvExport { statements }.write_to(writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_requires_json_output() {
        assert!(check_options(Format::Json, Some(Bank::Ing)).is_ok());
        assert!(check_options(Format::Csv, None).is_ok());
        assert!(matches!(
            check_options(Format::Csv, Some(Bank::Rabobank)),
            Err(Error::InvalidFormat(_))
        ));
    }
}
