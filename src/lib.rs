//! MT940 Statement Library
//!
//! A library for parsing SWIFT MT940 bank statements and decoding the
//! structured remittance information Dutch banks put in `:86:` fields.
//!
//! # Features
//!
//! - Parse MT940 files into statements, balances and transactions
//! - Decode Rabobank, ABN AMRO, ING and RegioBank descriptions
//! - Export parsed statements to JSON or CSV
//!
//! # Examples
//!
//! ## Parsing an MT940 file
//!
//! ```no_run
//! use mt940_statements::mt940_format::Mt940;
//!
//! let mt940 = Mt940::from_path("statement.sta")?;
//! for statement in &mt940.statements {
//!     println!("{}: {} transactions", statement.account, statement.transactions.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Decoding a description
//!
//! ```
//! use mt940_statements::description::{Bank, FieldValue};
//!
//! let decoded = Bank::Rabobank.decode("/EREF/foo");
//! assert_eq!(decoded["eref"], FieldValue::Text("foo".into()));
//! ```

pub mod csv_format;
pub mod description;
pub mod error;
pub mod json_format;
pub mod lines;
pub mod mt940_format;
pub mod types;

use std::str::FromStr;

// Re-export commonly used types
pub use description::{
    abn_amro_description, ing_description, rabo_description, regiobank_description, Bank,
};
pub use error::{Error, Result};
pub use mt940_format::Mt940;
pub use types::{Balance, Sign, Statement, Transaction};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty printed JSON
    Json,
    /// CSV, one row per transaction
    Csv,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}
