//! CSV export of parsed statements.
//!
//! One row per transaction; statement level data is repeated on each row.

use crate::error::Result;
use crate::types::Statement;
use csv::Writer;
use serde::Serialize;
use std::io::Write;

/// CSV transaction record structure.
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    statement: &'a str,
    account: &'a str,
    date: String,
    booking: String,
    amount: String,
    id: &'a str,
    reference: &'a str,
    institution_reference: &'a str,
    additional_data: &'a str,
    description: &'a str,
}

/// Statements to be written as CSV.
#[derive(Debug, Clone, Copy)]
pub struct CsvExport<'a> {
    /// The statements to export.
    pub statements: &'a [Statement],
}

impl<'a> CsvExport<'a> {
    /// Write the transactions to any destination implementing `Write`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use mt940_statements::csv_format::CsvExport;
    /// use mt940_statements::mt940_format::Mt940;
    ///
    /// let mt940 = Mt940::from_path("statement.sta")?;
    /// let mut file = File::create("transactions.csv")?;
    /// CsvExport { statements: &mt940.statements }.write_to(&mut file)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut csv_writer = Writer::from_writer(writer);

        for statement in self.statements {
            for transaction in &statement.transactions {
                let record = CsvRecord {
                    statement: &statement.statement_id,
                    account: &statement.account,
                    date: transaction.date.format("%Y-%m-%d").to_string(),
                    booking: transaction
                        .booking
                        .map(|booking| booking.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                    amount: transaction.amount.to_string(),
                    id: &transaction.id,
                    reference: &transaction.reference,
                    institution_reference: &transaction.institution_reference,
                    additional_data: transaction.additional_data.as_deref().unwrap_or_default(),
                    description: &transaction.description,
                };
                csv_writer.serialize(record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
