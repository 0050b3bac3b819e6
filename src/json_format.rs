//! JSON export of parsed statements, optionally with decoded descriptions.

use crate::description::{Bank, Description};
use crate::error::Result;
use crate::types::{Balance, Statement, Transaction};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonTransaction<'a> {
    #[serde(flatten)]
    transaction: &'a Transaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<Description>,
}

#[derive(Debug, Serialize)]
struct JsonStatement<'a> {
    statement_id: &'a str,
    account: &'a str,
    information: &'a str,
    start_balance: Option<&'a Balance>,
    transactions: Vec<JsonTransaction<'a>>,
    end_balance: Option<&'a Balance>,
    description: Option<&'a str>,
}

impl<'a> JsonStatement<'a> {
    fn new(statement: &'a Statement, bank: Option<Bank>) -> Self {
        let transactions = statement
            .transactions
            .iter()
            .map(|transaction| JsonTransaction {
                transaction,
                decoded: bank.map(|bank| bank.decode(&transaction.description)),
            })
            .collect();

        Self {
            statement_id: &statement.statement_id,
            account: &statement.account,
            information: &statement.information,
            start_balance: statement.start_balance.as_ref(),
            transactions,
            end_balance: statement.end_balance.as_ref(),
            description: statement.description.as_deref(),
        }
    }
}

/// Statements to be written as JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonExport<'a> {
    /// The statements to export.
    pub statements: &'a [Statement],

    /// When set, every transaction gets a `decoded` member holding its
    /// description decoded with this bank's convention.
    pub bank: Option<Bank>,
}

impl<'a> JsonExport<'a> {
    /// Write a pretty printed JSON array to any destination implementing `Write`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let statements: Vec<JsonStatement<'_>> = self
            .statements
            .iter()
            .map(|statement| JsonStatement::new(statement, self.bank))
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &statements)?;
        writeln!(writer)?;
        Ok(())
    }
}
