//! MT940 SWIFT format parser.
//!
//! MT940 is a SWIFT format for electronic account statements. A file holds
//! one or more statements, each opened by a `:20:` field. This module turns
//! the text into [`Statement`] records; tags it does not know are ignored.

use crate::error::{Error, Result};
use crate::lines::LogicalFields;
use crate::types::{Balance, Sign, Statement, Transaction};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Kind of field, keyed by its leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Begin,
    Statement,
    Account,
    Information,
    StartBalance,
    Transaction,
    Description,
    EndBalance,
}

const SECTIONS: &[(&str, Section)] = &[
    (":940:", Section::Begin),
    (":20:", Section::Statement),
    (":25:", Section::Account),
    (":28:", Section::Information),
    (":28C:", Section::Information),
    (":60F:", Section::StartBalance),
    (":61:", Section::Transaction),
    (":86:", Section::Description),
    (":62F:", Section::EndBalance),
];

fn classify(field: &str) -> Option<(Section, &str)> {
    SECTIONS
        .iter()
        .find_map(|(tag, section)| field.strip_prefix(tag).map(|rest| (*section, rest)))
}

/// Every statement found in an MT940 input, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt940 {
    /// The parsed statements.
    pub statements: Vec<Statement>,
}

impl Mt940 {
    /// Parse MT940 text held in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use mt940_statements::mt940_format::Mt940;
    ///
    /// let mt940 = Mt940::parse_str(":20:STMT1\n:25:123456789\n:62F:C120514EUR5638,62\n")?;
    /// assert_eq!(mt940.statements[0].account, "123456789");
    /// # Ok::<(), mt940_statements::Error>(())
    /// ```
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::parse_lines(text.lines().map(|line| Ok(line.to_string())))
    }

    /// Parse a sequence of already decoded lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::parse_lines(lines.into_iter().map(|line| Ok(line.into())))
    }

    /// Parse MT940 from any source implementing `Read`. The input must be UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use mt940_statements::mt940_format::Mt940;
    ///
    /// let mut file = File::open("statement.sta")?;
    /// let mt940 = Mt940::from_read(&mut file)?;
    /// println!("{} statements", mt940.statements.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let buf_reader = BufReader::new(reader);
        Self::parse_lines(buf_reader.lines().map(|line| line.map_err(Error::from)))
    }

    /// Open and parse the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        Self::from_read(&mut file)
    }

    fn parse_lines<I>(lines: I) -> Result<Self>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut pending = Accumulator::default();
        let mut statements = Vec::new();

        for field in LogicalFields::new(lines) {
            let field = field?;
            let Some((section, value)) = classify(&field) else {
                trace!(field = %field, "ignoring unknown field");
                continue;
            };

            match section {
                Section::Begin => {}
                Section::Statement => {
                    if let Some(statement) = std::mem::take(&mut pending).into_statement() {
                        statements.push(statement);
                    }
                    pending.statement_id = Some(value.to_string());
                }
                _ if !pending.is_open() => {
                    trace!(field = %field, "ignoring field outside of a statement");
                }
                Section::Account => pending.account.push_str(value),
                Section::Information => pending.information.push_str(value),
                Section::StartBalance => pending.start_balance = Some(parse_balance(value)?),
                Section::EndBalance => pending.end_balance = Some(parse_balance(value)?),
                Section::Transaction => pending.transactions.push(parse_transaction(value)?),
                Section::Description => pending.describe(value),
            }
        }

        if let Some(statement) = pending.into_statement() {
            statements.push(statement);
        }

        Ok(Mt940 { statements })
    }
}

/// Fields collected for the statement currently being read.
#[derive(Debug, Default)]
struct Accumulator {
    statement_id: Option<String>,
    account: String,
    information: String,
    start_balance: Option<Balance>,
    end_balance: Option<Balance>,
    description: Option<String>,
    transactions: Vec<Transaction>,
}

impl Accumulator {
    fn is_open(&self) -> bool {
        self.statement_id.is_some()
    }

    /// `:86:` belongs to the last statement line until the closing balance
    /// has been seen; after that it describes the statement itself.
    fn describe(&mut self, text: &str) {
        if self.end_balance.is_none() {
            if let Some(transaction) = self.transactions.last_mut() {
                transaction.description.push_str(text);
                return;
            }
        }
        self.description
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    fn into_statement(self) -> Option<Statement> {
        let statement_id = self.statement_id?;
        debug!(
            statement_id = %statement_id,
            transactions = self.transactions.len(),
            "statement finalized"
        );
        Some(Statement {
            statement_id,
            account: self.account,
            information: self.information,
            start_balance: self.start_balance,
            transactions: self.transactions,
            end_balance: self.end_balance,
            description: self.description,
        })
    }
}

/// Parse the value of a `:60F:`/`:62F:` field.
///
/// Layout: D/C mark, date (YYMMDD), currency, amount with `,` as decimal
/// separator, e.g. `C120511EUR5138,61`.
pub fn parse_balance(value: &str) -> Result<Balance> {
    let malformed = || Error::MalformedBalance(value.to_string());

    let sign = value.get(0..1).ok_or_else(malformed)?.parse::<Sign>()?;
    let date = value
        .get(1..7)
        .and_then(parse_mt940_date)
        .ok_or_else(malformed)?;
    let currency = value
        .get(7..10)
        .filter(|c| c.chars().all(|ch| ch.is_ascii_alphabetic()))
        .ok_or_else(malformed)?;
    let amount = value
        .get(10..)
        .and_then(parse_amount)
        .ok_or_else(malformed)?;

    Ok(Balance {
        date,
        amount: sign.apply(amount),
        currency: currency.to_string(),
    })
}

static STATEMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<date>\d{6})
        (?P<booking>\d{4})?
        (?P<sign>D|C|RC|RD)
        (?P<code>\w)??          # ING leaves out the funds code
        (?P<amount>(?:\d|,){1,15})
        (?P<id>\w{4})
        (?P<reference>.{0,34})
        ",
    )
    .expect("statement line regex")
});

/// Parse the value of a `:61:` field.
///
/// The first line holds the statement line proper; a second line, when
/// present, is kept verbatim as additional data.
pub fn parse_transaction(value: &str) -> Result<Transaction> {
    let malformed = || Error::MalformedTransaction(value.to_string());

    let (line, additional_data) = match value.split_once('\n') {
        Some((line, rest)) => (line, Some(rest.to_string())),
        None => (value, None),
    };

    let caps = STATEMENT_LINE.captures(line).ok_or_else(malformed)?;

    let raw_date = &caps["date"];
    let date = parse_mt940_date(raw_date).ok_or_else(malformed)?;
    let booking = match caps.name("booking") {
        Some(booking) => {
            let full = format!("{}{}", &raw_date[..2], booking.as_str());
            Some(parse_mt940_date(&full).ok_or_else(malformed)?)
        }
        None => None,
    };

    let sign = caps["sign"].parse::<Sign>()?;
    let amount = parse_amount(&caps["amount"]).ok_or_else(malformed)?;

    let reference = &caps["reference"];
    let (reference, institution_reference) = reference.split_once("//").unwrap_or((reference, ""));

    Ok(Transaction {
        date,
        booking,
        amount: sign.apply(amount),
        id: caps["id"].to_string(),
        reference: reference.to_string(),
        institution_reference: institution_reference.to_string(),
        additional_data,
        description: String::new(),
    })
}

/// Parse MT940 date format (YYMMDD) to NaiveDate.
fn parse_mt940_date(date_str: &str) -> Option<NaiveDate> {
    if date_str.len() != 6 || !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date_str, "%y%m%d").ok()
}

/// Parse an unsigned amount written with `,` as decimal separator.
fn parse_amount(amount_str: &str) -> Option<Decimal> {
    let cleaned = amount_str.trim().replace(',', ".");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    if let Some(fraction) = cleaned.strip_prefix('.') {
        return Decimal::from_str(&format!("0.{fraction}")).ok();
    }
    Decimal::from_str(cleaned).ok()
}
