//! Statement, balance and transaction records produced by the MT940 parser.

use crate::error::Error;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Debit/credit mark of a balance or statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `D`
    Debit,
    /// `C`
    Credit,
    /// `RD`, reversal of a debit.
    ReversalDebit,
    /// `RC`, reversal of a credit.
    ReversalCredit,
}

impl FromStr for Sign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Sign::Debit),
            "C" => Ok(Sign::Credit),
            "RD" => Ok(Sign::ReversalDebit),
            "RC" => Ok(Sign::ReversalCredit),
            _ => Err(Error::UnknownSign(s.to_string())),
        }
    }
}

impl Sign {
    /// Whether amounts carrying this mark are negative. Only a plain
    /// credit is positive.
    pub fn is_negative(&self) -> bool {
        !matches!(self, Sign::Credit)
    }

    /// Apply the mark to an unsigned magnitude.
    pub fn apply(&self, magnitude: Decimal) -> Decimal {
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Opening (`:60F:`) or closing (`:62F:`) balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Date of the balance.
    pub date: NaiveDate,

    /// Signed balance amount.
    pub amount: Decimal,

    /// Three letter currency code.
    pub currency: String,
}

/// One `:61:` statement line and the `:86:` information attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Value date.
    pub date: NaiveDate,

    /// Booking (entry) date, only when the statement line carries one.
    pub booking: Option<NaiveDate>,

    /// Signed amount.
    pub amount: Decimal,

    /// Four character transaction type code.
    pub id: String,

    /// Reference for the account owner.
    pub reference: String,

    /// Reference of the account servicing institution (after `//`).
    pub institution_reference: String,

    /// Second physical line of the `:61:` field, verbatim.
    pub additional_data: Option<String>,

    /// Concatenated `:86:` payloads.
    pub description: String,
}

/// A finalized bank statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Transaction reference number (`:20:`).
    pub statement_id: String,

    /// Account identification (`:25:`).
    pub account: String,

    /// Statement/sequence number (`:28:`, `:28C:`).
    pub information: String,

    /// Opening balance.
    pub start_balance: Option<Balance>,

    /// Statement lines in file order.
    pub transactions: Vec<Transaction>,

    /// Closing balance.
    pub end_balance: Option<Balance>,

    /// `:86:` information following the closing balance.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_str() {
        assert_eq!("D".parse::<Sign>().unwrap(), Sign::Debit);
        assert_eq!("C".parse::<Sign>().unwrap(), Sign::Credit);
        assert_eq!("RD".parse::<Sign>().unwrap(), Sign::ReversalDebit);
        assert_eq!("RC".parse::<Sign>().unwrap(), Sign::ReversalCredit);
        assert!(matches!("X".parse::<Sign>(), Err(Error::UnknownSign(s)) if s == "X"));
        assert!("d".parse::<Sign>().is_err());
    }

    #[test]
    fn test_sign_apply() {
        let ten = Decimal::new(1000, 2);
        assert_eq!(Sign::Debit.apply(ten), -ten);
        assert_eq!(Sign::ReversalDebit.apply(ten), -ten);
        assert_eq!(Sign::Credit.apply(ten), ten);
        assert_eq!(Sign::ReversalCredit.apply(ten), -ten);
    }

    #[test]
    fn test_reversal_of_credit_is_negative() {
        let reversal: Sign = "RC".parse().unwrap();
        assert!(reversal.is_negative());
        assert!(!Sign::Credit.is_negative());
    }
}
