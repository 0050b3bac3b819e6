//! Decoders for the structured remittance information banks embed in `:86:`.
//!
//! Every decoder is lenient: text that does not follow the bank's convention
//! yields an empty or partial mapping, never an error.

mod abn_amro;
mod ing;
mod rabo;
mod regiobank;

pub use abn_amro::abn_amro_description;
pub use ing::ing_description;
pub use rabo::rabo_description;
pub use regiobank::regiobank_description;

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Field name to value mapping produced by a decoder.
pub type Fields = BTreeMap<&'static str, String>;

/// Value of a decoded field: plain text or a group of nested sub-fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A plain text value.
    Text(String),
    /// Sub-fields of a composite tag, e.g. ING's `CNTP`.
    Nested(Fields),
}

/// Decoded description of any supported bank.
pub type Description = BTreeMap<&'static str, FieldValue>;

/// Banks with a known description convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    /// Rabobank
    Rabobank,
    /// ABN AMRO
    AbnAmro,
    /// ING
    Ing,
    /// RegioBank
    RegioBank,
}

impl FromStr for Bank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rabo" | "rabobank" => Ok(Bank::Rabobank),
            "abn-amro" | "abn_amro" | "abnamro" | "abn" => Ok(Bank::AbnAmro),
            "ing" => Ok(Bank::Ing),
            "regiobank" | "regio" => Ok(Bank::RegioBank),
            _ => Err(Error::UnknownBank(s.to_string())),
        }
    }
}

impl Bank {
    /// Decode `description` with this bank's convention.
    pub fn decode(&self, description: &str) -> Description {
        let fields = match self {
            Bank::Rabobank => rabo_description(description),
            Bank::AbnAmro => abn_amro_description(description),
            Bank::RegioBank => regiobank_description(description),
            Bank::Ing => return ing_description(description),
        };
        fields
            .into_iter()
            .map(|(name, value)| (name, FieldValue::Text(value)))
            .collect()
    }
}

/// Split on `\n`, `\r\n` and bare `\r`; a trailing break adds no line.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .collect()
}

/// Remove line breaks; they carry no meaning inside a bank payload.
fn flatten(description: &str) -> String {
    description.split(['\r', '\n']).collect()
}

/// Extract the values of SWIFT style `/TAG/` markers.
///
/// `tags` are tried in order against the start of the remaining text. A
/// matched value runs up to the nearest later occurrence of any other marker
/// that has not produced a value yet, so `/` inside a value only ends it when
/// a known marker follows.
pub fn find_swift_tags(tags: &[(&'static str, &'static str)], description: &str) -> Fields {
    let mut values = Fields::new();
    let mut rest = description;

    for &(tag, name) in tags {
        if let Some(after) = rest.strip_prefix(tag) {
            let end = tags
                .iter()
                .filter(|(next_tag, next_name)| *next_tag != tag && !values.contains_key(next_name))
                .filter_map(|(next_tag, _)| after.find(next_tag))
                .min()
                .unwrap_or(after.len());
            values.insert(name, after[..end].to_string());
            rest = &after[end..];
        }
        if rest.is_empty() {
            break;
        }
    }

    values
}
