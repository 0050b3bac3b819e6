//! RegioBank `:86:` convention.
//!
//! Positional rather than tag based:
//!
//! ```text
//! <account number> <name>
//! <address>
//! aan <name>,<iban>,<remittance info>,<description>   (SEPA)
//! <reference>                                         (otherwise)
//! ```

use super::{split_lines, Fields};

/// Decode a RegioBank description. Any other shape yields an empty mapping.
pub fn regiobank_description(description: &str) -> Fields {
    let lines = split_lines(description);
    let [first, second, rest @ ..] = lines.as_slice() else {
        return Fields::new();
    };
    if rest.is_empty() {
        return Fields::new();
    }
    let Some((account_number, name)) = first.split_once(' ') else {
        return Fields::new();
    };
    let third = rest.concat();

    let mut values = Fields::from([
        ("account_number", account_number.to_string()),
        ("name", name.to_string()),
        ("address", second.to_string()),
    ]);

    if third.starts_with(&format!("aan {name}")) {
        let parts: Vec<&str> = third.split(',').collect();
        let [_, iban, remittance_info, sepa_description] = parts.as_slice() else {
            return Fields::new();
        };
        values.insert("iban", iban.to_string());
        values.insert("remittance_info", remittance_info.to_string());
        values.insert("description", sepa_description.to_string());
    } else {
        values.insert("reference", third);
    }

    values
}
