//! ING `:86:` convention.
//!
//! ING writes a flat stream of `/TAG/value/` pairs. Some tags carry
//! sub-fields separated by `/`, one of which is free text that may itself
//! contain `/`.

use super::{flatten, Description, FieldValue, Fields};
use regex::Regex;
use std::sync::LazyLock;

static ING_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(RTRN|EREF|PREF|MARF|CSID|CNTP|REMI|PURP|ULT[CD])/").expect("ING tag regex")
});

/// Layout of a tag's value.
enum Layout {
    Plain,
    /// Sub-field names and the index of the free text one.
    Nested(&'static [&'static str], usize),
}

fn definition(tag: &str) -> Option<(&'static str, Layout)> {
    let def = match tag {
        "RTRN" => ("rtrn", Layout::Plain),
        "EREF" => ("eref", Layout::Plain),
        "PREF" => ("pref", Layout::Plain),
        "MARF" => ("marf", Layout::Plain),
        "CSID" => ("csid", Layout::Plain),
        "CNTP" => ("cntp", Layout::Nested(&["account_number", "bic", "name", "city"], 2)),
        "REMI" => ("remi", Layout::Nested(&["code", "issuer", "remittance_info"], 2)),
        "PURP" => ("purp", Layout::Plain),
        "ULTC" => ("ultc", Layout::Nested(&["name", "id"], 0)),
        "ULTD" => ("ultd", Layout::Nested(&["name", "id"], 0)),
        _ => return None,
    };
    Some(def)
}

/// Decode an ING description.
///
/// `cntp`, `remi`, `ultc` and `ultd` decode to [`FieldValue::Nested`];
/// the other tags to [`FieldValue::Text`].
pub fn ing_description(description: &str) -> Description {
    let description = flatten(description);
    let mut values = Description::new();

    let matches: Vec<_> = ING_TAGS.captures_iter(&description).collect();
    for (i, caps) in matches.iter().enumerate() {
        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(description.len(), |next| next.start());
        let value = drop_last_char(&description[whole.end()..end]);

        let Some((name, layout)) = definition(tag.as_str()) else {
            continue;
        };
        let value = match layout {
            Layout::Plain => FieldValue::Text(value.to_string()),
            Layout::Nested(subfields, free_text) => {
                FieldValue::Nested(split_subfields(value, subfields, free_text))
            }
        };
        values.insert(name, value);
    }

    values
}

/// Each value is closed by the `/` that precedes the next tag.
fn drop_last_char(value: &str) -> &str {
    let mut chars = value.chars();
    chars.next_back();
    chars.as_str()
}

/// Split `value` left to right up to the free text sub-field, then the
/// remainder right to left for the sub-fields after it. Whatever is left
/// in the middle is the free text.
fn split_subfields(value: &str, subfields: &'static [&'static str], free_text: usize) -> Fields {
    let mut fields = Fields::new();

    let leading: Vec<&str> = value.splitn(free_text + 1, '/').collect();
    let (remainder, leading) = match leading.split_last() {
        Some((remainder, leading)) => (*remainder, leading),
        None => (value, &[][..]),
    };
    for (name, sub) in subfields[..free_text].iter().zip(leading) {
        fields.insert(*name, sub.to_string());
    }

    let trailing_count = subfields.len() - free_text - 1;
    let mut trailing: Vec<&str> = remainder.rsplitn(trailing_count + 1, '/').collect();
    trailing.reverse();
    for (name, sub) in subfields[free_text..].iter().zip(trailing) {
        fields.insert(*name, sub.to_string());
    }

    fields
}
