//! ABN AMRO `:86:` convention.

use super::{find_swift_tags, flatten, Fields};
use regex::Regex;
use std::sync::LazyLock;

static ABN_AMRO_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}\.[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,3})").expect("account regex")
});

static ABN_AMRO_GIRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^GIRO +([0-9]+)").expect("giro regex"));

const ABN_AMRO_TAGS: &[(&str, &str)] = &[
    ("/TRTP/", "trtp"),
    ("/IBAN/", "iban"),
    ("/BIC/", "bic"),
    ("/CSID", "csid"),
    ("/NAME/", "name"),
    ("/REMI/", "remi"),
    ("/EREF/", "eref"),
    ("/ORDP//ID/", "ordp"),
    ("/BENM//ID/", "benm"),
];

/// Decode an ABN AMRO description.
///
/// A leading dotted account number (`12.34.56.789`) or `GIRO <number>` is
/// reported as `account`; SWIFT tags follow the usual rules.
pub fn abn_amro_description(description: &str) -> Fields {
    let description = flatten(description);
    let mut values = Fields::new();

    if let Some(caps) = ABN_AMRO_ACCOUNT.captures(&description) {
        values.insert("account", caps[1].replace('.', ""));
    }
    if let Some(caps) = ABN_AMRO_GIRO.captures(&description) {
        values.insert("account", caps[1].to_string());
    }

    values.extend(find_swift_tags(ABN_AMRO_TAGS, &description));
    values
}
