//! Rabobank `:86:` convention.

use super::{find_swift_tags, flatten, Fields};

const RABO_TAGS: &[(&str, &str)] = &[
    ("/MARF/", "marf"),
    ("/EREF/", "eref"),
    ("/PREF/", "pref"),
    ("/TRCD/", "trcd"),
    ("/BENM/", "benm"),
    ("/ORDP/", "ordp"),
    ("/NAME/", "name"),
    ("/ID/", "id"),
    ("/ADDR/", "addr"),
    ("/REMI/", "remi"),
    ("/CDTRREFTP//CD/SCOR/ISSR/CUR/CDTRREF/", "cdtrref"),
    ("/CSID/", "csid"),
    ("/ISDT/", "isdt"),
    ("/RTRN/", "rtrn"),
];

/// Decode a Rabobank description.
///
/// ```
/// use mt940_statements::description::rabo_description;
///
/// let fields = rabo_description("/BENM//NAME/Doe");
/// assert_eq!(fields["benm"], "");
/// assert_eq!(fields["name"], "Doe");
/// ```
pub fn rabo_description(description: &str) -> Fields {
    find_swift_tags(RABO_TAGS, &flatten(description))
}
