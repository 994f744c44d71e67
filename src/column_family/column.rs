//! Qualified column references of the form `family:qualifier`.

use crate::util::Slice;

/// Separator between the family and qualifier of a column reference.
pub const FAMILY_DELIMITER: u8 = b':';

/// Position of the first family delimiter in `column`, if any.
pub fn family_delimiter_index(column: &[u8]) -> Option<usize> {
    column.iter().position(|&b| b == FAMILY_DELIMITER)
}

/// Family portion of a column reference.
///
/// Without a delimiter the whole input is the family name.
pub fn family_of(column: &[u8]) -> &[u8] {
    match family_delimiter_index(column) {
        Some(idx) => &column[..idx],
        None => column,
    }
}

/// Splits a column reference into family and optional qualifier.
///
/// `"info:server"` yields `("info", Some("server"))`, `"info:"` yields
/// `("info", Some(""))` and `"info"` yields `("info", None)`.
pub fn parse_column(column: &Slice) -> (Slice, Option<Slice>) {
    match family_delimiter_index(column.data()) {
        Some(idx) => (
            column.slice(0..idx),
            Some(column.slice(idx + 1..column.size())),
        ),
        None => (column.clone(), None),
    }
}
