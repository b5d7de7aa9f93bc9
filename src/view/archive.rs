//! Year-grouped archive listing

use serde::Serialize;

use crate::content::ContentRecord;

/// One archive row, optionally preceded by a year header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveEntry<'a> {
    /// Set on the first record of a year that differs from the previous record's year
    pub divider: Option<i32>,
    pub record: &'a ContentRecord,
}

/// Pair each record with the year header that should precede it.
///
/// Expects records sorted newest first. Each record is compared only with the
/// one before it, so the first record never gets a divider. Undated records
/// have no year to announce and never open a divider.
pub fn group_by_year_with_dividers<'a, I>(records: I) -> Vec<ArchiveEntry<'a>>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let mut entries = Vec::new();
    let mut previous: Option<Option<i32>> = None;

    for record in records {
        let year = record.year();
        let divider = match previous {
            Some(prev_year) if prev_year != year => year,
            _ => None,
        };
        entries.push(ArchiveEntry { divider, record });
        previous = Some(year);
    }

    entries
}
