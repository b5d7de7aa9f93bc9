//! View-model builder
//!
//! Derives what a listing shows from an immutable record set and an explicit,
//! caller-owned [`ViewState`]. Every function here is pure and total: a record
//! without tags simply contributes nothing and matches no filter.

mod archive;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::content::{ContentRecord, Section};

pub use archive::{group_by_year_with_dividers, ArchiveEntry};

/// Count how many records carry each tag.
///
/// Keys are kept in first-seen order, which [`sorted_tags_by_frequency`]
/// relies on for its tie-break.
pub fn tag_frequency<'a, I>(records: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        for tag in &record.tech {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Distinct tags, most frequent first; equal counts keep first-seen order
pub fn sorted_tags_by_frequency<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    sort_by_count(&tag_frequency(records))
        .into_iter()
        .map(|(tag, _)| tag)
        .collect()
}

// slice::sort_by is stable, so insertion order survives for equal counts
fn sort_by_count(counts: &IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut tags: Vec<(String, usize)> = counts.iter().map(|(t, c)| (t.clone(), *c)).collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    tags
}

/// Keep records tagged with any of `selected`; no selection keeps everything
pub fn filter_by_tags<'a, I>(records: I, selected: &IndexSet<String>) -> Vec<&'a ContentRecord>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    if selected.is_empty() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| record.has_any_tag(selected))
        .collect()
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub has_more: bool,
}

/// Truncate to `limit` unless expanded
pub fn paginate<T>(items: &[T], limit: usize, expanded: bool) -> Page<'_, T> {
    let has_more = !expanded && items.len() > limit;
    let items = if has_more { &items[..limit] } else { items };
    Page { items, has_more }
}

/// UI state of a listing: the tag toggles and the "show more" flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_tags: IndexSet<String>,
    pub expanded: bool,
}

impl ViewState {
    pub fn new<I, S>(tags: I, expanded: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_tags: tags.into_iter().map(Into::into).collect(),
            expanded,
        }
    }

    /// Select a tag, or deselect it if it was already selected
    pub fn toggle(&mut self, tag: &str) {
        if !self.selected_tags.shift_remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    /// The state after toggling `tag`, leaving `self` untouched
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle(tag);
        next
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }
}

/// A tag with its record count, as shown in the filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// The listed records of one section with their tag statistics.
///
/// Tag statistics depend only on the record set, so they are computed once
/// here and reused for every [`ViewState`].
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    records: Vec<&'a ContentRecord>,
    tag_frequency: IndexMap<String, usize>,
    sorted_tags: Vec<TagCount>,
}

impl<'a> Listing<'a> {
    /// Build a listing over the records that opted into it
    pub fn new(records: &'a [ContentRecord]) -> Self {
        Self::from_records(records.iter().filter(|r| r.show_in_listing).collect())
    }

    /// Listing for a section; the opt-out flag only gates the projects grid
    pub fn for_section(records: &'a [ContentRecord], section: Section) -> Self {
        match section {
            Section::Projects => Self::new(records),
            Section::Certificates => Self::from_records(records.iter().collect()),
        }
    }

    fn from_records(records: Vec<&'a ContentRecord>) -> Self {
        let tag_frequency = tag_frequency(records.iter().copied());
        let sorted_tags = sort_by_count(&tag_frequency)
            .into_iter()
            .map(|(name, count)| TagCount { name, count })
            .collect();
        Self {
            records,
            tag_frequency,
            sorted_tags,
        }
    }

    pub fn records(&self) -> &[&'a ContentRecord] {
        &self.records
    }

    pub fn tag_frequency(&self) -> &IndexMap<String, usize> {
        &self.tag_frequency
    }

    pub fn sorted_tags(&self) -> &[TagCount] {
        &self.sorted_tags
    }

    /// Recompute the view for a UI state
    pub fn view(&self, state: &ViewState, display_limit: usize) -> ViewModel<'a> {
        let visible = filter_by_tags(self.records.iter().copied(), &state.selected_tags);
        let page = paginate(&visible, display_limit, state.expanded);
        let shown = page.items.to_vec();
        let has_more = page.has_more;

        ViewModel {
            tag_frequency: self.tag_frequency.clone(),
            sorted_tags: self.sorted_tags.clone(),
            selected_tags: state.selected_tags.iter().cloned().collect(),
            display_limit,
            expanded: state.expanded,
            visible_count: visible.len(),
            has_more,
            shown,
        }
    }
}

/// Render-ready projection of a listing for one UI state
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel<'a> {
    pub tag_frequency: IndexMap<String, usize>,
    pub sorted_tags: Vec<TagCount>,
    pub selected_tags: Vec<String>,
    pub display_limit: usize,
    pub expanded: bool,
    /// Records passing the tag filter, before pagination
    pub visible_count: usize,
    pub has_more: bool,
    pub shown: Vec<&'a ContentRecord>,
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::content::{ContentRecord, Section};
    use chrono::NaiveDate;

    pub fn record(title: &str, tech: &[&str]) -> ContentRecord {
        let mut record = ContentRecord::new(title, Section::Projects);
        record.tech = tech.iter().map(|t| t.to_string()).collect();
        record
    }

    pub fn record_in_year(title: &str, year: i32) -> ContentRecord {
        let mut record = ContentRecord::new(title, Section::Certificates);
        record.date = NaiveDate::from_ymd_opt(year, 6, 1);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    fn sample() -> Vec<ContentRecord> {
        vec![
            record("zero", &["Go", "Rust"]),
            record("one", &["Go"]),
            record("two", &["TS"]),
        ]
    }

    fn titles(records: &[&ContentRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_tag_frequency_counts_every_occurrence() {
        let freq = tag_frequency(&sample());
        assert_eq!(freq.get("Go"), Some(&2));
        assert_eq!(freq.get("Rust"), Some(&1));
        assert_eq!(freq.get("TS"), Some(&1));
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn test_tag_frequency_is_order_invariant() {
        let records = sample();
        let reversed: Vec<ContentRecord> = records.iter().rev().cloned().collect();

        let mut a: Vec<_> = tag_frequency(&records).into_iter().collect();
        let mut b: Vec<_> = tag_frequency(&reversed).into_iter().collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_without_tags_contribute_nothing() {
        let records = vec![record("bare", &[]), record("tagged", &["C"])];
        let freq = tag_frequency(&records);
        assert_eq!(freq.len(), 1);
        assert_eq!(sorted_tags_by_frequency(&records), vec!["C"]);
    }

    #[test]
    fn test_sorted_tags_break_ties_by_first_seen() {
        assert_eq!(sorted_tags_by_frequency(&sample()), vec!["Go", "Rust", "TS"]);

        // Same multiset, different order: TS is now seen before Rust
        let permuted = vec![
            record("two", &["TS"]),
            record("one", &["Go"]),
            record("zero", &["Go", "Rust"]),
        ];
        assert_eq!(sorted_tags_by_frequency(&permuted), vec!["Go", "TS", "Rust"]);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let records = vec![record("a", &["rust"]), record("b", &["Rust", "Rust"])];
        let freq = tag_frequency(&records);
        assert_eq!(freq.get("rust"), Some(&1));
        assert_eq!(freq.get("Rust"), Some(&2));
        assert_eq!(sorted_tags_by_frequency(&records), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_filter_with_no_selection_is_identity() {
        let records = sample();
        let filtered = filter_by_tags(&records, &IndexSet::new());
        assert_eq!(titles(&filtered), vec!["zero", "one", "two"]);
    }

    #[test]
    fn test_filter_matches_any_selected_tag_in_order() {
        let records = sample();

        let go: IndexSet<String> = ["Go".to_string()].into_iter().collect();
        assert_eq!(titles(&filter_by_tags(&records, &go)), vec!["zero", "one"]);

        let ts_or_rust: IndexSet<String> =
            ["TS".to_string(), "Rust".to_string()].into_iter().collect();
        assert_eq!(
            titles(&filter_by_tags(&records, &ts_or_rust)),
            vec!["zero", "two"]
        );

        let unknown: IndexSet<String> = ["Haskell".to_string()].into_iter().collect();
        assert!(filter_by_tags(&records, &unknown).is_empty());
    }

    #[test]
    fn test_paginate() {
        let items = [1, 2, 3, 4, 5, 6, 7];

        let page = paginate(&items, 6, false);
        assert_eq!(page.items, &[1, 2, 3, 4, 5, 6]);
        assert!(page.has_more);

        let page = paginate(&items, 6, true);
        assert_eq!(page.items, &items);
        assert!(!page.has_more);

        let short = [1, 2];
        let page = paginate(&short, 6, false);
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_more);

        let exact = [1, 2, 3];
        assert!(!paginate(&exact, 3, false).has_more);
        assert!(paginate(&items, 0, false).items.is_empty());
    }

    #[test]
    fn test_view_state_toggle() {
        let mut state = ViewState::default();
        state.toggle("Go");
        state.toggle("Rust");
        assert!(state.is_selected("Go"));
        state.toggle("Go");
        assert!(!state.is_selected("Go"));
        assert_eq!(state.selected_tags.len(), 1);

        let next = state.toggled("TS");
        assert!(next.is_selected("TS"));
        assert!(!state.is_selected("TS"));
    }

    #[test]
    fn test_listing_skips_unlisted_records() {
        let mut records = sample();
        records[2].show_in_listing = false;

        let listing = Listing::new(&records);
        assert_eq!(listing.records().len(), 2);
        assert_eq!(listing.tag_frequency().get("TS"), None);
        assert_eq!(
            listing.sorted_tags(),
            &[
                TagCount { name: "Go".into(), count: 2 },
                TagCount { name: "Rust".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_certificate_listing_keeps_opted_out_records() {
        let mut records = sample();
        records[0].show_in_listing = false;

        assert_eq!(Listing::for_section(&records, Section::Projects).records().len(), 2);
        let certificates = Listing::for_section(&records, Section::Certificates);
        assert_eq!(certificates.records().len(), 3);
        assert_eq!(certificates.tag_frequency().get("Rust"), Some(&1));
    }

    #[test]
    fn test_listing_view_end_to_end() {
        let records = sample();
        let listing = Listing::new(&records);

        let all = listing.view(&ViewState::default(), 2);
        assert_eq!(all.visible_count, 3);
        assert_eq!(titles(&all.shown), vec!["zero", "one"]);
        assert!(all.has_more);

        let expanded = listing.view(&ViewState::new(Vec::<String>::new(), true), 2);
        assert_eq!(expanded.shown.len(), 3);
        assert!(!expanded.has_more);

        let go = listing.view(&ViewState::new(["Go"], false), 2);
        assert_eq!(titles(&go.shown), vec!["zero", "one"]);
        assert!(!go.has_more);
        assert_eq!(go.selected_tags, vec!["Go"]);
        assert_eq!(go.sorted_tags[0].name, "Go");
    }
}
