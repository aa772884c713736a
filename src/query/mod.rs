//! Client-side list queries: filter, search, paginate and count.
//!
//! Every operation is a pure function over an in-memory collection. Results
//! borrow from the input and keep its relative order; nothing is cached
//! between calls.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::record::FieldAccess;

pub mod state;

/// Sentinel filter value meaning "no constraint on this field".
pub const ALL: &str = "All";

/// Accepted value for one filtered field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    All,
    Exact(String),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        match s {
            ALL => FilterValue::All,
            _ => FilterValue::Exact(s.to_string()),
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        if s == ALL {
            FilterValue::All
        } else {
            FilterValue::Exact(s)
        }
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL.to_string(),
            FilterValue::Exact(s) => s,
        }
    }
}

/// Search text, field filters and page position for a single list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub filters: BTreeMap<String, FilterValue>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    /// Creates a query for the first page with no search or filters.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            page_size,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Filters that actually constrain the result.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().filter_map(|(field, value)| match value {
            FilterValue::All => None,
            FilterValue::Exact(v) => Some((field.as_str(), v.as_str())),
        })
    }
}

/// One page of a query together with the size of the matching set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    /// Records matching search and filters before pagination.
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T: Clone> QueryResult<&T> {
    /// Detaches the page from the source collection.
    pub fn cloned(self) -> QueryResult<T> {
        QueryResult {
            items: self.items.into_iter().cloned().collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// A contiguous slice of a collection.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

fn matches_search<R: FieldAccess>(record: &R, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| {
        record
            .field_text(field)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

fn matches_filters<R: FieldAccess>(record: &R, filters: &BTreeMap<String, FilterValue>) -> bool {
    filters
        .iter()
        .all(|(field, value)| value.accepts(record.field_text(field).as_deref()))
}

/// Keeps records where at least one searchable field contains `search_text`,
/// ignoring case. An empty search text keeps everything.
pub fn search<'a, R: FieldAccess>(
    collection: &'a [R],
    search_text: &str,
    searchable_fields: &[&str],
) -> Vec<&'a R> {
    if search_text.is_empty() {
        return collection.iter().collect();
    }
    let needle = search_text.to_lowercase();
    collection
        .iter()
        .filter(|record| matches_search(*record, &needle, searchable_fields))
        .collect()
}

/// Keeps records whose fields equal every non-`All` filter value exactly.
pub fn filter<'a, R: FieldAccess>(
    collection: &'a [R],
    filters: &BTreeMap<String, FilterValue>,
) -> Vec<&'a R> {
    collection
        .iter()
        .filter(|record| matches_filters(*record, filters))
        .collect()
}

/// Returns the 1-based `page` of `collection`.
///
/// Pages past the end are empty.
///
/// # Panics
///
/// Panics if `page` or `page_size` is zero.
pub fn paginate<T>(collection: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    assert!(page >= 1, "page is 1-based");
    assert!(page_size >= 1, "page_size must be positive");

    let total_pages = collection.len().div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(collection.len());
    let end = start.saturating_add(page_size).min(collection.len());

    Page {
        items: &collection[start..end],
        total_pages,
    }
}

/// Every record matching the query's filters and search text, unpaginated.
pub fn matching<'a, R: FieldAccess>(
    collection: &'a [R],
    query: &ListQuery,
    searchable_fields: &[&str],
) -> Vec<&'a R> {
    let narrowed = filter(collection, &query.filters);
    search(&narrowed, &query.search_text, searchable_fields)
        .into_iter()
        .copied()
        .collect()
}

/// Filters, then searches, then paginates.
///
/// # Panics
///
/// Panics if `query.page` or `query.page_size` is zero.
pub fn run<'a, R: FieldAccess>(
    collection: &'a [R],
    query: &ListQuery,
    searchable_fields: &[&str],
) -> QueryResult<&'a R> {
    let matched = matching(collection, query, searchable_fields);
    let page = paginate(&matched, query.page, query.page_size);

    QueryResult {
        items: page.items.to_vec(),
        total_count: matched.len(),
        total_pages: page.total_pages,
    }
}

/// Number of records per distinct value of `field_name`.
///
/// Records where the field is absent or `null` are not counted.
pub fn count_by_field<R: FieldAccess>(collection: &[R], field_name: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in collection {
        if let Some(value) = record.field_text(field_name) {
            *counts.entry(value.into_owned()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use serde_json::json;

    const MEMBER_FIELDS: &[&str] = &["name", "id", "phone"];

    fn member(id: &str, name: &str, phone: &str, status: &str) -> Record {
        Record::new()
            .with("id", id)
            .with("name", name)
            .with("phone", phone)
            .with("status", status)
    }

    fn members() -> Vec<Record> {
        vec![
            member("M1", "Rahul", "9001", "Active"),
            member("M2", "Vikram", "9002", "Expired"),
            member("M3", "Rahim", "9003", "Active"),
        ]
    }

    /// Collections of assorted sizes with a mix of statuses, plans and gaps.
    fn sample_collections() -> Vec<Vec<Record>> {
        let statuses = ["Active", "Expired", "Frozen"];
        let plans = ["Gold", "Silver"];
        (0..=23)
            .map(|len| {
                (0..len)
                    .map(|i| {
                        let mut record = Record::new()
                            .with("id", format!("M{i}"))
                            .with("name", format!("Member {}", ["Asha", "Ravi", "Anil"][i % 3]))
                            .with("status", statuses[i % statuses.len()]);
                        if i % 4 != 0 {
                            record = record.with("plan", plans[i % plans.len()]);
                        }
                        if i % 5 == 0 {
                            record = record.with("phone", json!(9000 + i));
                        }
                        record
                    })
                    .collect()
            })
            .collect()
    }

    fn ids<R: FieldAccess>(items: &[&R]) -> Vec<String> {
        items
            .iter()
            .map(|r| r.field_text("id").map(|s| s.into_owned()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn no_op_query_returns_everything_in_order() {
        for collection in sample_collections() {
            let query = ListQuery::new(collection.len().max(1))
                .filter("status", ALL)
                .filter("plan", ALL);

            let result = run(&collection, &query, MEMBER_FIELDS);

            let expected: Vec<&Record> = collection.iter().collect();
            assert_eq!(result.items, expected);
            assert_eq!(result.total_count, collection.len());
        }
    }

    #[test]
    fn filter_keeps_only_exact_matches() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), FilterValue::from("Active"));

        for collection in sample_collections() {
            let filtered = filter(&collection, &filters);

            assert!(filtered.len() <= collection.len());
            assert!(
                filtered
                    .iter()
                    .all(|r| r.field_text("status").as_deref() == Some("Active"))
            );
        }
    }

    #[test]
    fn filter_is_case_sensitive_and_composes_with_and() {
        let collection = vec![
            Record::new().with("id", "1").with("status", "Active").with("plan", "Gold"),
            Record::new().with("id", "2").with("status", "active").with("plan", "Gold"),
            Record::new().with("id", "3").with("status", "Active").with("plan", "Silver"),
        ];
        let query = ListQuery::new(10).filter("status", "Active").filter("plan", "Gold");

        assert_eq!(ids(&filter(&collection, &query.filters)), vec!["1"]);
    }

    #[test]
    fn filter_on_missing_field_matches_nothing() {
        let query = ListQuery::new(10).filter("branch", "Downtown");

        assert!(filter(&members(), &query.filters).is_empty());
    }

    #[test]
    fn search_results_contain_the_term_in_some_field() {
        for collection in sample_collections() {
            for term in ["asha", "RAVI", "m1", "900", "zzz"] {
                let found = search(&collection, term, MEMBER_FIELDS);
                let needle = term.to_lowercase();
                for record in &found {
                    assert!(MEMBER_FIELDS.iter().any(|f| {
                        record
                            .field_text(f)
                            .is_some_and(|t| t.to_lowercase().contains(&needle))
                    }));
                }
            }
        }
    }

    #[test]
    fn search_coerces_numbers_and_skips_nulls() {
        let collection = vec![
            Record::new().with("id", 1).with("phone", 98_765),
            Record::new().with("id", 2).with("phone", serde_json::Value::Null),
        ];

        assert_eq!(search(&collection, "876", &["phone"]).len(), 1);
        assert!(search(&collection, "null", &["phone"]).is_empty());
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let collection = members();

        assert_eq!(search(&collection, "", MEMBER_FIELDS).len(), 3);
    }

    #[test]
    fn pages_reconstruct_the_collection() {
        for collection in sample_collections() {
            for size in 1..=7 {
                let first = paginate(&collection, 1, size);
                let mut rebuilt = Vec::new();
                for page in 1..=first.total_pages {
                    let slice = paginate(&collection, page, size);
                    assert!(slice.items.len() <= size);
                    rebuilt.extend_from_slice(slice.items);
                }
                assert_eq!(rebuilt, collection);
                assert_eq!(first.total_pages, collection.len().div_ceil(size));
            }
        }
    }

    #[test]
    fn paginate_empty_collection() {
        let empty: Vec<Record> = Vec::new();
        let page = paginate(&empty, 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn zero_page_size_is_a_programmer_error() {
        paginate(&members(), 1, 0);
    }

    #[test]
    #[should_panic(expected = "page is 1-based")]
    fn zero_page_is_a_programmer_error() {
        paginate(&members(), 0, 10);
    }

    #[test]
    fn search_and_filter_commute() {
        let fields = MEMBER_FIELDS;
        for collection in sample_collections() {
            for status in ["Active", "Frozen", ALL] {
                for term in ["", "a", "member r", "M1"] {
                    let query = ListQuery::new(4).search(term).filter("status", status);

                    let searched = search(&collection, term, fields);
                    let owned: Vec<Record> = searched.into_iter().cloned().collect();
                    let reversed = ids(&filter(&owned, &query.filters));

                    let composed = matching(&collection, &query, fields);
                    assert_eq!(ids(&composed), reversed);

                    let result = run(&collection, &query, fields);
                    assert_eq!(result.total_count, composed.len());
                    for item in &result.items {
                        assert!(composed.contains(item));
                    }
                }
            }
        }
    }

    #[test]
    fn concrete_member_scenario() {
        let collection = members();
        let query = ListQuery::new(10).search("rah").filter("status", "Active");

        let result = run(&collection, &query, MEMBER_FIELDS);

        assert_eq!(ids(&result.items), vec!["M1", "M3"]);
        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let collection = members();
        let query = ListQuery::new(10)
            .search("rah")
            .filter("status", "Active")
            .paginate(5, 10);

        let result = run(&collection, &query, MEMBER_FIELDS);

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 2);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn counts_ignore_query_state() {
        let collection = members();
        let narrowed = run(
            &collection,
            &ListQuery::new(1).search("vik").paginate(3, 1),
            MEMBER_FIELDS,
        );
        assert!(narrowed.items.is_empty());

        let counts = count_by_field(&collection, "status");

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Active"], 2);
        assert_eq!(counts["Expired"], 1);
    }

    #[test]
    fn filter_value_round_trips_through_serde() {
        let all: FilterValue = serde_json::from_str("\"All\"").expect("valid");
        let exact: FilterValue = serde_json::from_str("\"Gold\"").expect("valid");

        assert!(all.is_all());
        assert_eq!(exact, FilterValue::Exact("Gold".to_string()));
        assert_eq!(serde_json::to_string(&all).expect("serializable"), "\"All\"");
    }

    #[test]
    fn cloned_detaches_from_source() {
        let collection = members();
        let result = run(&collection, &ListQuery::new(2), MEMBER_FIELDS).cloned();
        drop(collection);

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_count, 3);
        assert_eq!(result.total_pages, 2);
    }
}
