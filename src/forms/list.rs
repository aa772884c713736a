use std::collections::BTreeMap;

use validator::Validate;

use crate::domain::screen::ScreenSpec;
use crate::forms::FormError;
use crate::query::ListQuery;

const SEARCH_KEYS: [&str; 2] = ["search", "q"];
const PAGE_KEY: &str = "page";
const PER_PAGE_KEY: &str = "per_page";

#[derive(Debug, Default, Validate)]
/// Search, filter and paging parameters of a list request.
pub struct ListQueryForm {
    /// Free-text search entered by the user.
    #[validate(length(max = 200))]
    pub search: Option<String>,
    /// 1-based page number.
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Rows per page overriding the configured default.
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
    /// Every other parameter, as a candidate field filter.
    pub filters: BTreeMap<String, String>,
}

fn parse_number(field: &'static str, value: &str) -> Result<usize, FormError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl ListQueryForm {
    /// Parses a raw query string; a repeated key keeps its last value.
    pub fn from_query_string(query_string: &str) -> Result<Self, FormError> {
        let params = serde_html_form::from_str::<BTreeMap<String, Vec<String>>>(query_string)
            .map_err(|err| FormError::QueryString(err.to_string()))?;

        let mut form = ListQueryForm::default();
        for (key, mut values) in params {
            let Some(value) = values.pop() else {
                continue;
            };
            match key.as_str() {
                k if SEARCH_KEYS.contains(&k) => form.search = Some(value),
                PAGE_KEY => form.page = Some(parse_number(PAGE_KEY, &value)?),
                PER_PAGE_KEY => form.per_page = Some(parse_number(PER_PAGE_KEY, &value)?),
                _ => {
                    form.filters.insert(key, value);
                }
            }
        }
        Ok(form)
    }

    /// Trimmed search text, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Builds the engine query, keeping only filters the screen declares.
    pub fn to_list_query(&self, spec: &ScreenSpec, default_page_size: usize) -> ListQuery {
        let mut query = ListQuery::new(default_page_size).paginate(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(default_page_size),
        );

        if let Some(term) = self.search_term() {
            query = query.search(term);
        }

        for (field, value) in &self.filters {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if !spec.is_filterable(field) {
                log::debug!("Ignoring filter on {field} for screen {}", spec.slug);
                continue;
            }
            query = query.filter(field.as_str(), value);
        }

        query
    }
}
