//! Query-string encoding for list endpoints.
//!
//! Every list call sends `page` and `limit`; filter predicates and the search
//! text are only sent when set.

use serde::Serialize;

/// Default rows per page for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Types that can be encoded as query parameters.
pub trait QueryParams {
    fn query_params(&self) -> Vec<(String, String)>;
}

impl QueryParams for () {
    fn query_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Small builder that skips unset values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Add a free-text value, skipped when blank.
    pub fn text(self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            self
        } else {
            self.set(key, value)
        }
    }

    /// Add an enum by its wire name, skipped when `None`.
    pub fn wire<V: Serialize>(self, key: &str, value: Option<&V>) -> Self {
        self.opt(key, value.and_then(wire_name))
    }

    pub fn flag(self, key: &str, on: bool) -> Self {
        if on {
            self.set(key, "true")
        } else {
            self
        }
    }

    pub fn extend(mut self, other: Vec<(String, String)>) -> Self {
        self.0.extend(other);
        self
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

/// The serialized string form of a unit enum variant.
pub fn wire_name<V: Serialize>(value: &V) -> Option<String> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Filter, page and search text for one list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub filter: F,
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl<F: Default> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> ListQuery<F> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

impl<F: QueryParams> QueryParams for ListQuery<F> {
    fn query_params(&self) -> Vec<(String, String)> {
        Params::new()
            .extend(self.filter.query_params())
            .text("search", &self.search)
            .set("page", self.page)
            .set("limit", self.limit)
            .into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Colour {
        DeepBlue,
    }

    #[test]
    fn test_params_skip_unset() {
        let params = Params::new()
            .opt::<u32>("a", None)
            .text("b", "   ")
            .flag("c", false)
            .wire::<Colour>("d", None)
            .into_vec();
        assert!(params.is_empty());
    }

    #[test]
    fn test_wire_name_uses_serde_rename() {
        assert_eq!(wire_name(&Colour::DeepBlue), Some("deep_blue".to_string()));
        let params = Params::new().wire("colour", Some(&Colour::DeepBlue)).into_vec();
        assert_eq!(params, vec![("colour".to_string(), "deep_blue".to_string())]);
    }

    #[test]
    fn test_list_query_always_sends_page_and_limit() {
        let query = ListQuery::new(()).with_page(3).with_search("  laptop ");
        assert_eq!(
            query.query_params(),
            vec![
                ("search".to_string(), "laptop".to_string()),
                ("page".to_string(), "3".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_never_below_one() {
        assert_eq!(ListQuery::new(()).with_page(0).page, 1);
    }
}
