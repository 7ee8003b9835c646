//! Free-text search helpers for `?search=` on list endpoints.
//!
//! The search value is split into terms; every term must match at least
//! one of the endpoint's search fields (case-insensitive substring or
//! prefix match, depending on the field).

use serde::Deserialize;

/// Common list parameters: `?search=&ordering=&page=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<i64>,
}

/// How a search field is compared against each term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// `ILIKE '%term%'`
    Contains,
    /// `ILIKE 'term%'`
    StartsWith,
}

/// A searchable SQL expression and its match mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchField {
    pub column: &'static str,
    pub mode: MatchMode,
}

impl SearchField {
    pub const fn contains(column: &'static str) -> Self {
        Self {
            column,
            mode: MatchMode::Contains,
        }
    }

    pub const fn starts_with(column: &'static str) -> Self {
        Self {
            column,
            mode: MatchMode::StartsWith,
        }
    }

    /// `ILIKE` pattern for `term` under this field's match mode.
    pub fn pattern(&self, term: &str) -> String {
        let escaped = escape_like(term);
        match self.mode {
            MatchMode::Contains => format!("%{escaped}%"),
            MatchMode::StartsWith => format!("{escaped}%"),
        }
    }
}

/// Split a raw search value into terms on whitespace and commas.
///
/// # Examples
///
/// ```
/// use storefront_core::search::search_terms;
/// assert_eq!(search_terms("red  shoe,leather"), vec!["red", "shoe", "leather"]);
/// assert!(search_terms(" , ").is_empty());
/// ```
pub fn search_terms(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Escape `LIKE` metacharacters so terms match literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_whitespace() {
        assert_eq!(search_terms("a,b c\td"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn patterns_follow_match_mode() {
        assert_eq!(SearchField::contains("p.title").pattern("red"), "%red%");
        assert_eq!(SearchField::starts_with("c.first_name").pattern("jo"), "jo%");
        assert_eq!(SearchField::contains("p.title").pattern("10%"), "%10\\%%");
    }
}
