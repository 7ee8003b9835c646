//! `?ordering=` parameter parsing.
//!
//! The value is a comma-separated list of field names, each optionally
//! prefixed with `-` for descending order. Fields outside the endpoint's
//! allow-list are dropped silently. Each allowed field maps to a fixed SQL
//! expression so user input never reaches the query text.

/// One allowed ordering field: the public name and the SQL it sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingField {
    pub name: &'static str,
    pub column: &'static str,
}

impl OrderingField {
    pub const fn new(name: &'static str, column: &'static str) -> Self {
        Self { name, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A resolved sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub direction: Direction,
}

/// Parse `raw` against `allowed`. Duplicate fields keep their first
/// occurrence.
pub fn parse_ordering(raw: Option<&str>, allowed: &[OrderingField]) -> Vec<SortKey> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut keys: Vec<SortKey> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, direction) = match part.strip_prefix('-') {
            Some(rest) => (rest, Direction::Desc),
            None => (part, Direction::Asc),
        };
        let Some(field) = allowed.iter().find(|f| f.name == name) else {
            continue;
        };
        if keys.iter().any(|k| k.column == field.column) {
            continue;
        }
        keys.push(SortKey {
            column: field.column,
            direction,
        });
    }
    keys
}

/// Render an `ORDER BY` clause body from `keys`, falling back to `default`
/// when empty and always finishing with `tiebreak` so paging is stable.
pub fn order_by_clause(keys: &[SortKey], default: SortKey, tiebreak: &str) -> String {
    let keys: Vec<SortKey> = if keys.is_empty() {
        vec![default]
    } else {
        keys.to_vec()
    };

    let mut parts: Vec<String> = keys
        .iter()
        .map(|k| format!("{} {}", k.column, k.direction.sql()))
        .collect();
    if !keys.iter().any(|k| k.column == tiebreak) {
        parts.push(format!("{tiebreak} ASC"));
    }
    parts.join(", ")
}

impl SortKey {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }
}
