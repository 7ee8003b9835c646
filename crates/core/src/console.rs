//! Operator console helpers: user-visible notices, change-list links,
//! date-window filters and inline line-item bounds.

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Path prefix of the console's change-list endpoints.
pub const CONSOLE_PREFIX: &str = "/api/v1/admin";

/// Minimum line items on an order created through the console.
pub const MIN_ORDER_ITEMS: usize = 1;

/// Maximum line items on an order created through the console.
pub const MAX_ORDER_ITEMS: usize = 10;

/// Severity attached to a console notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Notice shown to the operator after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// Severity of the clear-inventory notice. Kept at `Error` to match the
/// existing console even though the action succeeded.
pub const CLEAR_INVENTORY_LEVEL: MessageLevel = MessageLevel::Error;

/// Notice reported after the clear-inventory bulk action.
pub fn clear_inventory_message(updated: u64) -> ConsoleMessage {
    ConsoleMessage {
        level: CLEAR_INVENTORY_LEVEL,
        text: format!("{updated} products were successfully updated."),
    }
}

/// Link to a change list pre-filtered on `param = id`.
///
/// # Examples
///
/// ```
/// use storefront_core::console::changelist_link;
/// assert_eq!(
///     changelist_link("products", "collection_id", 4),
///     "/api/v1/admin/products?collection_id=4"
/// );
/// ```
pub fn changelist_link(list: &str, param: &str, id: DbId) -> String {
    format!("{CONSOLE_PREFIX}/{list}?{param}={id}")
}

/// `?last_update=` windows offered by the console's product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    Today,
    #[serde(rename = "past_7_days")]
    Past7Days,
    ThisMonth,
    ThisYear,
}

impl DateWindow {
    /// Half-open `[start, end)` range for this window relative to `now`.
    pub fn bounds(self, now: Timestamp) -> (Timestamp, Timestamp) {
        let today = now.date_naive();
        let (start, end) = match self {
            Self::Today => (today, today + Duration::days(1)),
            Self::Past7Days => (today - Duration::days(7), today + Duration::days(1)),
            Self::ThisMonth => {
                let first = first_of_month(today.year(), today.month());
                let next = if today.month() == 12 {
                    first_of_month(today.year() + 1, 1)
                } else {
                    first_of_month(today.year(), today.month() + 1)
                };
                (first, next)
            }
            Self::ThisYear => (
                first_of_month(today.year(), 1),
                first_of_month(today.year() + 1, 1),
            ),
        };
        (midnight(start), midnight(end))
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn midnight(date: NaiveDate) -> Timestamp {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Check that an inline line-item list stays within the console bounds.
pub fn validate_order_item_count(count: usize) -> Result<(), CoreError> {
    if count < MIN_ORDER_ITEMS {
        return Err(CoreError::Validation(format!(
            "An order needs at least {MIN_ORDER_ITEMS} item"
        )));
    }
    if count > MAX_ORDER_ITEMS {
        return Err(CoreError::Validation(format!(
            "An order can have at most {MAX_ORDER_ITEMS} items"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn clear_inventory_notice_keeps_error_level() {
        let msg = clear_inventory_message(3);
        assert_eq!(msg.level, MessageLevel::Error);
        assert_eq!(msg.text, "3 products were successfully updated.");
    }

    #[test]
    fn message_level_serializes_lowercase() {
        let json = serde_json::to_value(clear_inventory_message(0)).unwrap();
        assert_eq!(json["level"], "error");
    }

    #[test]
    fn today_spans_one_day() {
        let (start, end) = DateWindow::Today.bounds(at(2026, 3, 15, 14));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn past_seven_days_includes_today() {
        let (start, end) = DateWindow::Past7Days.bounds(at(2026, 3, 15, 14));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 8, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn this_month_rolls_over_december() {
        let (start, end) = DateWindow::ThisMonth.bounds(at(2026, 12, 31, 23));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn this_year_spans_calendar_year() {
        let (start, end) = DateWindow::ThisYear.bounds(at(2026, 7, 4, 9));
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn date_window_parses_snake_case() {
        let w: DateWindow = serde_json::from_value(serde_json::json!("past_7_days")).unwrap();
        assert_eq!(w, DateWindow::Past7Days);
    }

    #[test]
    fn order_item_bounds() {
        assert_matches!(validate_order_item_count(0), Err(CoreError::Validation(_)));
        assert!(validate_order_item_count(1).is_ok());
        assert!(validate_order_item_count(10).is_ok());
        assert_matches!(validate_order_item_count(11), Err(CoreError::Validation(_)));
    }
}
