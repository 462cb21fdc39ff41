//! Time-window normalization.
//!
//! The upstream analytics API understands five canonical windows. User input
//! arrives as labels, day counts, or hour counts; every conversion here is
//! total and degrades to the week default instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Day count used when input cannot be interpreted.
pub const DEFAULT_DAYS: i64 = 7;

/// One of the five canonical analytics windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Period {
    Day,
    Week,
    TwoWeek,
    ThreeWeek,
    Month,
}

impl Default for Period {
    fn default() -> Self {
        Period::Week
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Period {
    /// All periods, in ascending window size.
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::TwoWeek,
        Period::ThreeWeek,
        Period::Month,
    ];

    /// The symbolic label as the upstream API spells it.
    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::TwoWeek => "twoWeek",
            Period::ThreeWeek => "threeWeek",
            Period::Month => "month",
        }
    }

    /// Parse a label, accepting only the exact upstream spellings.
    pub fn from_label(label: &str) -> Option<Period> {
        match label {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "twoWeek" => Some(Period::TwoWeek),
            "threeWeek" => Some(Period::ThreeWeek),
            "month" => Some(Period::Month),
            _ => None,
        }
    }

    /// Map a canonical day count to its period.
    pub fn from_days(days: i64) -> Option<Period> {
        match days {
            1 => Some(Period::Day),
            7 => Some(Period::Week),
            14 => Some(Period::TwoWeek),
            21 => Some(Period::ThreeWeek),
            30 => Some(Period::Month),
            _ => None,
        }
    }

    /// Map a canonical hour count to its period.
    pub fn from_hours(hours: i64) -> Option<Period> {
        match hours {
            24 => Some(Period::Day),
            168 => Some(Period::Week),
            336 => Some(Period::TwoWeek),
            504 => Some(Period::ThreeWeek),
            720 => Some(Period::Month),
            _ => None,
        }
    }

    pub fn as_days(self) -> i64 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::TwoWeek => 14,
            Period::ThreeWeek => 21,
            Period::Month => 30,
        }
    }

    pub fn as_hours(self) -> i64 {
        self.as_days() * 24
    }

    /// Convert an arbitrary JSON value (integer day count or string label)
    /// into a period. Unrecognized input defaults to `Week`.
    pub fn from_value(value: &Value) -> Period {
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(Period::from_days)
                .unwrap_or_default(),
            Value::String(s) => Period::from_label(s).unwrap_or_default(),
            _ => Period::default(),
        }
    }

    /// Extract the period from classified query params.
    ///
    /// An integer `days` key takes precedence over a string `period` key;
    /// with neither present (or neither well-typed) the result is `Week`.
    pub fn from_params(params: &Map<String, Value>) -> Period {
        if let Some(days) = params.get("days").and_then(Value::as_i64) {
            return Period::from_days(days).unwrap_or_default();
        }

        if let Some(label) = params.get("period").and_then(Value::as_str) {
            return Period::from_label(label).unwrap_or_default();
        }

        Period::default()
    }
}

/// Convert an arbitrary JSON value (label or day count) into a day count.
///
/// Labels map through the canonical table; a day count already in the table
/// passes through unchanged; everything else defaults to 7.
pub fn days_from_value(value: &Value) -> i64 {
    match value {
        Value::String(s) => Period::from_label(s)
            .map(Period::as_days)
            .unwrap_or(DEFAULT_DAYS),
        Value::Number(n) => n
            .as_i64()
            .filter(|d| Period::from_days(*d).is_some())
            .unwrap_or(DEFAULT_DAYS),
        _ => DEFAULT_DAYS,
    }
}

/// Render an hour count for display in bot messages.
///
/// Canonical hour counts render as their label; anything under a day renders
/// as hours, the rest as whole days (integer division).
pub fn format_hours(hours: i64) -> String {
    if let Some(period) = Period::from_hours(hours) {
        return period.label().to_string();
    }

    if hours < 24 {
        format!("{} hours", hours)
    } else {
        format!("{} days", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_pairs_round_trip() {
        for (days, label) in [
            (1, "day"),
            (7, "week"),
            (14, "twoWeek"),
            (21, "threeWeek"),
            (30, "month"),
        ] {
            let period = Period::from_days(days).unwrap();
            assert_eq!(period.label(), label);
            assert_eq!(period.as_days(), days);
            assert_eq!(Period::from_label(label).unwrap().as_days(), days);
            assert_eq!(Period::from_hours(days * 24), Some(period));
        }
    }

    #[test]
    fn unmapped_values_default_to_week() {
        assert_eq!(Period::from_value(&json!(99)), Period::Week);
        assert_eq!(Period::from_value(&json!("fortnight")), Period::Week);
        assert_eq!(Period::from_value(&json!(null)), Period::Week);
        assert_eq!(Period::from_value(&json!(2.5)), Period::Week);
    }

    #[test]
    fn days_from_value_defaults_to_seven() {
        assert_eq!(days_from_value(&json!("bogus")), 7);
        assert_eq!(days_from_value(&json!(13)), 7);
        assert_eq!(days_from_value(&json!(14)), 14);
        assert_eq!(days_from_value(&json!("month")), 30);
        assert_eq!(days_from_value(&json!(true)), 7);
    }

    #[test]
    fn days_key_wins_over_period_key() {
        let params: Map<String, Value> = serde_json::from_value(json!({
            "days": 30,
            "period": "day"
        }))
        .unwrap();

        assert_eq!(Period::from_params(&params), Period::Month);
    }

    #[test]
    fn period_key_used_when_days_is_not_an_integer() {
        let params: Map<String, Value> = serde_json::from_value(json!({
            "days": "lots",
            "period": "twoWeek"
        }))
        .unwrap();

        assert_eq!(Period::from_params(&params), Period::TwoWeek);
    }

    #[test]
    fn missing_keys_default_to_week() {
        assert_eq!(Period::from_params(&Map::new()), Period::Week);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format_hours(24), "day");
        assert_eq!(format_hours(168), "week");
        assert_eq!(format_hours(720), "month");
        assert_eq!(format_hours(10), "10 hours");
        assert_eq!(format_hours(72), "3 days");
        assert_eq!(format_hours(100), "4 days");
    }

    #[test]
    fn serde_uses_upstream_spelling() {
        assert_eq!(
            serde_json::to_string(&Period::TwoWeek).unwrap(),
            "\"twoWeek\""
        );
        assert_eq!(
            serde_json::from_str::<Period>("\"threeWeek\"").unwrap(),
            Period::ThreeWeek
        );
    }
}
