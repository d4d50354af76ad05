use chrono::TimeDelta;
use serde_json::Value;

use super::OptValue;
use crate::error::Error;

const UNITS: [(&str, i64); 4] = [("h", 3_600_000), ("m", 60_000), ("s", 1_000), ("ms", 1)];

/// An optional signed duration with millisecond precision.
///
/// The text form is one or more `<digits><unit>` groups with units `h`, `m`,
/// `s` and `ms`, optionally preceded by `-`: `"500ms"`, `"30s"`, `"1h30m"`,
/// `"-1s"`. Rendering writes the non-zero groups from largest to smallest
/// (`"1m30s"`, `"3h"`), or `"0s"` for zero. The JSON form is that same string.
///
/// Anything finer than a millisecond is truncated on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptDuration(Option<TimeDelta>);

impl OptDuration {
    pub fn new(value: TimeDelta) -> Self {
        OptDuration(Some(TimeDelta::milliseconds(value.num_milliseconds())))
    }

    /// Saturates at the representable range.
    pub fn from_millis(millis: i64) -> Self {
        OptDuration(Some(TimeDelta::milliseconds(millis.max(-i64::MAX))))
    }

    /// Saturates at the representable range.
    pub fn from_secs(secs: i64) -> Self {
        Self::from_millis(secs.saturating_mul(1_000))
    }
}

impl From<TimeDelta> for OptDuration {
    fn from(value: TimeDelta) -> Self {
        OptDuration::new(value)
    }
}

fn parse_duration(text: &str) -> Option<TimeDelta> {
    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if rest.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    while !rest.is_empty() {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let amount: i64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        // "ms" before "m"
        let (unit, millis) = if rest.starts_with("ms") {
            ("ms", 1)
        } else {
            UNITS
                .iter()
                .find(|(unit, _)| *unit != "ms" && rest.starts_with(*unit))
                .copied()?
        };
        rest = &rest[unit.len()..];
        total = total.checked_add(amount.checked_mul(millis)?)?;
    }

    TimeDelta::try_milliseconds(if negative { -total } else { total })
}

fn format_duration(value: TimeDelta) -> String {
    let millis = value.num_milliseconds();
    if millis == 0 {
        return "0s".to_string();
    }
    let mut out = String::new();
    if millis < 0 {
        out.push('-');
    }
    let mut rest = millis.unsigned_abs();
    for (unit, size) in UNITS {
        let size = size as u64;
        let count = rest / size;
        rest %= size;
        if count > 0 {
            out.push_str(&format!("{count}{unit}"));
        }
    }
    out
}

impl OptValue for OptDuration {
    type Value = TimeDelta;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<TimeDelta> {
        self.0
    }

    fn to_text(&self) -> String {
        self.0.map(format_duration).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptDuration::default());
        }
        parse_duration(text)
            .map(|d| OptDuration(Some(d)))
            .ok_or(Error::DurationFormat)
    }

    fn to_json(&self) -> Value {
        self.0
            .map_or(Value::Null, |d| Value::String(format_duration(d)))
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptDuration::default()),
            Value::String(s) => OptDuration::parse_text(s),
            _ => Err(Error::DurationFormat),
        }
    }
}

opt_value_impls!(OptDuration);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::test_support::assert_round_trips;
    use serde_json::json;

    #[test]
    fn parses_single_units() {
        assert_eq!(OptDuration::parse_text("3ms").unwrap(), OptDuration::from_millis(3));
        assert_eq!(OptDuration::parse_text("3s").unwrap(), OptDuration::from_secs(3));
        assert_eq!(OptDuration::parse_text("3m").unwrap(), OptDuration::from_secs(180));
        assert_eq!(OptDuration::parse_text("3h").unwrap(), OptDuration::from_secs(10_800));
    }

    #[test]
    fn parses_compound_and_negative() {
        assert_eq!(
            OptDuration::parse_text("1h10m30s").unwrap(),
            OptDuration::from_secs(3600 + 600 + 30)
        );
        assert_eq!(
            OptDuration::parse_text("1s500ms").unwrap(),
            OptDuration::from_millis(1500)
        );
        assert_eq!(OptDuration::parse_text("-1s").unwrap(), OptDuration::from_secs(-1));
    }

    #[test]
    fn renders_compactly() {
        assert_eq!(OptDuration::from_secs(180).to_text(), "3m");
        assert_eq!(OptDuration::from_secs(90).to_text(), "1m30s");
        assert_eq!(OptDuration::from_millis(3_723_004).to_text(), "1h2m3s4ms");
        assert_eq!(OptDuration::from_millis(-250).to_text(), "-250ms");
        assert_eq!(OptDuration::from_millis(0).to_text(), "0s");
    }

    #[test]
    fn defined_values_round_trip() {
        assert_round_trips(OptDuration::from_millis(3));
        assert_round_trips(OptDuration::from_secs(3600 + 600 + 30));
        assert_round_trips(OptDuration::from_secs(-1));
        assert_round_trips(OptDuration::from_millis(0));
    }

    #[test]
    fn sub_millisecond_precision_is_truncated() {
        let o = OptDuration::new(TimeDelta::microseconds(1_500));
        assert_eq!(o, OptDuration::from_millis(1));
    }

    #[test]
    fn bad_text() {
        for text in ["1", "x", "1x", ":30", "-", "1s-1s", "1 s", "99999999999999999999h"] {
            assert_eq!(OptDuration::parse_text(text), Err(Error::DurationFormat), "{text}");
        }
    }

    #[test]
    fn json_is_a_string() {
        assert_eq!(OptDuration::from_secs(3).to_json(), json!("3s"));
        assert_eq!(
            OptDuration::from_json(&json!("3s")).unwrap(),
            OptDuration::from_secs(3)
        );
        for value in [json!(true), json!(1), json!("x"), json!([]), json!({})] {
            assert_eq!(OptDuration::from_json(&value), Err(Error::DurationFormat), "{value}");
        }
    }
}
