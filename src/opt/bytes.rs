use serde_json::Value;

use super::OptValue;
use crate::error::Error;

// Every unit is base 2; "KB" is accepted as a synonym for "KiB".
const PARSE_UNITS: [(&str, u64); 13] = [
    ("KiB", 1 << 10),
    ("MiB", 1 << 20),
    ("GiB", 1 << 30),
    ("TiB", 1 << 40),
    ("PiB", 1 << 50),
    ("EiB", 1 << 60),
    ("KB", 1 << 10),
    ("MB", 1 << 20),
    ("GB", 1 << 30),
    ("TB", 1 << 40),
    ("PB", 1 << 50),
    ("EB", 1 << 60),
    ("B", 1),
];

const RENDER_UNITS: [(&str, u64); 7] = [
    ("EiB", 1 << 60),
    ("PiB", 1 << 50),
    ("TiB", 1 << 40),
    ("GiB", 1 << 30),
    ("MiB", 1 << 20),
    ("KiB", 1 << 10),
    ("B", 1),
];

/// An optional byte count written with base-2 units.
///
/// The text form is one or more `<digits><unit>` groups, e.g. `"10GiB"`,
/// `"512B"`, `"1GiB512MiB"`. Units are case-sensitive; `KB`, `MB`, ... mean the
/// same as `KiB`, `MiB`, .... Rendering uses the `*iB` units from largest to
/// smallest, or `"0B"` for zero. The JSON form is that same string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptBytes(Option<u64>);

impl OptBytes {
    pub fn new(bytes: u64) -> Self {
        OptBytes(Some(bytes))
    }
}

impl From<u64> for OptBytes {
    fn from(bytes: u64) -> Self {
        OptBytes::new(bytes)
    }
}

fn parse_bytes(text: &str) -> Option<u64> {
    let mut rest = text;
    let mut total: u64 = 0;
    while !rest.is_empty() {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let amount: u64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let (unit, size) = PARSE_UNITS
            .iter()
            .find(|(unit, _)| rest.starts_with(*unit))
            .copied()?;
        rest = &rest[unit.len()..];
        total = total.checked_add(amount.checked_mul(size)?)?;
    }
    Some(total)
}

fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }
    let mut out = String::new();
    let mut rest = bytes;
    for (unit, size) in RENDER_UNITS {
        let count = rest / size;
        rest %= size;
        if count > 0 {
            out.push_str(&format!("{count}{unit}"));
        }
    }
    out
}

impl OptValue for OptBytes {
    type Value = u64;

    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn get(&self) -> Option<u64> {
        self.0
    }

    fn to_text(&self) -> String {
        self.0.map(format_bytes).unwrap_or_default()
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(OptBytes::default());
        }
        parse_bytes(text).map(OptBytes::new).ok_or(Error::BytesFormat)
    }

    fn to_json(&self) -> Value {
        self.0.map_or(Value::Null, |b| Value::String(format_bytes(b)))
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(OptBytes::default()),
            Value::String(s) => OptBytes::parse_text(s),
            _ => Err(Error::BytesFormat),
        }
    }
}

opt_value_impls!(OptBytes);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opt::test_support::assert_round_trips;
    use serde_json::json;

    const GIB: u64 = 1 << 30;
    const MIB: u64 = 1 << 20;

    #[test]
    fn parses_units() {
        assert_eq!(OptBytes::parse_text("10GiB").unwrap(), OptBytes::new(10 * GIB));
        assert_eq!(OptBytes::parse_text("3MiB").unwrap(), OptBytes::new(3 * MIB));
        assert_eq!(OptBytes::parse_text("3MB").unwrap(), OptBytes::new(3 * MIB));
        assert_eq!(OptBytes::parse_text("512B").unwrap(), OptBytes::new(512));
        assert_eq!(
            OptBytes::parse_text("1GiB512MiB").unwrap(),
            OptBytes::new(GIB + 512 * MIB)
        );
    }

    #[test]
    fn renders_largest_units_first() {
        assert_eq!(OptBytes::new(10 * GIB).to_text(), "10GiB");
        assert_eq!(OptBytes::new(1536).to_text(), "1KiB512B");
        assert_eq!(OptBytes::new(0).to_text(), "0B");
    }

    #[test]
    fn defined_values_round_trip() {
        assert_round_trips(OptBytes::new(10 * GIB));
        assert_round_trips(OptBytes::new(3 * MIB + 7));
        assert_round_trips(OptBytes::new(0));
        assert_round_trips(OptBytes::new(u64::MAX));
    }

    #[test]
    fn bad_text() {
        for text in ["7gb", "10", "GiB", "1.5GiB", "1 GiB", "99999999999EiB"] {
            assert_eq!(OptBytes::parse_text(text), Err(Error::BytesFormat), "{text}");
        }
    }

    #[test]
    fn bad_json() {
        assert_eq!(OptBytes::new(MIB).to_json(), json!("1MiB"));
        for value in [json!(1024), json!(true), json!("7gb"), json!([])] {
            assert_eq!(OptBytes::from_json(&value), Err(Error::BytesFormat), "{value}");
        }
    }
}
