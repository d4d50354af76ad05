use std::collections::HashMap;

/// Split a `NAME=value` entry on the first `=`.
///
/// Returns `None` for an entry with no `=` at all. The value may itself
/// contain `=`.
pub(crate) fn parse_var(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('=')
}

/// Build a name/value map from `NAME=value` entries. Later entries win.
///
/// Takes an iterator so tests can pass synthetic data instead of the process
/// environment.
pub(crate) fn entries_to_values<I, S>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = HashMap::new();
    for entry in entries {
        let entry = entry.as_ref();
        match parse_var(entry) {
            Some((name, value)) => {
                values.insert(name.to_string(), value.to_string());
            }
            None => log::trace!("ignoring malformed variable entry {entry:?}"),
        }
    }
    values
}

/// Snapshot of the process environment. Variables whose name or value is not
/// valid Unicode are left out.
pub(crate) fn environment_values() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
