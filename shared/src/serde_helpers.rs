//! Common serde helpers for lenient client payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats explicit `null` as `T::default()`
///
/// Legacy clients send `"notes": null` / `"status": null` for lines that
/// never had them set.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_default")]
        notes: String,
        #[serde(default = "default_true", deserialize_with = "bool_true")]
        flag: bool,
    }

    #[test]
    fn test_null_and_missing() {
        let p: Probe = serde_json::from_str(r#"{"notes": null, "flag": null}"#).unwrap();
        assert_eq!(p.notes, "");
        assert!(p.flag);

        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.notes, "");
        assert!(p.flag);

        let p: Probe = serde_json::from_str(r#"{"notes": "no onion", "flag": false}"#).unwrap();
        assert_eq!(p.notes, "no onion");
        assert!(!p.flag);
    }
}
