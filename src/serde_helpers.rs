//! Serde helpers for JotForm's inconsistent JSON typing.
//!
//! Some endpoints return `responseCode` as a JSON number (`200`) and others
//! as a stringified number (`"200"`). The deserializer here accepts both so
//! the envelope model stays a plain `u16`.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U16OrString {
    U16(u16),
    String(String),
}

pub fn u16_from_string_or_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match U16OrString::deserialize(deserializer)? {
        U16OrString::U16(v) => Ok(v),
        U16OrString::String(s) => s.parse::<u16>().map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::u16_from_string_or_number")]
        code: u16,
    }

    #[test]
    fn test_accepts_number() {
        let p: Probe = serde_json::from_str(r#"{"code":200}"#).unwrap();
        assert_eq!(p.code, 200);
    }

    #[test]
    fn test_accepts_string() {
        let p: Probe = serde_json::from_str(r#"{"code":"404"}"#).unwrap();
        assert_eq!(p.code, 404);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Probe>(r#"{"code":"ok"}"#).is_err());
    }
}
