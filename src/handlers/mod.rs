pub mod login;
pub mod orders;
pub mod profiles;
pub mod reviews;
pub mod trims;

use uuid::Uuid;

use crate::error::ApiError;

pub async fn root() -> &'static str {
    "Z&Z Accessories server is running"
}

/// Identifiers are opaque strings on the wire; anything that is not a
/// well-formed id is rejected before touching the store.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request(format!("invalid id: {raw}")))
}

/// parseInt-style coercion: accepts a number or a numeric string.
pub(crate) fn coerce_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct IntOrString;

    impl serde::de::Visitor<'_> for IntOrString {
        type Value = i32;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<i32, E> {
            Ok(v.trunc() as i32)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i32, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(IntOrString)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "coerce_int")]
        value: i32,
    }

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        let w: Wrapper = serde_json::from_value(serde_json::json!({ "value": 7 })).unwrap();
        assert_eq!(w.value, 7);

        let w: Wrapper = serde_json::from_value(serde_json::json!({ "value": "12" })).unwrap();
        assert_eq!(w.value, 12);

        let w: Wrapper = serde_json::from_value(serde_json::json!({ "value": 3.9 })).unwrap();
        assert_eq!(w.value, 3);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_value::<Wrapper>(serde_json::json!({ "value": "lots" })).is_err());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(parse_id("not-a-uuid").is_err());
        assert!(parse_id("caa8d3a9-69b6-4d24-b664-d3b8d9e9a129").is_ok());
    }
}
