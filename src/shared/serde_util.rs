//! Custom serde helpers for Heliotrope wire formats.
//!
//! Hitomi's upstream metadata is loosely typed: flags arrive as `1`, `"1"`,
//! `""` or `null` depending on the gallery, ids sometimes arrive as strings,
//! and empty lists are often `null`. These helpers normalize those shapes at
//! the decode boundary.

/// Deserializes a flag that may be a bool, a number, a string or `null`.
///
/// `null`, `false`, `0`, `""` and `"0"` are false. Any other number or
/// string is true.
pub mod lenient_bool {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
            Value::String(s) => Ok(!(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean flag, got {}",
                other
            ))),
        }
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(*value)
    }
}

/// Deserializes an unsigned id that may be sent as a JSON number or a
/// numeric string.
pub mod string_or_int {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid integer: {}", n))),
            Value::String(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid integer: {:?}", s))),
            other => Err(serde::de::Error::custom(format!(
                "expected an integer, got {}",
                other
            ))),
        }
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }
}

/// Deserializes `null` as `T::default()`. Used for list fields.
///
/// Use without `#[serde(default)]`: the key itself stays required.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
