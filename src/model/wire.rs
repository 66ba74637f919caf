//! Serde helpers for Pocket's text-encoded fields.
//!
//! The v3 API sends every article field as a JSON string, including numbers
//! and flags (`"time_added": "1471869712"`, `"favorite": "0"`). Decoding here
//! accepts either a string or a bare number; encoding always writes the
//! string form so snapshot files keep the shape the API uses.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serializer};

/// A field that is either `"123"` or `123` on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Decode an integer sent as text. An empty string decodes as zero.
pub fn deserialize_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = TextOrNumber::deserialize(deserializer)?.into_text();
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse::<T>()
        .map_err(|e| de::Error::custom(format!("invalid integer {text:?}: {e}")))
}

/// Encode an integer as text.
pub fn serialize_int<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

/// Decode a `"0"` / `"1"` flag.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a 0/1 flag as text, number or boolean")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim() {
                "" | "0" => Ok(false),
                "1" => Ok(true),
                other => Err(E::custom(format!("invalid flag {other:?}"))),
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Encode a flag as `"0"` / `"1"`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "1" } else { "0" })
}
