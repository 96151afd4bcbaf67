use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A `#rrggbb` hex color, kept in its source spelling.
///
/// The stored string is emitted verbatim into the output document, so
/// deserialization validates but never normalizes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a hex color string (#RRGGBB format).
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(format!("Color must start with #, got: {}", s));
        };
        if hex.len() != 6 {
            return Err(format!(
                "Invalid hex color length: expected 6 digits, got {}",
                hex.len()
            ));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex digit in color: {}", s));
        }
        Ok(Color(s.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color("#000000".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_digit_hex() {
        let color: Color = serde_json::from_str("\"#1a2B3c\"").unwrap();
        assert_eq!(color.as_str(), "#1a2B3c");
    }

    #[test]
    fn keeps_source_spelling() {
        let color: Color = serde_json::from_str("\"#FF0000\"").unwrap();
        assert_eq!(color.to_string(), "#FF0000");
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(serde_json::from_str::<Color>("\"ff0000\"").is_err());
    }

    #[test]
    fn rejects_short_form() {
        assert!(serde_json::from_str::<Color>("\"#fff\"").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(serde_json::from_str::<Color>("\"#gg0000\"").is_err());
    }
}
