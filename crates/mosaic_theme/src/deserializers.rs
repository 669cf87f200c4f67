use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{StyleValue, ThemeError};

/// A CSS-like length used by component props such as spacing or thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Percent(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.);

    pub fn px(value: f32) -> Self {
        Length::Px(value)
    }

    pub fn rem(value: f32) -> Self {
        Length::Rem(value)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Length {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ThemeError::InvalidLength(s.to_string());
        let number = |value: &str| match value.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(invalid()),
        };

        if let Some(value) = trimmed.strip_suffix("rem") {
            return number(value).map(Length::Rem);
        }
        if let Some(value) = trimmed.strip_suffix("px") {
            return number(value).map(Length::Px);
        }
        if let Some(value) = trimmed.strip_suffix('%') {
            return number(value).map(Length::Percent);
        }

        // Unitless zero is the only bare number accepted.
        match trimmed.parse::<f32>() {
            Ok(value) if value == 0. => Ok(Length::ZERO),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(value) => write!(f, "{value}px"),
            Length::Rem(value) => write!(f, "{value}rem"),
            Length::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl From<Length> for StyleValue {
    fn from(value: Length) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StringOrFloat::deserialize(deserializer)? {
            StringOrFloat::Float(pixels) if pixels.is_finite() => Ok(Length::Px(pixels)),
            StringOrFloat::Float(pixels) => Err(D::Error::custom(format!(
                "length must be finite, got {pixels}"
            ))),
            StringOrFloat::String(string) => string.parse().map_err(D::Error::custom),
        }
    }
}

/// Parses durations written as `"0.45s"` or `"200ms"`.
pub fn parse_duration(s: &str) -> Result<Duration, ThemeError> {
    let trimmed = s.trim();
    let invalid = || ThemeError::InvalidDuration(s.to_string());

    let (value, scale) = if let Some(value) = trimmed.strip_suffix("ms") {
        (value, 1e6)
    } else if let Some(value) = trimmed.strip_suffix('s') {
        (value, 1e9)
    } else {
        return Err(invalid());
    };

    let value: f64 = value.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0. {
        return Err(invalid());
    }

    Ok(Duration::from_nanos((value * scale).round() as u64))
}

/// Formats a duration in seconds, the inverse of [`parse_duration`].
pub fn format_duration(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
