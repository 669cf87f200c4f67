use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the effective color scheme inside theme layers.
pub const COLOR_SCHEME_PLACEHOLDER: &str = "{colorScheme}";

/// A single style property value.
///
/// Nested maps carry pseudo-state or selector blocks such as `_hover` and are
/// treated as one opaque value when layers are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    String(String),
    Map(StyleMap),
}

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a copy with every occurrence of `placeholder` in string values
    /// replaced by `value`, descending into nested maps.
    pub fn interpolated(&self, placeholder: &str, value: &str) -> StyleValue {
        match self {
            StyleValue::String(string) if string.contains(placeholder) => {
                StyleValue::String(string.replace(placeholder, value))
            }
            StyleValue::Map(map) => StyleValue::Map(map.interpolated(placeholder, value)),
            other => other.clone(),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(value) => write!(f, "{value}"),
            StyleValue::Number(value) => write!(f, "{value}"),
            StyleValue::String(value) => f.write_str(value),
            StyleValue::Map(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::String(value.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f64)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Map(value)
    }
}

/// An insertion-ordered mapping of style property to value.
///
/// Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Sets a property only when it is not present yet.
    pub fn insert_if_absent(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties
            .entry(property.into())
            .or_insert_with(|| value.into());
    }

    /// Builder form of [`StyleMap::insert`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.properties.shift_remove(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.properties.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    /// Overlays `other` on top of `self`.
    ///
    /// This is a shallow merge: every top-level property of `other` replaces
    /// the value in `self` wholesale, nested maps included.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Consuming form of [`StyleMap::merge`].
    pub fn merged(mut self, other: &StyleMap) -> Self {
        self.merge(other);
        self
    }

    /// Shallow merge of `other` with color-scheme interpolation applied to
    /// the incoming values. Without a scheme this is a plain merge.
    pub fn merge_interpolated(&mut self, other: &StyleMap, color_scheme: Option<&str>) {
        match color_scheme {
            Some(scheme) => {
                for (property, value) in other.iter() {
                    self.properties.insert(
                        property.clone(),
                        value.interpolated(COLOR_SCHEME_PLACEHOLDER, scheme),
                    );
                }
            }
            None => self.merge(other),
        }
    }

    pub fn interpolated(&self, placeholder: &str, value: &str) -> StyleMap {
        self.iter()
            .map(|(property, style)| (property.clone(), style.interpolated(placeholder, value)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Builds a [`StyleMap`] from `property => value` pairs.
///
/// ```
/// use mosaic_theme::style;
///
/// let hover = style! { "bg" => "gray.100" };
/// let base = style! { "px" => "1rem", "_hover" => hover };
/// assert_eq!(base.len(), 2);
/// ```
#[macro_export]
macro_rules! style {
    () => {
        $crate::StyleMap::new()
    };
    ( $( $property:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::StyleMap::new();
        $( map.insert($property, $value); )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_later_layer_wins() {
        let mut base = style! { "a" => 1, "b" => 2 };
        base.merge(&style! { "b" => 3, "c" => 4 });

        assert_eq!(base, style! { "a" => 1, "b" => 3, "c" => 4 });
    }

    #[test]
    fn test_merge_replaces_nested_maps_wholesale() {
        let base = style! { "x" => style! { "p" => 1, "q" => 2 } };
        let merged = base.merged(&style! { "x" => style! { "p" => 9 } });

        assert_eq!(merged.get("x"), Some(&StyleValue::Map(style! { "p" => 9 })));
    }

    #[test]
    fn test_merge_keeps_first_insertion_position() {
        let mut base = style! { "a" => 1, "b" => 2 };
        base.merge(&style! { "a" => 5 });

        let keys: Vec<_> = base.keys().cloned().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(style! { "a" => 1, "b" => 2 }, style! { "b" => 2, "a" => 1 });
    }

    #[test]
    fn test_insert_if_absent() {
        let mut map = style! { "padding" => "2px" };
        map.insert_if_absent("padding", "0");
        map.insert_if_absent("margin", "0");

        assert_eq!(map, style! { "padding" => "2px", "margin" => "0" });
    }

    #[test]
    fn test_interpolation_descends_into_nested_maps() {
        let layer = style! {
            "bg" => "{colorScheme}.500",
            "_hover" => style! { "bg" => "{colorScheme}.600" },
            "opacity" => 0.4,
        };

        let mut resolved = StyleMap::new();
        resolved.merge_interpolated(&layer, Some("teal"));

        assert_eq!(
            resolved,
            style! {
                "bg" => "teal.500",
                "_hover" => style! { "bg" => "teal.600" },
                "opacity" => 0.4,
            }
        );
    }

    #[test]
    fn test_interpolation_without_scheme_is_plain_merge() {
        let layer = style! { "bg" => "{colorScheme}.500" };
        let mut resolved = StyleMap::new();
        resolved.merge_interpolated(&layer, None);

        assert_eq!(resolved, layer);
    }

    #[test]
    fn test_deserialize_untagged_values() {
        let map: StyleMap =
            serde_json::from_str(r#"{"lineHeight": 1.2, "bg": "red", "_disabled": {"opacity": 0.4}, "isTruncated": true}"#)
                .unwrap();

        assert_eq!(map.get("lineHeight"), Some(&StyleValue::Number(1.2)));
        assert_eq!(map.get("bg").and_then(StyleValue::as_str), Some("red"));
        assert_eq!(map.get("isTruncated"), Some(&StyleValue::Bool(true)));
        assert!(map.get("_disabled").and_then(StyleValue::as_map).is_some());
    }

    #[test]
    fn test_display_nested_value() {
        let value = StyleValue::Map(style! { "p" => 9, "q" => "x" });
        assert_eq!(value.to_string(), "{p: 9; q: x}");
    }
}
