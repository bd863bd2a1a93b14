//! Style definitions and per-call paint requests.
//!
//! [`StyleDef`] is what gets registered under a name on a [`Styler`]: an
//! optional color, highlight and attribute list. [`Paint`] is the transient
//! per-call request; it carries the same fields plus a style reference and
//! the readline-safe flag. Both are fluent builders:
//!
//! ```rust
//! use termtint::{Paint, StyleDef};
//!
//! let warning = StyleDef::new().color(208).attr("bold");
//! let request = Paint::new().style("warning").readline_safe(true);
//! ```
//!
//! [`Styler`]: crate::Styler

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A named style's stored definition.
///
/// Fields left unset do not participate when the style is applied: a direct
/// argument always wins, and an unset field of the winning side stays unset.
/// Contents are not validated at registration; a bad color or attribute name
/// only surfaces when the style is rendered.
///
/// Definitions deserialize from config-shaped data, where a color is a bare
/// string or integer and `attrs` is a single name or a list:
///
/// ```rust
/// use termtint::StyleDef;
///
/// let def: StyleDef = serde_json::from_str(
///     r#"{ "color": 208, "attrs": "bold" }"#,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) on_color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "attrs_one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) attrs: Option<Vec<String>>,
}

impl StyleDef {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the background highlight.
    pub fn on_color(mut self, color: impl Into<Color>) -> Self {
        self.on_color = Some(color.into());
        self
    }

    /// Appends a single attribute.
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Replaces the attribute list.
    pub fn attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attrs = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// A per-call styling request.
///
/// All fields are optional; a [`Paint`] with nothing set renders the text
/// unchanged. A `color` given as `"@name"` redirects to the named style and
/// takes precedence over an explicit [`style`](Paint::style).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paint {
    pub(crate) color: Option<Color>,
    pub(crate) on_color: Option<Color>,
    pub(crate) attrs: Option<Vec<String>>,
    pub(crate) style: Option<String>,
    pub(crate) readline_safe: bool,
}

impl Paint {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color: a base name, a 256-color index, or a
    /// `"@name"` style reference.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the background highlight: an `on_*` name or a 256-color index.
    pub fn on_color(mut self, color: impl Into<Color>) -> Self {
        self.on_color = Some(color.into());
        self
    }

    /// Appends a single attribute.
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Replaces the attribute list.
    pub fn attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attrs = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Applies a registered style by name. A leading `@` is accepted and
    /// stripped at render time.
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    /// Brackets every escape sequence with the 0x01/0x02 zero-width markers
    /// so line-editing libraries keep their cursor math right.
    pub fn readline_safe(mut self, yes: bool) -> Self {
        self.readline_safe = yes;
        self
    }
}

/// Accepts either `"bold"` or `["bold", "underline"]` for an attrs field.
fn attrs_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_def_builder() {
        let def = StyleDef::new().color("red").on_color(237).attr("bold");
        assert_eq!(def.color, Some(Color::Named("red".to_string())));
        assert_eq!(def.on_color, Some(Color::Indexed(237)));
        assert_eq!(def.attrs, Some(vec!["bold".to_string()]));
    }

    #[test]
    fn test_style_def_attrs_replaces() {
        let def = StyleDef::new().attr("bold").attrs(["underline", "blink"]);
        assert_eq!(
            def.attrs,
            Some(vec!["underline".to_string(), "blink".to_string()])
        );
    }

    #[test]
    fn test_paint_defaults_are_unset() {
        let paint = Paint::new();
        assert_eq!(paint.color, None);
        assert_eq!(paint.on_color, None);
        assert_eq!(paint.attrs, None);
        assert_eq!(paint.style, None);
        assert!(!paint.readline_safe);
    }

    #[test]
    fn test_paint_attr_accumulates() {
        let paint = Paint::new().attr("bold").attr("underline");
        assert_eq!(
            paint.attrs,
            Some(vec!["bold".to_string(), "underline".to_string()])
        );
    }

    #[test]
    fn test_paint_color_detects_style_reference() {
        let paint = Paint::new().color("@warn");
        assert_eq!(paint.color, Some(Color::Style("warn".to_string())));
    }

    #[test]
    fn test_style_def_deserialize_single_attr() {
        let def: StyleDef = serde_json::from_str(r#"{ "color": 208, "attrs": "bold" }"#).unwrap();
        assert_eq!(def.color, Some(Color::Indexed(208)));
        assert_eq!(def.attrs, Some(vec!["bold".to_string()]));
    }

    #[test]
    fn test_style_def_deserialize_attr_list() {
        let def: StyleDef =
            serde_json::from_str(r#"{ "color": "red", "attrs": ["bold", "underline"] }"#).unwrap();
        assert_eq!(def.color, Some(Color::Named("red".to_string())));
        assert_eq!(
            def.attrs,
            Some(vec!["bold".to_string(), "underline".to_string()])
        );
    }

    #[test]
    fn test_style_def_deserialize_missing_fields() {
        let def: StyleDef = serde_json::from_str("{}").unwrap();
        assert_eq!(def, StyleDef::new());
    }

    #[test]
    fn test_style_def_serialize_skips_unset() {
        let json = serde_json::to_string(&StyleDef::new().color("red")).unwrap();
        assert_eq!(json, r#"{"color":"red"}"#);
    }
}
