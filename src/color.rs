//! Color values and the fixed SGR code tables.
//!
//! A [`Color`] is either a named base color, a 256-color palette index, or a
//! reference to a registered style (`"@name"`). Conversions from strings and
//! integers pick the right variant, so call sites can pass `"red"`, `208` or
//! `"@warning"` interchangeably:
//!
//! ```rust
//! use termtint::Color;
//!
//! assert_eq!(Color::from("red"), Color::Named("red".into()));
//! assert_eq!(Color::from(208), Color::Indexed(208));
//! assert_eq!(Color::from("@warning"), Color::Style("warning".into()));
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// The sequence that returns the terminal to its default rendition.
pub const RESET: &str = "\x1b[0m";

/// A foreground or background color request.
///
/// Named colors resolve through the fixed eight-entry tables (and, for
/// foregrounds, through any palette override registered on the styler).
/// Indexed colors address the 256-color palette directly. A style reference
/// is only meaningful in foreground position, where it redirects the whole
/// call to a registered style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// One of the eight base color names (`grey`, `red`, ... `white`),
    /// or `on_grey` etc. when used as a highlight.
    Named(String),
    /// An 8-bit palette index, rendered as `ESC[38;5;<n>m` / `ESC[48;5;<n>m`.
    Indexed(u8),
    /// A reference to a registered style, written `"@name"` in string form.
    Style(String),
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        match s.strip_prefix('@') {
            Some(style) => Color::Style(style.to_string()),
            None => Color::Named(s.to_string()),
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::Indexed(index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Indexed(index) => write!(f, "{}", index),
            Color::Style(name) => write!(f, "@{}", name),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Color::Named(name) => serializer.serialize_str(name),
            Color::Indexed(index) => serializer.serialize_u8(*index),
            Color::Style(name) => serializer.serialize_str(&format!("@{}", name)),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Index(u8),
            Name(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Index(index) => Color::Indexed(index),
            Raw::Name(name) => Color::from(name),
        })
    }
}

/// Looks up the SGR code for a base foreground color name.
pub fn color_code(name: &str) -> Option<u8> {
    let code = match name {
        "grey" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        _ => return None,
    };
    Some(code)
}

/// Looks up the SGR code for a base highlight (background) name.
pub fn highlight_code(name: &str) -> Option<u8> {
    let code = match name {
        "on_grey" => 40,
        "on_red" => 41,
        "on_green" => 42,
        "on_yellow" => 43,
        "on_blue" => 44,
        "on_magenta" => 45,
        "on_cyan" => 46,
        "on_white" => 47,
        _ => return None,
    };
    Some(code)
}

/// Looks up the SGR code for a text attribute name.
///
/// `""` and `"normal"` are not in the table; callers treat them as no-ops
/// before reaching this lookup.
pub fn attribute_code(name: &str) -> Option<u8> {
    let code = match name {
        "bold" => 1,
        "dark" => 2,
        "underline" => 4,
        "blink" => 5,
        "reverse" => 7,
        "concealed" => 8,
        _ => return None,
    };
    Some(code)
}
