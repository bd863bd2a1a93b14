//! ANSI text styling with palette overrides, named styles and automatic
//! terminal detection.
//!
//! A [`Styler`] turns a text string and a [`Paint`] request into a string
//! wrapped in ANSI escape sequences. When output is not an interactive
//! terminal, or the `ANSI_COLORS_DISABLED` environment variable is present,
//! the text comes back unchanged, so callers can style unconditionally and
//! still pipe cleanly.
//!
//! Available colors: `grey`, `red`, `green`, `yellow`, `blue`, `magenta`,
//! `cyan`, `white`, plus any 256-color palette index. Highlights are the
//! same set prefixed `on_`. Attributes: `bold`, `dark`, `underline`,
//! `blink`, `reverse`, `concealed` (and the no-op `normal`).
//!
//! # Example
//!
//! ```rust
//! use termtint::{Paint, StyleDef, Styler};
//!
//! let mut styler = Styler::new();
//!
//! // Direct colors and attributes.
//! let hello = styler.colored(
//!     "Hello, World!",
//!     &Paint::new().color("red").on_color("on_grey").attr("bold"),
//! )?;
//!
//! // 256-color indices work anywhere a name does.
//! let accent = styler.colored("light green", &Paint::new().color(119))?;
//!
//! // Named styles, also reachable through a "@name" color.
//! styler.set_style("warning", StyleDef::new().color(208).attr("bold"));
//! let warn = styler.colored("disk almost full", &Paint::new().style("warning"))?;
//! let same = styler.colored("disk almost full", &Paint::new().color("@warning"))?;
//!
//! // Palette overrides re-bind a base name process-locally.
//! styler.set_color("red", 197);
//! # Ok::<(), termtint::StyleError>(())
//! ```
//!
//! Styles defined in application config deserialize straight into
//! [`StyleDef`] maps and register in bulk via [`Styler::add_styles`].

mod color;
mod error;
mod style;
mod styler;

pub use color::{attribute_code, color_code, highlight_code, Color, RESET};
pub use error::StyleError;
pub use style::{Paint, StyleDef};
pub use styler::{Styler, DISABLE_ENV};
