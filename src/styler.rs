//! The styler: registries, terminal detection and escape composition.

use std::collections::HashMap;
use std::env;
use std::fmt;

use once_cell::sync::Lazy;

use crate::color::{attribute_code, color_code, highlight_code, Color, RESET};
use crate::error::StyleError;
use crate::style::{Paint, StyleDef};

/// Environment variable that unconditionally disables all coloring.
///
/// Presence is what matters; the value is ignored.
pub const DISABLE_ENV: &str = "ANSI_COLORS_DISABLED";

/// Both standard streams probed once per process.
///
/// Styling is suppressed when either stream is redirected, so a command in a
/// pipeline never leaks escape codes into its output file.
static STREAMS_ATTENDED: Lazy<bool> =
    Lazy::new(|| console::user_attended() && console::user_attended_stderr());

/// Applies colors, highlights, attributes and named styles to text.
///
/// A styler owns its palette overrides and named styles, so two stylers
/// never observe each other's registrations. Registry writes take
/// `&mut self` and rendering takes `&self`; callers sharing a styler across
/// threads wrap it in their own lock.
///
/// By default output is only styled when both stdout and stderr are
/// terminals (probed once per process) and [`DISABLE_ENV`] is not set.
/// Disable [`tty_aware`](Styler::tty_aware) to style unconditionally.
///
/// # Example
///
/// ```rust
/// use termtint::{Paint, StyleDef, Styler};
///
/// let mut styler = Styler::new().tty_aware(false);
/// styler.set_style("warning", StyleDef::new().color(208).attr("bold"));
///
/// let plain = styler.colored("reindexing", &Paint::new().color("cyan"))?;
/// let warn = styler.colored("disk almost full", &Paint::new().style("warning"))?;
/// # Ok::<(), termtint::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Styler {
    palette: HashMap<String, Color>,
    styles: HashMap<String, StyleDef>,
    tty_aware: bool,
    readline_always_safe: bool,
    streams_attended: bool,
}

impl Styler {
    /// Creates a styler with empty registries and the cached terminal probe.
    pub fn new() -> Self {
        Self {
            palette: HashMap::new(),
            styles: HashMap::new(),
            tty_aware: true,
            readline_always_safe: false,
            streams_attended: *STREAMS_ATTENDED,
        }
    }

    /// Controls whether styling is gated on the terminal probe.
    ///
    /// Defaults to `true`. With `false`, escape codes are emitted even when
    /// output is redirected (the environment kill switch still applies).
    pub fn tty_aware(mut self, yes: bool) -> Self {
        self.tty_aware = yes;
        self
    }

    /// Treats every call as readline-safe, as if each [`Paint`] had
    /// [`readline_safe`](Paint::readline_safe) set.
    pub fn readline_always_safe(mut self, yes: bool) -> Self {
        self.readline_always_safe = yes;
        self
    }

    /// Overrides the cached terminal probe.
    ///
    /// For tests and embedders that manage their own detection.
    pub fn assume_tty(mut self, attended: bool) -> Self {
        self.streams_attended = attended;
        self
    }

    /// Sets (overrides) a color.
    ///
    /// Subsequent renders of `name` in foreground position use `value`
    /// instead: a 256-color index renders directly, a base color name
    /// resolves through the color table. The value is not validated here;
    /// anything unresolvable fails the render that uses it.
    ///
    /// ```rust
    /// use termtint::{Paint, Styler};
    ///
    /// let mut styler = Styler::new().tty_aware(false);
    /// styler.set_color("red", 197);
    /// let purple = styler.colored("red is now purple", &Paint::new().color("red"))?;
    /// # Ok::<(), termtint::StyleError>(())
    /// ```
    pub fn set_color(&mut self, name: impl Into<String>, value: impl Into<Color>) {
        self.palette.insert(name.into(), value.into());
    }

    /// Defines (or redefines) a named style.
    ///
    /// A leading `@` on the name is stripped, so `"@warning"` and
    /// `"warning"` register the same style. The definition is stored as-is;
    /// bad names inside it only surface when the style is rendered.
    pub fn set_style(&mut self, name: impl Into<String>, def: StyleDef) {
        let name = name.into();
        let name = name.strip_prefix('@').unwrap_or(&name).to_string();
        self.styles.insert(name, def);
    }

    /// Registers a batch of styles, typically deserialized from application
    /// config. Later entries overwrite earlier ones with the same name.
    pub fn add_styles<I, S>(&mut self, styles: I)
    where
        I: IntoIterator<Item = (S, StyleDef)>,
        S: Into<String>,
    {
        for (name, def) in styles {
            self.set_style(name, def);
        }
    }

    /// Renders `text` with the given paint request.
    ///
    /// Returns the text unchanged when coloring is disabled (environment
    /// kill switch, or TTY-aware mode without an attended terminal) and when
    /// the request has no effective fields. Otherwise the text is wrapped
    /// innermost-out in foreground, highlight and attribute escapes, with a
    /// single trailing reset.
    ///
    /// # Errors
    ///
    /// Any unresolvable color, highlight, attribute or style name fails the
    /// call with the matching [`StyleError`] variant.
    pub fn colored(&self, text: impl fmt::Display, paint: &Paint) -> Result<String, StyleError> {
        let text = text.to_string();
        if env::var_os(DISABLE_ENV).is_some() || (self.tty_aware && !self.streams_attended) {
            return Ok(text);
        }

        let readline_safe = paint.readline_safe || self.readline_always_safe;

        // A "@name" color is a style reference and wins over an explicit style.
        let (mut color, style_name) = match paint.color.clone() {
            Some(Color::Style(name)) => (None, Some(name)),
            other => (other, paint.style.clone()),
        };
        let mut on_color = paint.on_color.clone();
        let mut attrs = paint.attrs.clone();

        if let Some(name) = style_name {
            let key = name.strip_prefix('@').unwrap_or(&name);
            let def = self.styles.get(key).ok_or_else(|| StyleError::UnknownStyle {
                name: key.to_string(),
            })?;
            if color.is_none() {
                color = def.color.clone();
            }
            if on_color.is_none() {
                on_color = def.on_color.clone();
            }
            if attrs.is_none() {
                attrs = def.attrs.clone();
            }
        }

        let mut out = text;
        let mut wrapped = false;

        if let Some(color) = color {
            // Palette substitution happens once; the override is used as-is.
            let color = match color {
                Color::Named(name) => match self.palette.get(&name) {
                    Some(value) => value.clone(),
                    None => Color::Named(name),
                },
                other => other,
            };
            let esc = match color {
                Color::Named(name) => {
                    let code = color_code(&name).ok_or_else(|| StyleError::UnknownColor {
                        name: name.clone(),
                    })?;
                    format!("\x1b[{}m", code)
                }
                Color::Indexed(index) => format!("\x1b[38;5;{}m", index),
                Color::Style(name) => {
                    return Err(StyleError::UnknownColor {
                        name: format!("@{}", name),
                    })
                }
            };
            out = format!("{}{}", fragment(&esc, readline_safe), out);
            wrapped = true;
        }

        if let Some(on_color) = on_color {
            let esc = match on_color {
                Color::Named(name) => {
                    let code = highlight_code(&name).ok_or_else(|| StyleError::UnknownHighlight {
                        name: name.clone(),
                    })?;
                    format!("\x1b[{}m", code)
                }
                Color::Indexed(index) => format!("\x1b[48;5;{}m", index),
                Color::Style(name) => {
                    return Err(StyleError::UnknownHighlight {
                        name: format!("@{}", name),
                    })
                }
            };
            out = format!("{}{}", fragment(&esc, readline_safe), out);
            wrapped = true;
        }

        if let Some(attrs) = attrs {
            // Escapes concatenate in listed order, so the last-listed
            // attribute sits closest to the text.
            let mut prefix = String::new();
            for name in &attrs {
                if name.is_empty() || name == "normal" {
                    continue;
                }
                let code = attribute_code(name).ok_or_else(|| StyleError::UnknownAttribute {
                    name: name.clone(),
                })?;
                prefix.push_str(&fragment(&format!("\x1b[{}m", code), readline_safe));
                wrapped = true;
            }
            out = format!("{}{}", prefix, out);
        }

        if wrapped {
            out.push_str(&fragment(RESET, readline_safe));
        }
        Ok(out)
    }

    /// Renders and prints to stdout with a trailing newline.
    ///
    /// Rendering itself never performs I/O; this is the one convenience that
    /// does.
    pub fn println(&self, text: impl fmt::Display, paint: &Paint) -> Result<(), StyleError> {
        println!("{}", self.colored(text, paint)?);
        Ok(())
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps one escape sequence with the zero-width markers when requested.
fn fragment(esc: &str, readline_safe: bool) -> String {
    if readline_safe {
        format!("\x01{}\x02", esc)
    } else {
        esc.to_string()
    }
}
