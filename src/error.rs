//! Styling errors.

/// Error returned when a referenced name is absent from its registry.
///
/// Lookups are strict: an unrecognized color, highlight, attribute or style
/// name fails the whole call, producing no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A color name is not a base color and has no palette override.
    UnknownColor { name: String },
    /// A highlight name is not one of the `on_*` base names.
    UnknownHighlight { name: String },
    /// An attribute name is not in the attribute table.
    UnknownAttribute { name: String },
    /// A style name was never registered.
    UnknownStyle { name: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownColor { name } => {
                write!(f, "unknown color name: '{}'", name)
            }
            StyleError::UnknownHighlight { name } => {
                write!(f, "unknown highlight name: '{}'", name)
            }
            StyleError::UnknownAttribute { name } => {
                write!(f, "unknown attribute name: '{}'", name)
            }
            StyleError::UnknownStyle { name } => {
                write!(f, "unknown style name: '{}'", name)
            }
        }
    }
}

impl std::error::Error for StyleError {}
