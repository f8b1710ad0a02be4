use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors produced while turning schemes and colour tokens into stops or ramps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The scheme has no levels at all.
    EmptyScheme,
    /// The selected level has fewer than two colours, so it cannot be spread over a range.
    TooFewColors { found: usize },
    /// A colour token could not be parsed.
    InvalidColor(String),
    /// No scheme with this name is registered.
    UnknownScheme(String),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::EmptyScheme => write!(f, "color scheme has no levels"),
            PaletteError::TooFewColors { found } => {
                write!(f, "color level needs at least 2 colors (found {})", found)
            }
            PaletteError::InvalidColor(token) => write!(f, "invalid color token '{}'", token),
            PaletteError::UnknownScheme(name) => write!(f, "color scheme '{}' not found", name),
        }
    }
}

impl Error for PaletteError {}
