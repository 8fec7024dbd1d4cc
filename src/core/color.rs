// RGBA colours as used by the canvas and by `data-color` attributes.
//
// Colours are kept as integer channels plus a float alpha so that the
// animation can swap the alpha per frame and hand the canvas a CSS string.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    #[error("expected `rgba(r, g, b, a)` or `rgb(r, g, b)`, got {0:?}")]
    Syntax(String),
    #[error("channel {index} is not a value in 0..=255: {value:?}")]
    Channel { index: usize, value: String },
    #[error("alpha is not a number in 0..=1: {0:?}")]
    Alpha(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(level: u8, a: f32) -> Self {
        Self::new(level, level, level, a)
    }

    /// Same channels, different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorError::Syntax(s.to_string()))?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorError::Syntax(s.to_string()));
        }

        let mut rgb = [0u8; 3];
        for (index, raw) in parts.iter().take(3).enumerate() {
            rgb[index] = raw.parse::<u8>().map_err(|_| ColorError::Channel {
                index,
                value: raw.to_string(),
            })?;
        }

        let a = match parts.get(3) {
            Some(raw) => {
                let a = raw
                    .parse::<f32>()
                    .map_err(|_| ColorError::Alpha(raw.to_string()))?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(ColorError::Alpha(raw.to_string()));
                }
                a
            }
            None => 1.0,
        };

        Ok(Self::new(rgb[0], rgb[1], rgb[2], a))
    }
}

/// Colour from an optional attribute value; a missing value keeps `fallback`.
pub fn override_rgba(raw: Option<&str>, fallback: Rgba) -> Result<Rgba, ColorError> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(fallback),
    }
}

/// Base and hover colour of one anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPair {
    pub base: Rgba,
    pub hover: Rgba,
}

impl ColorPair {
    #[inline]
    pub fn pick(&self, hovered: bool) -> Rgba {
        if hovered {
            self.hover
        } else {
            self.base
        }
    }
}

// Default anchor palette, keyed by section name
pub const SECTION_PALETTE: [(&str, ColorPair); 4] = [
    (
        "professional",
        ColorPair {
            base: Rgba::new(59, 130, 246, 0.4),
            hover: Rgba::new(59, 130, 246, 0.7),
        },
    ),
    (
        "education",
        ColorPair {
            base: Rgba::new(16, 185, 129, 0.4),
            hover: Rgba::new(16, 185, 129, 0.7),
        },
    ),
    (
        "contact",
        ColorPair {
            base: Rgba::new(245, 158, 11, 0.4),
            hover: Rgba::new(245, 158, 11, 0.7),
        },
    ),
    (
        "about",
        ColorPair {
            base: Rgba::new(239, 68, 68, 0.4),
            hover: Rgba::new(239, 68, 68, 0.7),
        },
    ),
];

pub fn palette_for(section: &str) -> Option<ColorPair> {
    SECTION_PALETTE
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, pair)| *pair)
}
