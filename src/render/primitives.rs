use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, u8::MAX)
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor {
            input: input.to_owned(),
        };
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits
                .chars()
                .map(|c| {
                    c.to_digit(16)
                        .map(|nibble| (nibble * 17) as u8)
                        .ok_or_else(invalid)
                })
                .collect::<ChartResult<_>>()?,
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|start| {
                    u8::from_str_radix(&digits[start..start + 2], 16).map_err(|_| invalid())
                })
                .collect::<ChartResult<_>>()?,
            _ => return Err(invalid()),
        };

        let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
        Ok(Self::rgba8(channels[0], channels[1], channels[2], alpha))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue, alpha] =
            [self.red, self.green, self.blue, self.alpha].map(channel_to_u8);
        if alpha == u8::MAX {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            format!("#{red:02x}{green:02x}{blue:02x}{alpha:02x}")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::from_hex(input)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(input: String) -> ChartResult<Self> {
        Self::from_hex(&input)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Draw command for one axis-aligned rectangle in pixel space.
///
/// A rectangle may be filled, stroked or both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Option<Color>,
    pub stroke: Option<RectStroke>,
}

/// Outline drawn along the rectangle edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStroke {
    pub color: Color,
    pub line_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: Some(fill_color),
            stroke: None,
        }
    }

    #[must_use]
    pub const fn stroked(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        line_width: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: None,
            stroke: Some(RectStroke { color, line_width }),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if self.fill_color.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "rect must be filled or stroked".to_owned(),
            ));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            if !stroke.line_width.is_finite() || stroke.line_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "rect stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.color.validate()?;
        }
        Ok(())
    }
}
