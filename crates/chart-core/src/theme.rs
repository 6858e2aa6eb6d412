// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, backend-agnostic.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hex color: {0}")]
pub struct ParseColorError(String);

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` (alpha is not emitted).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or without the `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| err());
                Ok(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub dark: bool,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub marker_fill: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            dark: true,
            background: Color::rgb(0x11, 0x18, 0x27),
            grid: Color::rgb(0x1f, 0x29, 0x37),
            axis_line: Color::rgb(0x37, 0x41, 0x51),
            axis_label: Color::rgb(0xd1, 0xd5, 0xdb),
            tick: Color::rgb(0x6b, 0x72, 0x80),
            marker_fill: Color::rgb(0x11, 0x18, 0x27),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            dark: false,
            background: Color::WHITE,
            grid: Color::rgb(0xf3, 0xf4, 0xf6),
            axis_line: Color::rgb(0xe5, 0xe7, 0xeb),
            axis_label: Color::rgb(0x6b, 0x72, 0x80),
            tick: Color::rgb(0x9c, 0xa3, 0xaf),
            marker_fill: Color::WHITE,
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
