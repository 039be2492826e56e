//! RGBA8 color value type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An RGBA color with one byte per channel.
///
/// Serializes as a plain 4-element array `[r, g, b, a]`, which is the form
/// used by saved configuration files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Create a color from its four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.0[3]
    }

    /// Channels as an array
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r},{g},{b},{a}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("Expected 3 or 4 comma-separated channels, got {0}")]
    ChannelCount(usize),
    #[error("Invalid channel value: {0:?}")]
    InvalidChannel(String),
}

/// Parses `r,g,b` or `r,g,b,a`; alpha defaults to 255.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ParseColorError::ChannelCount(parts.len()));
        }

        let mut channels = [255u8; 4];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| ParseColorError::InvalidChannel(part.to_string()))?;
        }
        Ok(Self(channels))
    }
}
