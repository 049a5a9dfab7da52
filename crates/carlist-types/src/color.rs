//! Body color of a catalog vehicle

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Named body colors. Compared by value only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
    Gray,
    DarkGray,
    Yellow,
    Blue,
    White,
    Orange,
    Green,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Red,
        Color::Black,
        Color::Gray,
        Color::DarkGray,
        Color::Yellow,
        Color::Blue,
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Cyan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::DarkGray => "dark_gray",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::White => "white",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if normalized.is_empty() {
            return Err(Error::invalid_argument("Color is required"));
        }
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.label().replace('_', "") == normalized)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown color: {}", s)))
    }
}
