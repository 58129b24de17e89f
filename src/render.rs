//! Text rendering of the board
//!
//! Produces an 8x8 grid of single-character piece symbols, rank 8 at the top
//! and rank 1 at the bottom, optionally framed by file letters and rank
//! numbers. Intended for terminal and log output.
//!
//! [`RenderSettings`] is serde-(de)serializable so callers can keep it in a
//! JSON file next to their other settings. Missing fields take defaults.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::constants::{BOARD_SIZE, EMPTY_CELL, FILE_CHARS};
use crate::piece::Piece;
use crate::types::{Coordinate, Rank};

/// Symbol set used for pieces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphStyle {
    /// Chess glyphs U+2654..U+265F
    #[default]
    Unicode,
    /// `KQRBNP`, uppercase for White and lowercase for Black
    Letters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub glyphs: GlyphStyle,
    /// Frame the grid with file letters and rank numbers
    pub show_labels: bool,
    /// Symbol for an empty square
    pub empty: char,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            glyphs: GlyphStyle::Unicode,
            show_labels: true,
            empty: EMPTY_CELL,
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file
    ///
    /// A missing, unreadable or malformed file yields the default settings.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("[SETTINGS] No render settings at {:?}. Using defaults.", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded render settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse render settings at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read render settings at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    fn symbol(&self, occupant: Option<&Piece>) -> char {
        match (occupant, self.glyphs) {
            (None, _) => self.empty,
            (Some(piece), GlyphStyle::Unicode) => piece.glyph(),
            (Some(piece), GlyphStyle::Letters) => piece.letter(),
        }
    }
}

impl Board {
    /// Render with default settings: Unicode glyphs, labelled borders
    pub fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    pub fn render_with(&self, settings: &RenderSettings) -> String {
        let file_labels = FILE_CHARS
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = Vec::with_capacity(BOARD_SIZE as usize + 2);
        if settings.show_labels {
            lines.push(format!("  {file_labels}"));
        }

        for rank_index in (0..BOARD_SIZE).rev() {
            let Some(rank) = Rank::from_index(rank_index) else {
                continue;
            };
            let cells = (0..BOARD_SIZE)
                .filter_map(|file| Coordinate::from_indices(file, rank.index()))
                .map(|square| settings.symbol(self.occupant(square)).to_string())
                .collect::<Vec<_>>()
                .join(" ");

            if settings.show_labels {
                let number = rank.to_number();
                lines.push(format!("{number} {cells} {number}"));
            } else {
                lines.push(cells);
            }
        }

        if settings.show_labels {
            lines.push(format!("  {file_labels}"));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
