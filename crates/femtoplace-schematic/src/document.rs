//! JSON schematic documents.
//!
//! A document is the unit femtoplace loads and saves: the symbols on one
//! sheet plus its connector wires. The autoplacement engine itself never
//! touches files; the document layer builds the per-symbol obstacle
//! snapshots and owns all I/O errors.

use crate::geometry::Point;
use crate::scene::SceneItem;
use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read or write schematic document")]
    Io(#[from] std::io::Error),
    #[error("schematic document is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// A connector line on the sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WireSegment {
    pub start: Point,
    pub end: Point,
}

/// One sheet of a schematic.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SchematicDocument {
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub wires: Vec<WireSegment>,
}

impl SchematicDocument {
    pub fn load_from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The obstacle snapshot for placing one symbol's fields: every other
    /// symbol at its full extent (body plus labels) and every wire. The
    /// symbol's own body and fields are excluded by construction.
    pub fn scene_for(&self, symbol_index: usize) -> Vec<SceneItem> {
        let mut scene = Vec::with_capacity(self.symbols.len() + self.wires.len());

        for (index, symbol) in self.symbols.iter().enumerate() {
            if index != symbol_index {
                scene.push(SceneItem::Symbol {
                    bounds: symbol.full_bounding_box(),
                });
            }
        }

        for wire in &self.wires {
            scene.push(SceneItem::Wire {
                start: wire.start,
                end: wire.end,
            });
        }

        scene
    }
}
