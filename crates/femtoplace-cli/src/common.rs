use anyhow::{Context, Result};
use clap::ValueEnum;
use femtoplace_autoplace::{place_fields, AutoplaceConfig, PlacementMode};
use femtoplace_schematic::SchematicDocument;
use std::path::PathBuf;

/// Extension femtoplace documents are stored under.
pub const DOCUMENT_EXTENSION: &str = "fpl.json";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Fast placement without scanning the rest of the sheet
    Automatic,
    /// Collision-avoiding placement against the rest of the document
    Manual,
}

/// Resolve the documents to process: the given paths, or every document in
/// the current directory when none are given.
pub fn collect_documents(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths);
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(".").context("failed to list the current directory")? {
        let path = entry?.path();
        if path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(DOCUMENT_EXTENSION))
        {
            found.push(path);
        }
    }
    found.sort();

    anyhow::ensure!(
        !found.is_empty(),
        "no .{DOCUMENT_EXTENSION} documents found in the current directory"
    );
    Ok(found)
}

/// Run the engine over every netlisted symbol in the document.
pub fn place_document(doc: &mut SchematicDocument, mode: ModeArg, config: &AutoplaceConfig) {
    for index in 0..doc.symbols.len() {
        match mode {
            ModeArg::Automatic => {
                place_fields(&mut doc.symbols[index], PlacementMode::Automatic, config);
            }
            ModeArg::Manual => {
                let scene = doc.scene_for(index);
                place_fields(
                    &mut doc.symbols[index],
                    PlacementMode::Manual(&scene),
                    config,
                );
            }
        }

        let symbol = &mut doc.symbols[index];
        if symbol.in_netlist {
            symbol.fields_autoplaced = true;
        }
    }
}
