use crate::common::{collect_documents, place_document, ModeArg};
use anyhow::{Context, Result};
use clap::Args;
use femtoplace_autoplace::{AutoplaceConfig, DEFAULT_GRID_UNIT};
use femtoplace_schematic::SchematicDocument;
use log::info;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
#[command(about = "Autoplace symbol fields in schematic documents")]
pub struct PlaceArgs {
    /// Schematic documents to place.
    /// When omitted, all .fpl.json files in the current directory are processed.
    #[arg(value_name = "PATHS", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Placement mode
    #[arg(long, value_enum, default_value_t = ModeArg::Manual)]
    pub mode: ModeArg,

    /// Keep each field's existing justification
    #[arg(long)]
    pub no_rejustify: bool,

    /// Snap final field anchors to the grid
    #[arg(long)]
    pub align_to_grid: bool,

    /// Grid spacing in schematic units
    #[arg(long, default_value_t = DEFAULT_GRID_UNIT)]
    pub grid: i32,

    /// Write the placed document here instead of back to its source path.
    /// Only valid with a single input document.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: PlaceArgs) -> Result<()> {
    let paths = collect_documents(args.paths)?;
    anyhow::ensure!(
        args.output.is_none() || paths.len() == 1,
        "--output requires exactly one input document"
    );
    anyhow::ensure!(args.grid > 0, "--grid must be positive");

    let config = AutoplaceConfig {
        allow_rejustify: !args.no_rejustify,
        align_to_grid: args.align_to_grid,
        grid_unit: args.grid,
    };

    for path in &paths {
        let mut doc = SchematicDocument::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        place_document(&mut doc, args.mode, &config);

        let target = args.output.as_ref().unwrap_or(path);
        doc.save_to_file(target)
            .with_context(|| format!("failed to write {}", target.display()))?;
        info!("placed {} symbols in {}", doc.symbols.len(), target.display());
        println!("{}: {} symbols placed", target.display(), doc.symbols.len());
    }

    Ok(())
}
