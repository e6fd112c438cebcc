use crate::common::{collect_documents, place_document, ModeArg};
use anyhow::{Context, Result};
use clap::Args;
use femtoplace_autoplace::AutoplaceConfig;
use femtoplace_schematic::SchematicDocument;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
#[command(about = "Report which symbols would move, without writing anything")]
pub struct CheckArgs {
    /// Schematic documents to check.
    /// When omitted, all .fpl.json files in the current directory are processed.
    #[arg(value_name = "PATHS", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Placement mode to simulate
    #[arg(long, value_enum, default_value_t = ModeArg::Manual)]
    pub mode: ModeArg,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let paths = collect_documents(args.paths)?;
    let config = AutoplaceConfig::default();
    let mut moved_total = 0usize;

    for path in &paths {
        let doc = SchematicDocument::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        let mut placed = doc.clone();
        place_document(&mut placed, args.mode, &config);

        for (before, after) in doc.symbols.iter().zip(&placed.symbols) {
            if before.fields != after.fields {
                println!("{}: {} would move", path.display(), before.reference);
                moved_total += 1;
            }
        }
    }

    if moved_total == 0 {
        println!("all fields already placed");
    } else {
        println!("{moved_total} symbols would move");
    }

    Ok(())
}
