//! Offline generator for the icon type map.
//!
//! Reads the material-icon-theme mapping fixture and the iconify icon set
//! from local paths and writes the generated `typemap.rs` source. Fixtures
//! are vendored; refreshing them from upstream is a separate manual step.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gitdesk_forge::ui::icons::write_typemap;

#[derive(Parser)]
#[command(
    name = "generate-icons",
    about = "Generate src/ui/icons/typemap.rs from icon fixtures"
)]
struct Args {
    /// Path to the material-icons.json mapping fixture
    #[arg(long, default_value = "fixtures/material-icons.json")]
    material: PathBuf,

    /// Path to the iconify icon-set JSON (SVG bodies)
    #[arg(long, default_value = "fixtures/material-icon-theme.json")]
    icon_set: PathBuf,

    /// Output path for the generated module
    #[arg(long, default_value = "src/ui/icons/typemap.rs")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    write_typemap(&args.material, &args.icon_set, &args.out)
        .with_context(|| format!("generating {}", args.out.display()))?;

    println!("wrote {}", args.out.display());
    Ok(())
}
