use std::path::Path;

use anyhow::Context;
use switch_favicon::icon_pipeline::{ExportConfig, FaviconExporter};
use switch_favicon::logger;

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting favicon generation...");

    let output = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join("favicon.ico");

    let exporter = FaviconExporter::new(ExportConfig::default());
    info!("Sizes: {:?}", exporter.config().sizes);
    info!("Entry encoding: {:?}", exporter.config().encoding);

    let summary = exporter
        .export_file(&output)
        .with_context(|| format!("failed to generate {}", output.display()))?;

    info!("Wrote {} entries ({} bytes)", summary.dimensions.len(), summary.bytes);

    Ok(())
}
