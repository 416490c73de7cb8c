use tracing::{info, instrument};
use image::RgbaImage;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::icon_pipeline::{
    common::error::{ExportError, Result},
    compose::{IconRenderer, SwitchIconRenderer},
    container::{IconWriter, StandardIcoWriter, ExportConfig, MAX_ICO_SIZE, MIN_ICO_SIZE},
};

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Destination, empty when exporting to an arbitrary writer
    pub path: PathBuf,
    /// `(width, height)` of every entry, in container order
    pub dimensions: Vec<(u32, u32)>,
    /// Encoded container size in bytes
    pub bytes: usize,
}

impl ExportSummary {
    /// Human readable dimension list, e.g. `[16x16, 32x32]`.
    pub fn dimensions_label(&self) -> String {
        let parts: Vec<String> = self
            .dimensions
            .iter()
            .map(|(w, h)| format!("{}x{}", w, h))
            .collect();
        format!("[{}]", parts.join(", "))
    }
}

pub struct FaviconExporter<R: IconRenderer, W: IconWriter> {
    renderer: R,
    writer: W,
    config: ExportConfig,
}

impl FaviconExporter<SwitchIconRenderer, StandardIcoWriter> {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            renderer: SwitchIconRenderer,
            writer: StandardIcoWriter,
            config,
        }
    }
}

impl<R: IconRenderer, W: IconWriter> FaviconExporter<R, W> {
    pub fn with_custom(renderer: R, writer: W, config: ExportConfig) -> Self {
        Self {
            renderer,
            writer,
            config,
        }
    }

    fn validate_sizes(&self) -> Result<()> {
        if self.config.sizes.is_empty() {
            return Err(ExportError::EmptySizeSet);
        }

        if let Some(&size) = self
            .config
            .sizes
            .iter()
            .find(|size| !(MIN_ICO_SIZE..=MAX_ICO_SIZE).contains(*size))
        {
            return Err(ExportError::UnsupportedSize(size));
        }

        Ok(())
    }

    /// Renders one image per configured size, in order.
    pub fn render_all(&self) -> Result<Vec<RgbaImage>> {
        self.validate_sizes()?;

        Ok(self
            .config
            .sizes
            .iter()
            .map(|&size| {
                let _span = tracing::info_span!("render_icon", size).entered();
                self.renderer.render(size)
            })
            .collect())
    }

    /// Encodes the full container into memory, then hands it to `output` in
    /// a single write.
    #[instrument(skip(self, output), fields(sizes = ?self.config.sizes))]
    pub fn export(&self, output: &mut dyn Write) -> Result<ExportSummary> {
        info!("Starting favicon export");

        let images = self.render_all()?;

        let mut buffer = Vec::new();
        {
            let _span = tracing::info_span!("encode_ico", entries = images.len()).entered();
            self.writer.write_icon(&images, &mut buffer, &self.config)?;
        }

        output.write_all(&buffer)?;

        let summary = ExportSummary {
            path: PathBuf::new(),
            dimensions: images.iter().map(|image| image.dimensions()).collect(),
            bytes: buffer.len(),
        };
        info!(bytes = summary.bytes, "Export complete");
        Ok(summary)
    }

    /// Writes the favicon to `output_path`. The file is only created once
    /// encoding succeeded, so a failed export leaves nothing behind.
    #[instrument(skip(self, output_path))]
    pub fn export_file<P: AsRef<Path>>(&self, output_path: P) -> Result<ExportSummary> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Exporting favicon");

        let mut encoded = Vec::new();
        let mut summary = self.export(&mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ExportError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        summary.path = output_path.to_path_buf();
        info!(
            "[OK] favicon saved to {} with sizes {}",
            summary.path.display(),
            summary.dimensions_label()
        );
        Ok(summary)
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExportConfig) {
        self.config = config;
    }
}
