//! Favicon export configuration types

/// Smallest edge an ICO directory entry can declare.
pub const MIN_ICO_SIZE: u32 = 1;
/// Largest edge an ICO directory entry can declare.
pub const MAX_ICO_SIZE: u32 = 256;

/// Sizes packed into the favicon, in container order.
pub const DEFAULT_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// How each ICO entry stores its pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcoEncoding {
    /// Let the encoder pick per entry (default)
    Auto,
    /// Uncompressed 32-bit bitmap for every entry (widest compatibility)
    Bmp,
    /// PNG for every entry (smallest file)
    Png,
}

/// Configuration for favicon export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Pixel sizes to render, one square entry each
    pub sizes: Vec<u32>,
    /// Entry encoding
    pub encoding: IcoEncoding,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            encoding: IcoEncoding::Auto,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Builder for ExportConfig
#[derive(Default)]
pub struct ExportConfigBuilder {
    sizes: Option<Vec<u32>>,
    encoding: Option<IcoEncoding>,
}

impl ExportConfigBuilder {
    pub fn sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn encoding(mut self, encoding: IcoEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            sizes: self.sizes.unwrap_or(default.sizes),
            encoding: self.encoding.unwrap_or(default.encoding),
        }
    }
}
