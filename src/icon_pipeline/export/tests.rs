use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};
use image::{Rgba, RgbaImage};
use crate::icon_pipeline::common::error::{Result, ExportError};
use crate::icon_pipeline::compose::IconRenderer;
use crate::icon_pipeline::container::{IconWriter, ExportConfig, IcoEncoding};
use crate::icon_pipeline::export::FaviconExporter;

struct MockRenderer {
    rendered: Arc<Mutex<Vec<u32>>>,
}

impl IconRenderer for MockRenderer {
    fn render(&self, size: u32) -> RgbaImage {
        self.rendered.lock().unwrap().push(size);
        RgbaImage::from_pixel(size, size, Rgba([1, 2, 3, 4]))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<Vec<(u32, u32)>>>>,
}

impl IconWriter for MockWriter {
    fn write_icon(&self, images: &[RgbaImage], output: &mut dyn Write, _config: &ExportConfig) -> Result<()> {
        if self.should_fail {
            return Err(ExportError::EncodeError("Mock encode error".to_string()));
        }
        self.written
            .lock()
            .unwrap()
            .push(images.iter().map(|image| image.dimensions()).collect());
        output.write_all(b"ICO")?;
        Ok(())
    }
}

fn mock_exporter(
    should_fail: bool,
    config: ExportConfig,
) -> (
    FaviconExporter<MockRenderer, MockWriter>,
    Arc<Mutex<Vec<u32>>>,
    Arc<Mutex<Vec<Vec<(u32, u32)>>>>,
) {
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let written = Arc::new(Mutex::new(Vec::new()));
    let exporter = FaviconExporter::with_custom(
        MockRenderer { rendered: rendered.clone() },
        MockWriter { should_fail, written: written.clone() },
        config,
    );
    (exporter, rendered, written)
}

#[test]
fn test_config_builder() {
    let config = ExportConfig::builder()
        .sizes([16, 32])
        .encoding(IcoEncoding::Png)
        .build();

    assert_eq!(config.sizes, vec![16, 32]);
    assert_eq!(config.encoding, IcoEncoding::Png);
}

#[test]
fn test_default_config() {
    let config = ExportConfig::default();
    assert_eq!(config.sizes, vec![16, 32, 48, 64, 128, 256]);
    assert_eq!(config.encoding, IcoEncoding::Auto);
}

#[test]
fn test_renders_each_size_in_order() {
    let config = ExportConfig::builder().sizes([64, 16, 32]).build();
    let (exporter, rendered, written) = mock_exporter(false, config);

    let mut output = Cursor::new(Vec::new());
    let summary = exporter.export(&mut output).unwrap();

    assert_eq!(*rendered.lock().unwrap(), vec![64, 16, 32]);
    assert_eq!(*written.lock().unwrap(), vec![vec![(64, 64), (16, 16), (32, 32)]]);
    assert_eq!(summary.dimensions, vec![(64, 64), (16, 16), (32, 32)]);
    assert_eq!(summary.dimensions_label(), "[64x64, 16x16, 32x32]");
    assert_eq!(output.into_inner(), b"ICO");
}

#[test]
fn test_writer_failure_propagates_without_output() {
    let (exporter, _, _) = mock_exporter(true, ExportConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = exporter.export(&mut output);

    assert!(matches!(result.unwrap_err(), ExportError::EncodeError(_)));
    assert!(output.into_inner().is_empty());
}

#[test]
fn test_unsupported_size_rejected_before_rendering() {
    for size in [0u32, 257] {
        let config = ExportConfig::builder().sizes([16, size]).build();
        let (exporter, rendered, written) = mock_exporter(false, config);

        let mut output = Cursor::new(Vec::new());
        let result = exporter.export(&mut output);

        assert!(matches!(result.unwrap_err(), ExportError::UnsupportedSize(s) if s == size));
        assert!(rendered.lock().unwrap().is_empty());
        assert!(written.lock().unwrap().is_empty());
    }
}

#[test]
fn test_empty_size_set_rejected() {
    let config = ExportConfig::builder().sizes(Vec::new()).build();
    let (exporter, _, _) = mock_exporter(false, config);

    let mut output = Cursor::new(Vec::new());
    let result = exporter.export(&mut output);

    assert!(matches!(result.unwrap_err(), ExportError::EmptySizeSet));
}

#[test]
fn test_set_config() {
    let (mut exporter, rendered, _) = mock_exporter(false, ExportConfig::default());
    exporter.set_config(ExportConfig::builder().sizes([48]).build());

    let mut output = Cursor::new(Vec::new());
    exporter.export(&mut output).unwrap();

    assert_eq!(exporter.config().sizes, vec![48]);
    assert_eq!(*rendered.lock().unwrap(), vec![48]);
}
