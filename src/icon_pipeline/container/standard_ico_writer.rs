use std::io::Write;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use tracing::debug;
use crate::icon_pipeline::common::error::{Result, ExportError};
use crate::icon_pipeline::container::types::{ExportConfig, IcoEncoding, MAX_ICO_SIZE, MIN_ICO_SIZE};
use crate::icon_pipeline::container::writer::IconWriter;

pub struct StandardIcoWriter;

impl StandardIcoWriter {
    fn encode_entry(image: &RgbaImage, encoding: IcoEncoding) -> Result<IconDirEntry> {
        let (width, height) = image.dimensions();
        for edge in [width, height] {
            if !(MIN_ICO_SIZE..=MAX_ICO_SIZE).contains(&edge) {
                return Err(ExportError::UnsupportedSize(edge));
            }
        }

        let icon_image = IconImage::from_rgba_data(width, height, image.as_raw().clone());
        let entry = match encoding {
            IcoEncoding::Auto => IconDirEntry::encode(&icon_image),
            IcoEncoding::Bmp => IconDirEntry::encode_as_bmp(&icon_image),
            IcoEncoding::Png => IconDirEntry::encode_as_png(&icon_image),
        }
        .map_err(|e| ExportError::EncodeError(format!("{}x{} entry: {}", width, height, e)))?;

        debug!(
            "Encoded {}x{} entry as {}",
            width,
            height,
            if entry.is_png() { "PNG" } else { "BMP" }
        );
        Ok(entry)
    }
}

impl IconWriter for StandardIcoWriter {
    fn write_icon(&self, images: &[RgbaImage], output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        debug!("Encoding ICO container: {} entries", images.len());

        if images.is_empty() {
            return Err(ExportError::EmptySizeSet);
        }

        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for image in images {
            icon_dir.add_entry(Self::encode_entry(image, config.encoding)?);
        }

        let mut buffer = Vec::new();
        icon_dir
            .write(&mut buffer)
            .map_err(|e| ExportError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("ICO encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn solid(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([22, 163, 74, 200]))
    }

    fn read_back(bytes: Vec<u8>) -> IconDir {
        IconDir::read(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_entries_keep_order_and_sizes() {
        let images = vec![solid(32), solid(16), solid(48)];
        let mut output = Vec::new();
        StandardIcoWriter
            .write_icon(&images, &mut output, &ExportConfig::default())
            .unwrap();

        let dir = read_back(output);
        let sizes: Vec<(u32, u32)> = dir.entries().iter().map(|e| (e.width(), e.height())).collect();
        assert_eq!(sizes, vec![(32, 32), (16, 16), (48, 48)]);
    }

    #[test]
    fn test_forced_encodings() {
        let images = vec![solid(16), solid(256)];

        let mut png = Vec::new();
        let config = ExportConfig::builder().encoding(IcoEncoding::Png).build();
        StandardIcoWriter.write_icon(&images, &mut png, &config).unwrap();
        assert!(read_back(png).entries().iter().all(|e| e.is_png()));

        let mut bmp = Vec::new();
        let config = ExportConfig::builder().encoding(IcoEncoding::Bmp).build();
        StandardIcoWriter.write_icon(&images, &mut bmp, &config).unwrap();
        assert!(read_back(bmp).entries().iter().all(|e| !e.is_png()));
    }

    #[test]
    fn test_png_entry_preserves_pixels() {
        let images = vec![solid(16)];
        let mut output = Vec::new();
        let config = ExportConfig::builder().encoding(IcoEncoding::Png).build();
        StandardIcoWriter.write_icon(&images, &mut output, &config).unwrap();

        let decoded = read_back(output).entries()[0].decode().unwrap();
        assert_eq!(decoded.rgba_data(), images[0].as_raw().as_slice());
    }

    #[test]
    fn test_rejects_oversized_entry() {
        let images = vec![solid(16), solid(257)];
        let mut output = Vec::new();
        let result = StandardIcoWriter.write_icon(&images, &mut output, &ExportConfig::default());

        assert!(matches!(result.unwrap_err(), ExportError::UnsupportedSize(257)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_rejects_empty_image_list() {
        let mut output = Vec::new();
        let result = StandardIcoWriter.write_icon(&[], &mut output, &ExportConfig::default());
        assert!(matches!(result.unwrap_err(), ExportError::EmptySizeSet));
    }
}
