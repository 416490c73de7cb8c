use std::io::Write;
use image::RgbaImage;
use crate::icon_pipeline::common::error::Result;
use crate::icon_pipeline::container::types::ExportConfig;

pub trait IconWriter {
    fn write_icon(&self, images: &[RgbaImage], output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}
