use image::RgbaImage;

pub trait IconRenderer {
    fn render(&self, size: u32) -> RgbaImage;
}
