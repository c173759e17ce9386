use super::error::InfrastructureError;
use crate::domain::bounding_box::BoundingBox;
use crate::domain::image::{DebugImage, OUTLINE_COLOR, OUTLINE_COLOR_16, OUTLINE_WIDTH};
use crate::domain::image_processor_trait::ImageProcessor;
use image::{DynamicImage, GenericImageView};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn crop(&self, source: &DynamicImage, bbox: &BoundingBox) -> Result<DynamicImage, InfrastructureError> {
        let (width, height) = source.dimensions();
        // crop_imm は範囲外を黙って切り詰めるので、先に弾く
        if !bbox.fits_within(width, height) || bbox.width() <= 0 || bbox.height() <= 0 {
            return Err(InfrastructureError::ImageProcessingError(format!(
                "crop box {} is outside the {}x{} image",
                bbox, width, height
            )));
        }

        Ok(source.crop_imm(
            bbox.left as u32,
            bbox.top as u32,
            bbox.width() as u32,
            bbox.height() as u32,
        ))
    }

    fn outline(&self, source: &DynamicImage, bbox: &BoundingBox) -> DebugImage {
        // 16bit の画像は 16bit のまま描く
        let image = match source {
            DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_) => {
                let mut canvas = source.to_rgba16();
                draw_outline(&mut canvas, bbox, OUTLINE_COLOR_16);
                DynamicImage::ImageRgba16(canvas)
            }
            _ => {
                let mut canvas = source.to_rgba8();
                draw_outline(&mut canvas, bbox, OUTLINE_COLOR);
                DynamicImage::ImageRgba8(canvas)
            }
        };

        DebugImage::new(image)
    }
}

// 枠線は left..=right, top..=bottom を外周として内側に太らせる
fn draw_outline<C: imageproc::drawing::Canvas>(canvas: &mut C, bbox: &BoundingBox, color: C::Pixel) {
    for inset in 0..i64::from(OUTLINE_WIDTH) {
        let side_w = bbox.width() + 1 - 2 * inset;
        let side_h = bbox.height() + 1 - 2 * inset;
        if side_w <= 0 || side_h <= 0 {
            break;
        }
        let rect = Rect::at((bbox.left + inset) as i32, (bbox.top + inset) as i32)
            .of_size(side_w as u32, side_h as u32);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}
