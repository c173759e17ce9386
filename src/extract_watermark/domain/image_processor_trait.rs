use crate::domain::bounding_box::BoundingBox;
use crate::domain::image::DebugImage;
use crate::infrastructure::error::InfrastructureError;
use image::DynamicImage;
#[cfg(test)]
use mockall::automock;

// 切り出しとデバッグ描画を担当する
#[cfg_attr(test, automock)]
pub trait ImageProcessor {
    /// Copies the pixels inside `bbox` into a new image.
    fn crop(&self, source: &DynamicImage, bbox: &BoundingBox) -> Result<DynamicImage, InfrastructureError>;

    /// Full-size copy of `source` with `bbox` outlined.
    fn outline(&self, source: &DynamicImage, bbox: &BoundingBox) -> DebugImage;
}
