use std::path::{Path, PathBuf};
use image::{DynamicImage, GenericImageView, Rgba};
use crate::domain::bounding_box::BoundingBox;
use crate::domain::margin::RegionSpec;

/// Outline color of the debug overlay.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
/// Same color for 16-bit canvases.
pub const OUTLINE_COLOR_16: Rgba<u16> = Rgba([u16::MAX, 0, 0, u16::MAX]);
/// Outline thickness in pixels, drawn inward from the box edge.
pub const OUTLINE_WIDTH: u32 = 3;

/// The cropped pixels. Owns its buffer, independent of the source image.
#[derive(Debug, Clone)]
pub struct ExtractedRegion {
    pub image: DynamicImage,
    pub bbox: BoundingBox,
    pub spec: RegionSpec,
    pub output_path: PathBuf,
    pub debug_path: PathBuf,
}

impl ExtractedRegion {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Full-size copy of the source with the crop box outlined.
///
/// 16-bit sources stay 16-bit (`ImageRgba16`), everything else is drawn on
/// `ImageRgba8`. Channel layout is always RGBA so the red outline is visible
/// on grayscale sources too.
pub struct DebugImage {
    pub image: DynamicImage,
}

impl DebugImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }
}

/// `out/mark.png` -> `out/mark_debug.png`. Never returns `output` itself.
///
/// An output without an extension maps to `<name>_debug.png`. `extract` never
/// gets that far (the primary save already fails without an extension), so
/// that branch only serves direct callers.
pub fn debug_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match output.extension() {
        Some(ext) => format!("{}_debug.{}", stem, ext.to_string_lossy()),
        None => format!("{}_debug.png", stem),
    };
    output.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_path_replaces_png_suffix() {
        assert_eq!(
            debug_path_for(Path::new("public/nano_banana_48.png")),
            PathBuf::from("public/nano_banana_48_debug.png")
        );
    }

    #[test]
    fn test_debug_path_keeps_other_extensions() {
        assert_eq!(debug_path_for(Path::new("out/mark.jpg")), PathBuf::from("out/mark_debug.jpg"));
    }

    #[test]
    fn test_debug_path_without_extension_never_collides() {
        let output = Path::new("out/mark");
        let debug = debug_path_for(output);
        assert_eq!(debug, PathBuf::from("out/mark_debug.png"));
        assert_ne!(debug, output);
    }

    #[test]
    fn test_debug_path_only_touches_file_name() {
        assert_eq!(
            debug_path_for(Path::new("a.png.d/b.png")),
            PathBuf::from("a.png.d/b_debug.png")
        );
    }
}
