use super::error::InfrastructureError;
use crate::domain::image_store_trait::ImageStore;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageError};
use std::path::Path;

// ローカルファイルシステム上の画像の読み書き
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for LocalFileStorage {
    fn load(&self, path: &Path) -> Result<DynamicImage, InfrastructureError> {
        let decode_error = |source: ImageError| InfrastructureError::DecodeError {
            path: path.to_path_buf(),
            source,
        };

        // 拡張子ではなく中身からフォーマットを判定する
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(ImageError::IoError(e)))?;
        reader.decode().map_err(decode_error)
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), InfrastructureError> {
        image.save(path).map_err(|source| InfrastructureError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
