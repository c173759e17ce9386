use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    // ファイルが無い・壊れている・未対応フォーマット
    #[error("Failed to decode image {}", .path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // 書き込み先ディレクトリが無い・書けない・エンコード失敗
    #[error("Failed to write image {}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
