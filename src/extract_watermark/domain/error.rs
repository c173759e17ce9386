use thiserror::Error;
use crate::domain::bounding_box::BoundingBox;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // 画像が size + margin より小さい場合
    #[error("Region {bbox} does not fit inside a {width}x{height} image")]
    RegionOutOfBounds {
        bbox: BoundingBox,
        width: u32,
        height: u32,
    },
}
