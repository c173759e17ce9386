pub mod bounding_box;
pub mod error;
pub mod image;
pub mod image_processor_trait;
pub mod image_store_trait;
pub mod margin;
pub mod report;
