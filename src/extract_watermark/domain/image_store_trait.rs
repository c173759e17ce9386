use crate::infrastructure::error::InfrastructureError;
use image::DynamicImage;
#[cfg(test)]
use mockall::automock;
use std::path::Path;

#[cfg_attr(test, automock)]
pub trait ImageStore {
    fn load(&self, path: &Path) -> Result<DynamicImage, InfrastructureError>;

    /// The encoder is picked from the extension of `path`.
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), InfrastructureError>;
}
