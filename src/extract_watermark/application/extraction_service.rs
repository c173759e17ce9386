use std::path::Path;
use std::sync::Arc;
use image::GenericImageView;
use super::error::ApplicationError;

use crate::domain::bounding_box::BoundingBox;
use crate::domain::error::DomainError;
use crate::domain::image::{debug_path_for, ExtractedRegion};
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::image_store_trait::ImageStore;
use crate::domain::margin::{RegionSpec, WatermarkSize};
use crate::domain::report::{ExtractionEvent, ExtractionReporter};

/// Crops the bottom-right watermark region and writes it next to a debug overlay.
pub struct ExtractionService {
    image_store: Arc<dyn ImageStore + Send + Sync>,
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    reporter: Arc<dyn ExtractionReporter + Send + Sync>,
}

impl ExtractionService {
    pub fn new(
        image_store: Arc<dyn ImageStore + Send + Sync>,
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        reporter: Arc<dyn ExtractionReporter + Send + Sync>,
    ) -> Self {
        Self {
            image_store,
            image_processor,
            reporter,
        }
    }

    pub fn extract(
        &self,
        image_path: &Path,
        output_path: &Path,
        spec: RegionSpec,
    ) -> Result<ExtractedRegion, ApplicationError> {
        let source = self.image_store.load(image_path)?;
        let (width, height) = source.dimensions();
        self.reporter.report(&ExtractionEvent::ImageLoaded {
            path: image_path.to_path_buf(),
            width,
            height,
        });

        let recommended = WatermarkSize::recommended_for(width, height);
        if recommended.edge() != spec.size {
            self.reporter.report(&ExtractionEvent::SizeMismatch {
                requested: spec.size,
                recommended,
            });
        }

        let bbox = BoundingBox::anchored_bottom_right(width, height, &spec);
        self.reporter.report(&ExtractionEvent::RegionLocated { bbox, spec });

        // ファイルを書く前に範囲外を弾く
        if !bbox.fits_within(width, height) {
            return Err(DomainError::RegionOutOfBounds { bbox, width, height }.into());
        }

        let region = self.image_processor.crop(&source, &bbox)?;
        self.image_store.save(&region, output_path)?;
        self.reporter.report(&ExtractionEvent::RegionSaved {
            path: output_path.to_path_buf(),
        });

        let debug = self.image_processor.outline(&source, &bbox);
        let debug_path = debug_path_for(output_path);
        self.image_store.save(&debug.image, &debug_path)?;
        self.reporter.report(&ExtractionEvent::DebugImageSaved {
            path: debug_path.clone(),
        });

        Ok(ExtractedRegion {
            image: region,
            bbox,
            spec,
            output_path: output_path.to_path_buf(),
            debug_path,
        })
    }
}
