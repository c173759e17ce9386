use crate::domain::bounding_box::BoundingBox;
use crate::domain::margin::{RegionSpec, WatermarkSize};
use std::path::PathBuf;

/// Progress of a single extraction, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionEvent {
    ImageLoaded {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    SizeMismatch {
        requested: u32,
        recommended: WatermarkSize,
    },
    RegionLocated {
        bbox: BoundingBox,
        spec: RegionSpec,
    },
    RegionSaved {
        path: PathBuf,
    },
    DebugImageSaved {
        path: PathBuf,
    },
}

pub trait ExtractionReporter {
    fn report(&self, event: &ExtractionEvent);
}
