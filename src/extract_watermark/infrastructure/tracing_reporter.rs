use crate::domain::margin::MarginLookup;
use crate::domain::report::{ExtractionEvent, ExtractionReporter};
use tracing::{info, warn};

/// Writes extraction progress to the `tracing` subscriber.
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionReporter for TracingReporter {
    fn report(&self, event: &ExtractionEvent) {
        match event {
            ExtractionEvent::ImageLoaded { path, width, height } => {
                info!(path = %path.display(), width, height, "Image size: {}x{}", width, height);
            }
            ExtractionEvent::SizeMismatch { requested, recommended } => {
                warn!(
                    requested,
                    recommended = recommended.edge(),
                    "Requested {}px region, image dimensions suggest {}px",
                    requested,
                    recommended.edge()
                );
            }
            ExtractionEvent::RegionLocated { bbox, spec } => {
                info!(left = bbox.left, top = bbox.top, "Watermark position: ({}, {})", bbox.left, bbox.top);
                info!(
                    size = spec.size,
                    margin_right = spec.margins.right,
                    margin_bottom = spec.margins.bottom,
                    "Extracting {}x{} region with margins: right={}px, bottom={}px",
                    spec.size,
                    spec.size,
                    spec.margins.right,
                    spec.margins.bottom
                );
                if spec.lookup == MarginLookup::Defaulted {
                    warn!(size = spec.size, "No margin entry for {}px, using the 48px margins", spec.size);
                }
            }
            ExtractionEvent::RegionSaved { path } => {
                info!(path = %path.display(), "Saved watermark pattern to: {}", path.display());
            }
            ExtractionEvent::DebugImageSaved { path } => {
                info!(path = %path.display(), "Debug image saved to: {}", path.display());
            }
        }
    }
}
