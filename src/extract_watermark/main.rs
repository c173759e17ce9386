mod application;
mod domain;
mod infrastructure;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::extraction_service::ExtractionService;
use crate::domain::margin::{RegionSpec, WatermarkSize};
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_processor::DefaultImageProcessor;
use crate::infrastructure::tracing_reporter::TracingReporter;

// 抽出元の画像と書き出し先
const INPUT_IMAGE: &str = "input.jpg";
const OUTPUT_48: &str = "public/nano_banana_48.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("extract_watermark=info".parse()?),
        )
        .init();

    let service = ExtractionService::new(
        Arc::new(LocalFileStorage::new()),
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(TracingReporter::new()),
    );

    // 1辺が 1024 以下の画像向けの 48x48
    info!("Extracting 48x48 watermark pattern...");
    let region = service
        .extract(Path::new(INPUT_IMAGE), Path::new(OUTPUT_48), RegionSpec::from(WatermarkSize::Small))
        .with_context(|| format!("watermark extraction from {} failed", INPUT_IMAGE))?;

    let (width, height) = region.dimensions();
    info!(
        width,
        height,
        defaulted = region.spec.is_defaulted(),
        "Watermark extraction complete: {}x{} region at {} (margins right={}px, bottom={}px)",
        width,
        height,
        region.bbox,
        region.spec.margins.right,
        region.spec.margins.bottom
    );
    info!(path = %region.output_path.display(), "Pattern file: {}", region.output_path.display());
    info!(
        path = %region.debug_path.display(),
        "Check {} to see if the red box is around the watermark",
        region.debug_path.display()
    );
    Ok(())
}
