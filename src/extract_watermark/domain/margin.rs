use crate::domain::error::DomainError;

/// Watermark edge lengths the margin table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkSize {
    #[default]
    Small,
    Large,
}

impl WatermarkSize {
    pub fn edge(self) -> u32 {
        match self {
            WatermarkSize::Small => 48,
            WatermarkSize::Large => 96,
        }
    }

    pub fn from_edge(edge: u32) -> Option<Self> {
        match edge {
            48 => Some(WatermarkSize::Small),
            96 => Some(WatermarkSize::Large),
            _ => None,
        }
    }

    pub fn margins(self) -> Margins {
        match self {
            WatermarkSize::Small => Margins::new(24, 24),
            WatermarkSize::Large => Margins::new(64, 64),
        }
    }

    /// Large only when both dimensions exceed 1024 px.
    pub fn recommended_for(width: u32, height: u32) -> Self {
        if width > 1024 && height > 1024 {
            WatermarkSize::Large
        } else {
            WatermarkSize::Small
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub right: u32,
    pub bottom: u32,
}

impl Margins {
    pub fn new(right: u32, bottom: u32) -> Self {
        Self { right, bottom }
    }
}

/// Whether the requested edge length hit the margin table or fell back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginLookup {
    Matched(WatermarkSize),
    Defaulted,
}

/// Edge length plus the margins used to anchor it in the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpec {
    pub size: u32,
    pub margins: Margins,
    pub lookup: MarginLookup,
}

impl RegionSpec {
    /// Looks up a raw edge length. The binary itself passes a `WatermarkSize`.
    #[allow(dead_code)]
    pub fn for_size(size: u32) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidInput("region size must be greater than zero".to_string()));
        }

        let spec = match WatermarkSize::from_edge(size) {
            Some(known) => Self::from(known),
            // 未知のサイズは 48 のマージンを使う
            None => Self {
                size,
                margins: WatermarkSize::Small.margins(),
                lookup: MarginLookup::Defaulted,
            },
        };
        Ok(spec)
    }

    pub fn is_defaulted(&self) -> bool {
        self.lookup == MarginLookup::Defaulted
    }
}

impl From<WatermarkSize> for RegionSpec {
    fn from(size: WatermarkSize) -> Self {
        Self {
            size: size.edge(),
            margins: size.margins(),
            lookup: MarginLookup::Matched(size),
        }
    }
}

impl Default for RegionSpec {
    fn default() -> Self {
        Self::from(WatermarkSize::default())
    }
}
