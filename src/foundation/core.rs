/// Native pixel dimensions of the upstream layer, sampled once per tick.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SourceExtent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SourceExtent {
    /// Build an extent from raw pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either axis is zero (upstream absent or mid scene-switch).
    pub fn is_zero(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Extent with zero axes clamped to 1, for aspect and mesh math.
    pub fn clamped_nonzero(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }

    /// Aspect ratio `width / height`. Call on a non-zero extent.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Outcome of one per-frame render call.
///
/// `Skipped` means the frame passes through unfiltered this time and the host
/// should simply retry on its next tick; it is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// All four stages completed and the composite was drawn.
    Rendered,
    /// A stage could not acquire a valid source; nothing was composited.
    Skipped,
}

impl FrameStatus {
    /// True for [`FrameStatus::Skipped`].
    pub fn is_skipped(self) -> bool {
        matches!(self, Self::Skipped)
    }
}
