use crate::{
    foundation::core::SourceExtent,
    foundation::math::{ceil_pow2, pow2_exponent_ceil},
};

/// Hardware ceiling for a single cache surface axis.
const MAX_AXIS: u64 = 16384;

/// Resolution at which the upstream layer is captured.
///
/// With mipmapping disabled this is the native resolution, unchanged. With
/// mipmapping enabled each axis snaps up to the next power of two (clamped to
/// `[1, 16384]`); the non-dominant axis is then recomputed from the snapped
/// dominant axis and the native aspect ratio, so the cache surface keeps a
/// shape close to the source instead of rounding both axes independently.
pub fn cache_extent(native: SourceExtent, mipmap_enabled: bool) -> SourceExtent {
    if !mipmap_enabled {
        return native;
    }

    let native = native.clamped_nonzero();
    let aspect = native.aspect();

    let mut width = snap_axis(u64::from(native.width));
    let mut height = snap_axis(u64::from(native.height));

    if aspect > 1.0 {
        height = snap_axis((width as f64 / aspect) as u64);
    } else if aspect < 1.0 {
        width = snap_axis((height as f64 * aspect) as u64);
    }

    SourceExtent::new(width as u32, height as u32)
}

fn snap_axis(v: u64) -> u64 {
    ceil_pow2(v).clamp(1, MAX_AXIS)
}

/// Number of levels the mipmap chain needs to cover `extent` down to 1x1.
pub fn mip_level_count(extent: SourceExtent) -> u32 {
    pow2_exponent_ceil(u64::from(extent.width)).max(pow2_exponent_ceil(u64::from(extent.height)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
