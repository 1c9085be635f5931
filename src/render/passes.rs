use glam::Mat4;

use crate::{
    foundation::core::SourceExtent, foundation::error::ParallaxResult,
    transform::mesh::QuadMesh,
};

/// Opaque handle to a backend-owned texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Opaque handle to a backend-owned shading effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u64);

/// The stage-owned offscreen surfaces, identified by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageSurface {
    /// Where the upstream layer is captured before transformation.
    Capture,
    /// Where the transformed quad is rasterized at native resolution.
    Transformed,
}

/// Supported pixel formats for stage surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGBA.
    Rgba8,
}

/// Surface binding for an offscreen pass: dimensions + pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceDesc {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
}

impl SurfaceDesc {
    /// RGBA8 surface covering `extent`.
    pub fn rgba8(extent: SourceExtent) -> Self {
        Self {
            width: extent.width,
            height: extent.height,
            format: PixelFormat::Rgba8,
        }
    }
}

/// Blend behavior for a pass. The stage always disables blending; the
/// variants pick the per-channel source factors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Straight overwrite: `ONE/ZERO` on both color and alpha.
    Overwrite,
    /// Overwrite color, pass source alpha through as-is without source-over
    /// compositing: `ONE/ZERO` color, `SRC_ALPHA/ZERO` alpha.
    CopySourceAlpha,
}

/// Capture pass: render the upstream layer into the capture surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapturePass {
    /// Capture surface at the policy-selected cache resolution.
    pub surface: SurfaceDesc,
    /// Native extent of the upstream layer.
    pub source_extent: SourceExtent,
    /// Pixel-space orthographic projection over the native extent.
    pub projection: Mat4,
    /// `CopySourceAlpha` — the upstream's alpha is written as-is.
    pub blend: BlendMode,
    /// Clear the surface to transparent before the upstream draws.
    pub clear_to_transparent: bool,
}

/// Mipmap chain texture allocation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipChainDesc {
    /// Level-0 width in pixels.
    pub width: u32,
    /// Level-0 height in pixels.
    pub height: u32,
    /// Number of mip levels.
    pub levels: u32,
}

/// Transform pass: rasterize the quad mesh through the scene projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformPass {
    /// Intermediate surface at native resolution.
    pub surface: SurfaceDesc,
    /// Orthographic or perspective scene projection.
    pub projection: Mat4,
    /// `Overwrite` — no compositing at this stage.
    pub blend: BlendMode,
    /// Clear the surface to transparent before drawing.
    pub clear_to_transparent: bool,
}

/// Composite pass: draw the transformed surface back to the host as a 2D
/// sprite at native resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositePass {
    /// Native extent of the output.
    pub extent: SourceExtent,
}

/// The GPU services a [`crate::TransformStage`] consumes, implemented by the
/// host's graphics layer.
///
/// All textures and surfaces behind this trait belong to exactly one stage
/// instance; handles returned here are never shared across stages. Methods
/// return `Err` only for hard resource failures — transient unavailability is
/// expressed in-band (`Ok(false)`, `None`) and turns into a skipped frame.
pub trait StageBackend {
    /// Native extent of the upstream layer, if it is reachable this tick.
    fn source_extent(&mut self) -> Option<SourceExtent>;

    /// Bind the capture surface and run the upstream filter-processing hook.
    ///
    /// Returns `Ok(false)` when the upstream refuses to begin (not ready);
    /// the stage skips the frame and retries next tick.
    fn capture_source(&mut self, pass: &CapturePass) -> ParallaxResult<bool>;

    /// Resulting texture of a stage surface after it has been rendered.
    fn surface_texture(&mut self, surface: StageSurface) -> Option<TextureHandle>;

    /// Allocate a mipmap chain texture. The stage releases the previous
    /// chain only after this returns a valid handle.
    fn create_mip_chain(&mut self, desc: &MipChainDesc) -> ParallaxResult<TextureHandle>;

    /// Release a texture previously returned by
    /// [`StageBackend::create_mip_chain`].
    fn release_texture(&mut self, texture: TextureHandle);

    /// Regenerate the full mipmap chain from `source` into `chain`.
    fn rebuild_mip_chain(
        &mut self,
        source: TextureHandle,
        chain: TextureHandle,
    ) -> ParallaxResult<()>;

    /// Upload the quad's vertices and draw them as a 4-vertex triangle strip
    /// (no index buffer), sampling `image`.
    fn draw_mesh(
        &mut self,
        pass: &TransformPass,
        mesh: &QuadMesh,
        image: TextureHandle,
    ) -> ParallaxResult<()>;

    /// Draw `image` as a 2D sprite through `effect` into the host's output.
    /// `None` selects the backend's default passthrough effect.
    fn draw_sprite(
        &mut self,
        pass: &CompositePass,
        image: TextureHandle,
        effect: Option<EffectHandle>,
    ) -> ParallaxResult<()>;
}
