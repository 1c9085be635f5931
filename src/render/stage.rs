use crate::{
    foundation::core::{FrameStatus, SourceExtent},
    foundation::error::ParallaxResult,
    render::cache::{cache_extent, mip_level_count},
    render::passes::{
        BlendMode, CapturePass, CompositePass, EffectHandle, MipChainDesc, StageBackend,
        StageSurface, SurfaceDesc, TextureHandle, TransformPass,
    },
    settings::store::Settings,
    transform::camera::{capture_projection, scene_projection},
    transform::mesh::QuadMesh,
    transform::params::TransformParameters,
};

/// A 3D transform stage for one video layer.
///
/// The stage owns the parameter state, the transformed quad mesh, and the
/// per-tick render flags. The host drives it frame-synchronously:
/// [`TransformStage::tick`] once per output frame, then
/// [`TransformStage::render`] once per downstream consumer. Repeated render
/// calls within one tick redo only the final composite.
pub struct TransformStage {
    params: TransformParameters,
    // Raw upstream extent as last sampled; zero axes are retained so a
    // recovering upstream still triggers a rebuild.
    source_size: SourceExtent,
    mesh: QuadMesh,
    update_mesh: bool,
    cache_rendered: bool,
    mipmap_rendered: bool,
    source_rendered: bool,
    mipmap_texture: Option<TextureHandle>,
    mipmap_extent: SourceExtent,
}

impl TransformStage {
    /// Build a stage from a settings snapshot.
    pub fn new(settings: &Settings) -> Self {
        let params = TransformParameters::default();
        let mut stage = Self {
            params,
            source_size: SourceExtent::default(),
            mesh: QuadMesh::build(&params, SourceExtent::default()),
            update_mesh: true,
            cache_rendered: false,
            mipmap_rendered: false,
            source_rendered: false,
            mipmap_texture: None,
            mipmap_extent: SourceExtent::default(),
        };
        stage.load(settings);
        stage
    }

    /// Apply a freshly loaded settings snapshot. Equivalent to
    /// [`TransformStage::update`].
    pub fn load(&mut self, settings: &Settings) {
        self.update(settings);
    }

    /// Apply a settings snapshot, replacing the parameters wholesale.
    ///
    /// Always marks the mesh dirty, even for an identical snapshot.
    #[tracing::instrument(skip(self, settings))]
    pub fn update(&mut self, settings: &Settings) {
        self.params = TransformParameters::from_settings(settings);
        self.update_mesh = true;
    }

    /// Current render-facing parameters.
    pub fn params(&self) -> &TransformParameters {
        &self.params
    }

    /// The quad mesh as of the last tick.
    pub fn mesh(&self) -> &QuadMesh {
        &self.mesh
    }

    /// True when the mesh will be rebuilt on the next tick.
    pub fn mesh_dirty(&self) -> bool {
        self.update_mesh
    }

    /// Per-frame scheduling tick.
    ///
    /// Samples the upstream extent, rebuilds the mesh when parameters or
    /// either extent axis changed, and clears the per-tick render flags.
    pub fn tick<B: StageBackend>(&mut self, backend: &mut B) {
        let extent = backend.source_extent().unwrap_or_default();

        if extent.width != self.source_size.width {
            self.update_mesh = true;
        } else if extent.height != self.source_size.height {
            self.update_mesh = true;
        }

        if self.update_mesh {
            self.source_size = extent;
            self.mesh = QuadMesh::build(&self.params, extent);
            self.update_mesh = false;
        }

        self.cache_rendered = false;
        self.mipmap_rendered = false;
        self.source_rendered = false;
    }

    /// Render one frame: capture, optional mipmap build, transform+project,
    /// composite.
    ///
    /// Returns [`FrameStatus::Skipped`] when the upstream is unreachable,
    /// reports a zero extent, refuses to begin the capture, or a surface
    /// yields no texture — all transient conditions retried on the next
    /// tick. `effect` selects the composite shading effect; `None` uses the
    /// backend's default passthrough.
    #[tracing::instrument(skip(self, backend, effect))]
    pub fn render<B: StageBackend>(
        &mut self,
        backend: &mut B,
        effect: Option<EffectHandle>,
    ) -> ParallaxResult<FrameStatus> {
        let Some(native) = backend.source_extent() else {
            tracing::debug!("upstream target unavailable, skipping frame");
            return Ok(FrameStatus::Skipped);
        };
        if native.is_zero() {
            tracing::debug!(?native, "upstream extent is degenerate, skipping frame");
            return Ok(FrameStatus::Skipped);
        }

        let cache = cache_extent(native, self.params.mipmap_enabled);

        if !self.cache_rendered {
            let pass = CapturePass {
                surface: SurfaceDesc::rgba8(cache),
                source_extent: native,
                projection: capture_projection(native),
                blend: BlendMode::CopySourceAlpha,
                clear_to_transparent: true,
            };
            if !backend.capture_source(&pass)? {
                tracing::debug!("upstream not ready for capture, skipping frame");
                return Ok(FrameStatus::Skipped);
            }
            self.cache_rendered = true;
        }
        let Some(cache_texture) = backend.surface_texture(StageSurface::Capture) else {
            tracing::debug!("capture surface has no texture, skipping frame");
            return Ok(FrameStatus::Skipped);
        };

        if self.params.mipmap_enabled {
            if self.mipmap_texture.is_none() || self.mipmap_extent != cache {
                let desc = MipChainDesc {
                    width: cache.width,
                    height: cache.height,
                    levels: mip_level_count(cache),
                };
                let chain = backend.create_mip_chain(&desc)?;
                // The new chain must be valid before the old one is released
                // so there is never a window without a texture.
                if let Some(old) = self.mipmap_texture.replace(chain) {
                    backend.release_texture(old);
                }
                self.mipmap_extent = cache;
            }
            let Some(chain) = self.mipmap_texture else {
                tracing::debug!("mipmap chain unavailable, skipping frame");
                return Ok(FrameStatus::Skipped);
            };
            if !self.mipmap_rendered {
                backend.rebuild_mip_chain(cache_texture, chain)?;
                self.mipmap_rendered = true;
            }
        }

        if !self.source_rendered {
            let image = if self.params.mipmap_enabled {
                self.mipmap_texture.unwrap_or(cache_texture)
            } else {
                cache_texture
            };
            let pass = TransformPass {
                surface: SurfaceDesc::rgba8(native),
                projection: scene_projection(&self.params, native),
                blend: BlendMode::Overwrite,
                clear_to_transparent: true,
            };
            backend.draw_mesh(&pass, &self.mesh, image)?;
            self.source_rendered = true;
        }
        let Some(source_texture) = backend.surface_texture(StageSurface::Transformed) else {
            tracing::debug!("transformed surface has no texture, skipping frame");
            return Ok(FrameStatus::Skipped);
        };

        backend.draw_sprite(&CompositePass { extent: native }, source_texture, effect)?;

        Ok(FrameStatus::Rendered)
    }

    /// Release the backend resources this stage allocated.
    ///
    /// Call before dropping the stage when the backend outlives it; the
    /// stage-surface textures belong to the backend and need no release.
    pub fn release_resources<B: StageBackend>(&mut self, backend: &mut B) {
        if let Some(chain) = self.mipmap_texture.take() {
            backend.release_texture(chain);
        }
        self.mipmap_extent = SourceExtent::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/stage.rs"]
mod tests;
