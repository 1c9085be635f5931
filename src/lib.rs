//! Parallax is a real-time 3D transform stage for 2D video layers.
//!
//! Given the per-frame image of a single layer inside a larger compositing
//! pipeline, Parallax positions it as a textured quad in 3D space (position,
//! rotation with a configurable axis order, non-uniform scale, shear),
//! projects it through an orthographic or perspective camera, and
//! re-rasterizes the result back to a 2D surface at the layer's native
//! resolution, optionally pre-filtering through a power-of-two mipmap chain
//! to avoid minification aliasing.
//!
//! # Pipeline overview
//!
//! 1. **Tick**: `TransformStage::tick` samples the upstream extent, rebuilds
//!    the quad mesh when parameters or extent changed, and resets the
//!    per-tick render flags.
//! 2. **Render**: `TransformStage::render` runs four GPU passes through a
//!    host-implemented [`StageBackend`] — capture the upstream layer,
//!    optionally rebuild the mipmap chain, rasterize the transformed quad,
//!    composite the result back to the host.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Frame-synchronous**: one tick and one or more render calls per output
//!   frame, invoked serially by the host; no internal threads.
//! - **Skip, don't fail**: transient upstream unavailability yields
//!   [`FrameStatus::Skipped`], never an error; the next tick retries.
//! - **Opaque GPU services**: render targets, textures, vertex upload and
//!   effect draws live behind [`StageBackend`]; this crate holds only
//!   handles.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod foundation;
mod render;
mod settings;
mod transform;

pub use foundation::core::{FrameStatus, SourceExtent};
pub use foundation::error::{ParallaxError, ParallaxResult};
pub use render::cache::{cache_extent, mip_level_count};
pub use render::passes::{
    BlendMode, CapturePass, CompositePass, EffectHandle, MipChainDesc, PixelFormat, StageBackend,
    StageSurface, SurfaceDesc, TextureHandle, TransformPass,
};
pub use render::stage::TransformStage;
pub use settings::keys;
pub use settings::migrate::{CURRENT_SCHEMA_VERSION, migrate, schema_version};
pub use settings::store::Settings;
pub use transform::camera::{FAR_Z, NEAR_Z, capture_projection, scene_projection};
pub use transform::mesh::{QuadMesh, Vertex, model_matrix};
pub use transform::params::{
    Axis, CameraMode, RotationOrder, TransformParameters, apply_defaults,
};
