/// Capture-surface sizing policy and mip level counts.
pub(crate) mod cache;
/// Pass descriptors and the backend trait the host GPU layer implements.
pub(crate) mod passes;
/// The transform stage: state, per-tick scheduling and the render pipeline.
pub(crate) mod stage;
