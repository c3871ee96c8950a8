//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, the depth attachment,
//! uniform bindings and pipeline construction helpers.

/// Shared wgpu boilerplate helpers for lesson pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment texture.
pub mod texture;
/// Uniform buffer + bind group bundle.
pub mod uniform;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::DepthTarget;
pub use uniform::UniformBinding;
