//! Cameras for the lessons.
//!
//! A free-fly camera driven by cursor offset and held keys, and a look-at
//! camera with a nudgeable eye.

/// Free-fly per-frame update.
pub mod controller;
/// Camera state, matrices and GPU uniform types.
pub mod core;
/// Fixed-target camera.
pub mod look_at;

pub use self::controller::{advance, FrameInput, HeldKeys, MoveDirection};
pub use self::core::{AspectMode, CameraState, MvpUniform, ViewProjection};
pub use self::look_at::LookAtCamera;
