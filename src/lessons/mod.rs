//! The runnable tutorial scenes.
//!
//! Each lesson owns its GPU resources and exposes a small per-frame surface:
//! [`Lesson::update`] uploads uniforms for the frame, [`Lesson::draw`]
//! records draw calls into the pass the engine opened. Resources are freed
//! when the boxed lesson is dropped.

mod colored_cube;
mod free_fly;
mod mesh;
mod red_triangle;
mod rotating_triangle;

use std::fmt;

pub use colored_cube::ColoredCube;
pub use free_fly::FreeFly;
pub use red_triangle::RedTriangle;
pub use rotating_triangle::RotatingTriangle;
use serde::{Deserialize, Serialize};

use crate::camera::FrameInput;
use crate::gpu::RenderContext;
use crate::input::KeyAction;
use crate::options::Options;

/// Everything a lesson may read while updating one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Elapsed time, cursor offset and held keys for this frame.
    pub input: FrameInput,
    /// Seconds since the lesson started.
    pub elapsed_total: f32,
    /// Surface size in physical pixels.
    pub viewport: (u32, u32),
}

/// A self-contained scene driven by the engine.
pub trait Lesson {
    /// Human-readable name, used as the default window title.
    fn title(&self) -> &'static str;

    /// Background color the frame is cleared to.
    fn clear_color(&self) -> wgpu::Color;

    /// Whether the pass needs a depth attachment.
    fn uses_depth(&self) -> bool {
        false
    }

    /// Whether the OS cursor should be warped back to the viewport center
    /// after every frame.
    fn wants_cursor_recenter(&self) -> bool {
        false
    }

    /// Advance lesson state and upload this frame's uniforms.
    fn update(&mut self, frame: &FrameContext, queue: &wgpu::Queue);

    /// React to a discrete key action. Returns `true` if it was consumed.
    fn handle_action(&mut self, _action: KeyAction) -> bool {
        false
    }

    /// Record draw calls.
    fn draw(&self, pass: &mut wgpu::RenderPass<'_>);
}

/// Selects one of the lessons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[cfg_attr(feature = "binary", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LessonKind {
    /// A red triangle straight in clip space.
    RedTriangle,
    /// A blue triangle swinging about the Y axis.
    RotatingTriangle,
    /// A vertex-colored cube seen from a nudgeable eye.
    ColoredCube,
    /// The colored cube explored with the free-fly camera.
    #[default]
    FreeFly,
}

impl LessonKind {
    /// Every lesson, in tutorial order.
    pub const ALL: [Self; 4] = [
        Self::RedTriangle,
        Self::RotatingTriangle,
        Self::ColoredCube,
        Self::FreeFly,
    ];

    /// Kebab-case name, as accepted on the command line and in options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RedTriangle => "red-triangle",
            Self::RotatingTriangle => "rotating-triangle",
            Self::ColoredCube => "colored-cube",
            Self::FreeFly => "free-fly",
        }
    }

    /// Create the lesson's GPU resources.
    #[must_use]
    pub fn build(
        self,
        context: &RenderContext,
        options: &Options,
    ) -> Box<dyn Lesson> {
        log::info!("building lesson {self}");
        match self {
            Self::RedTriangle => Box::new(RedTriangle::new(context)),
            Self::RotatingTriangle => {
                Box::new(RotatingTriangle::new(context, &options.look_at))
            }
            Self::ColoredCube => {
                Box::new(ColoredCube::new(context, &options.look_at))
            }
            Self::FreeFly => Box::new(FreeFly::new(context, &options.camera)),
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dark blue background shared by the 3D lessons.
pub(crate) const NIGHT_BLUE: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.15,
    a: 0.5,
};
