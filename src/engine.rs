//! Per-frame driver shared by every lesson.
//!
//! [`LessonEngine`] owns the render context, the optional depth target, the
//! active lesson and the input processor. A host (the winit viewer, or any
//! other window loop) forwards events to [`LessonEngine::handle_input`] and
//! calls [`update`](LessonEngine::update) then
//! [`render`](LessonEngine::render) once per frame.

use crate::error::TutorialError;
use crate::gpu::{DepthTarget, RenderContext};
use crate::input::{InputEvent, InputProcessor, KeyAction};
use crate::lessons::{FrameContext, Lesson, LessonKind};
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Runs one lesson against a window surface.
pub struct LessonEngine {
    context: RenderContext,
    depth: Option<DepthTarget>,
    lesson: Box<dyn Lesson>,
    kind: LessonKind,
    input: InputProcessor,
    options: Options,
    elapsed_total: f32,
    /// Smoothed frame rate.
    pub frame_timing: FrameTiming,
}

impl LessonEngine {
    /// Create the GPU context for `window` and build the lesson.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::Gpu`] if the surface, adapter or device
    /// cannot be set up.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
        kind: LessonKind,
    ) -> Result<Self, TutorialError> {
        let context =
            RenderContext::new(window, size, options.window.vsync).await?;
        let lesson = kind.build(&context, &options);
        let depth = lesson.uses_depth().then(|| {
            DepthTarget::new(&context.device, context.width(), context.height())
        });
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());

        log::info!(
            "{} ready at {}x{}",
            lesson.title(),
            context.width(),
            context.height()
        );

        Ok(Self {
            context,
            depth,
            lesson,
            kind,
            input,
            options,
            elapsed_total: 0.0,
            frame_timing: FrameTiming::new(),
        })
    }

    /// Which lesson is running.
    #[must_use]
    pub const fn kind(&self) -> LessonKind {
        self.kind
    }

    /// Title of the running lesson.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.lesson.title()
    }

    /// Options the engine was started with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Current surface size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        (self.context.width(), self.context.height())
    }

    /// Resize the surface and depth target. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.context.resize(width, height) {
            return;
        }
        if let Some(depth) = &mut self.depth {
            depth.resize(&self.context.device, width, height);
        }
        log::info!("resized to {width}x{height}");
    }

    /// Feed one input event. Shift-eye actions go to the lesson; every
    /// triggered action (including [`KeyAction::Quit`]) is returned so the
    /// host can act on it.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<KeyAction> {
        let action = self.input.handle_event(event)?;
        if action != KeyAction::Quit && !self.lesson.handle_action(action) {
            log::debug!("{action:?} has no effect in {}", self.lesson.title());
        }
        Some(action)
    }

    /// Forget held keys, e.g. after focus loss swallowed the releases.
    pub fn release_keys(&mut self) {
        self.input.release_all();
    }

    /// Advance the lesson by `dt` seconds and upload its uniforms.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.elapsed_total += dt;
        self.frame_timing.record(dt);
        if self.frame_timing.frames() % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps", self.frame_timing.fps());
        }

        let (width, height) = self.viewport();
        let frame = FrameContext {
            input: self.input.frame_input(dt, width, height),
            elapsed_total: self.elapsed_total,
            viewport: (width, height),
        };
        self.lesson.update(&frame, &self.context.queue);
    }

    /// Clear, draw the lesson and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired. `Outdated` and `Lost` are fixed by calling
    /// [`resize`](Self::resize).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("lesson render pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(
                                    self.lesson.clear_color(),
                                ),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: self.depth.as_ref().map(
                        |depth| wgpu::RenderPassDepthStencilAttachment {
                            view: &depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });
            self.lesson.draw(&mut pass);
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Whether the host should warp the OS cursor to the viewport center
    /// after this frame.
    #[must_use]
    pub fn wants_cursor_recenter(&self) -> bool {
        self.lesson.wants_cursor_recenter()
    }

    /// Warp the OS cursor to the viewport center through `warp`, which
    /// receives the center in physical pixels. The tracked cursor is only
    /// marked as centered when the warp succeeds.
    ///
    /// # Errors
    ///
    /// Returns the error from `warp`.
    pub fn recenter_cursor<E>(
        &mut self,
        warp: impl FnOnce(u32, u32) -> Result<(), E>,
    ) -> Result<(), E> {
        let (width, height) = self.viewport();
        self.input.recenter_with(width, height, warp)
    }
}
