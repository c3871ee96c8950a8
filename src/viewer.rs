//! Standalone lesson window backed by winit.
//!
//! ```no_run
//! # use tutorial3d::{LessonKind, Viewer};
//! Viewer::builder()
//!     .with_lesson(LessonKind::ColoredCube)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::LessonEngine, error::TutorialError, input::InputEvent,
    lessons::LessonKind, options::Options, util::frame_timing::FrameClock,
    KeyAction,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    lesson: Option<LessonKind>,
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the options' lesson.
    fn new() -> Self {
        Self {
            lesson: None,
            options: None,
            title: None,
        }
    }

    /// Pick the lesson to run, overriding `options.lesson`.
    #[must_use]
    pub fn with_lesson(mut self, lesson: LessonKind) -> Self {
        self.lesson = Some(lesson);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title. Without one the options title, then the
    /// lesson title, is used.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let options = self.options.unwrap_or_default();
        let lesson = self.lesson.unwrap_or(options.lesson);
        let title = self
            .title
            .or_else(|| options.window.title.clone())
            .unwrap_or_else(|| default_title(lesson));
        Viewer {
            lesson,
            options,
            title,
        }
    }
}

fn default_title(lesson: LessonKind) -> String {
    format!("tutorial3d: {lesson}")
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that runs one lesson until it is closed or Quit is pressed.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    lesson: LessonKind,
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// The lesson this viewer will run.
    #[must_use]
    pub const fn lesson(&self) -> LessonKind {
        self.lesson
    }

    /// The window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`TutorialError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), TutorialError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TutorialError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            clock: FrameClock::new(),
            focused: true,
            lesson: self.lesson,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TutorialError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<LessonEngine>,
    clock: FrameClock,
    /// Whether the window has keyboard focus. The cursor is never warped
    /// while unfocused.
    focused: bool,
    lesson: LessonKind,
    options: Options,
    title: String,
}

/// Surface size for a window size. Zero while minimized;
/// [`LessonEngine::resize`] skips those.
const fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width, inner.height)
}

/// Whether to warp the cursor to the center after a frame.
const fn recenter_due(focused: bool, lesson_wants: bool) -> bool {
    focused && lesson_wants
}

impl ViewerApp {
    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        if vp_w == 0 || vp_h == 0 {
            // Minimized: nothing to present into.
            self.clock.reset_tick();
            window.request_redraw();
            return;
        }

        engine.update(self.clock.tick());
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                engine.resize(vp_w, vp_h);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        if recenter_due(self.focused, engine.wants_cursor_recenter()) {
            warp_to_center(window, engine);
        }

        window.request_redraw();
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        if !focused {
            engine.release_keys();
        } else if engine.wants_cursor_recenter() {
            // Start from the center so the first delta after refocus is
            // not a jump.
            warp_to_center(window, engine);
        }
    }
}

/// Warp the OS cursor to the viewport center. The engine only treats the
/// cursor as centered when the platform accepted the warp.
fn warp_to_center(window: &Window, engine: &mut LessonEngine) {
    let result = engine.recenter_cursor(|cx, cy| {
        window.set_cursor_position(PhysicalPosition::new(
            f64::from(cx),
            f64::from(cy),
        ))
    });
    if let Err(e) = result {
        log::debug!("cannot warp cursor: {e}");
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let engine = match pollster::block_on(LessonEngine::new(
            window.clone(),
            (vp_w, vp_h),
            self.options.clone(),
            self.lesson,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.clock.reset_tick();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::Focused(focused) => self.set_focus(focused),

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_input(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let Some(input) = InputEvent::from_winit_key(&event) else {
                    return;
                };
                let action =
                    self.engine.as_mut().and_then(|e| e.handle_input(input));
                if action == Some(KeyAction::Quit) {
                    log::info!("quit requested");
                    event_loop.exit();
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_only_warped_while_focused() {
        assert!(recenter_due(true, true));
        assert!(!recenter_due(false, true));
        assert!(!recenter_due(true, false));
    }

    #[test]
    fn minimized_window_reports_zero_viewport() {
        assert_eq!(viewport_size(PhysicalSize::new(0, 0)), (0, 0));
        assert_eq!(viewport_size(PhysicalSize::new(800, 600)), (800, 600));
    }

    #[test]
    fn builder_defaults_to_options_lesson_and_lesson_title() {
        let mut options = Options::default();
        options.lesson = LessonKind::RotatingTriangle;
        let viewer = Viewer::builder().with_options(options).build();
        assert_eq!(viewer.lesson(), LessonKind::RotatingTriangle);
        assert_eq!(viewer.title(), "tutorial3d: rotating-triangle");
    }

    #[test]
    fn explicit_lesson_and_title_win() {
        let mut options = Options::default();
        options.window.title = Some("from options".into());
        let viewer = Viewer::builder()
            .with_options(options.clone())
            .with_lesson(LessonKind::RedTriangle)
            .build();
        assert_eq!(viewer.lesson(), LessonKind::RedTriangle);
        assert_eq!(viewer.title(), "from options");

        let viewer = Viewer::builder()
            .with_options(options)
            .with_title("Tutorial 2")
            .build();
        assert_eq!(viewer.title(), "Tutorial 2");
    }
}
