//! Standalone demo window backed by winit.
//!
//! The window does no rendering; it forwards pointer and touch input to a
//! [`Trackball`](crate::Trackball), advances it once per redraw, and shows
//! the live spin/tilt in the title bar. `R` resets to the home orientation,
//! `Escape` closes the window.
//!
//! ```no_run
//! # use trackball::Viewer;
//! Viewer::builder()
//!     .with_title("Trackball")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    error::TrackballError, options::TrackballOptions, trackball::AutoTick,
    InputEvent, InputProcessor,
};

/// Tick length used when the options turn `auto_tick` off and the viewer
/// steps the controller itself.
const FIXED_FRAME_MS: f32 = 1000.0 / 60.0;
/// How often the title bar is refreshed.
const TITLE_INTERVAL: Duration = Duration::from_millis(100);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
#[derive(Debug)]
pub struct ViewerBuilder {
    options: Option<TrackballOptions>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Trackball", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Trackball".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: TrackballOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driven by a trackball.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
#[derive(Debug)]
pub struct Viewer {
    options: TrackballOptions,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), TrackballError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TrackballError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            driver: AutoTick::new(self.options),
            input: InputProcessor::new(),
            title: self.title,
            last_title_update: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TrackballError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    driver: AutoTick,
    input: InputProcessor,
    title: String,
    last_title_update: Instant,
}

impl ViewerApp {
    /// Advance the controller for one redraw.
    fn frame(&mut self) {
        self.driver.on_frame();
        if !self.driver.trackball().options().auto_tick {
            self.driver.trackball_mut().tick(FIXED_FRAME_MS);
        }

        let now = Instant::now();
        if now.duration_since(self.last_title_update) < TITLE_INTERVAL {
            return;
        }
        self.last_title_update = now;

        if let Some(window) = &self.window {
            let trackball = self.driver.trackball();
            let (spin, tilt) = trackball.angles();
            window.set_title(&format!(
                "{} | spin {spin:+.3} tilt {tilt:+.3} | {:?} | {:.0} fps",
                self.title,
                trackball.state(),
                self.driver.fps(),
            ));
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::KeyR => {
                log::info!("Resetting trackball");
                self.driver.trackball_mut().reset();
            }
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            self.driver.resume();
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.driver.resume();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Focused(false) => {
                self.input.cancel(self.driver.trackball_mut());
                return;
            }
            _ => {}
        }

        if let Some(input) = InputEvent::from_window_event(&event) {
            let _ = self
                .input
                .handle_event(self.driver.trackball_mut(), input);
            return;
        }

        match event {
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(event_loop, code);
                    }
                }
            }

            _ => (),
        }
    }
}
