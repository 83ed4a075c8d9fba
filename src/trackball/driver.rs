//! Frame-clock convenience wrapper around [`Trackball`].
//!
//! Hosts that render on their own schedule can call
//! [`Trackball::tick`] themselves. Hosts that just want "advance once per
//! redraw" wrap the controller in [`AutoTick`] and call
//! [`AutoTick::on_frame`] from their redraw handler.

use glam::Vec2;

use super::Trackball;
use crate::options::TrackballOptions;
use crate::util::frame_timing::FrameTiming;

/// A [`Trackball`] paired with the clock that feeds its ticks.
#[derive(Debug, Clone)]
pub struct AutoTick {
    trackball: Trackball,
    timing: FrameTiming,
}

impl AutoTick {
    /// Build a controller from `options` and start its clock.
    #[must_use]
    pub fn new(options: TrackballOptions) -> Self {
        Self {
            trackball: Trackball::new(options),
            timing: FrameTiming::new(),
        }
    }

    /// The wrapped controller.
    #[must_use]
    pub fn trackball(&self) -> &Trackball {
        &self.trackball
    }

    /// Mutable access for gesture forwarding.
    pub fn trackball_mut(&mut self) -> &mut Trackball {
        &mut self.trackball
    }

    /// Smoothed frame rate of the driving loop.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Advance the controller by the wall-clock time since the last frame
    /// (milliseconds). Read the rotation to render with from
    /// [`Trackball::matrix`] afterwards.
    ///
    /// With `auto_tick` disabled the clock still runs but the controller is
    /// left alone; the host is then responsible for calling
    /// [`Trackball::tick`].
    pub fn on_frame(&mut self) {
        let dt = self.timing.end_frame();
        if self.trackball.options().auto_tick {
            self.trackball.tick(dt.as_secs_f32() * 1000.0);
        }
    }

    /// Forget time spent while the host was not rendering (window hidden,
    /// app suspended).
    pub fn resume(&mut self) {
        self.timing.restart();
    }

    /// Pointer went down; see [`Trackball::start_drag`].
    pub fn start_drag(&mut self, position: Vec2) {
        self.trackball.start_drag(position);
    }

    /// Pointer moved; see [`Trackball::update_drag`].
    pub fn update_drag(&mut self, position: Vec2) {
        self.trackball.update_drag(position);
    }

    /// Pointer released; see [`Trackball::end_drag`].
    pub fn end_drag(&mut self, position: Vec2) {
        self.trackball.end_drag(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackball::DragState;

    #[test]
    fn on_frame_advances_coasting_spin() {
        let mut driver = AutoTick::new(TrackballOptions {
            friction: 0.0,
            ..TrackballOptions::default()
        });
        std::thread::sleep(std::time::Duration::from_millis(5));
        driver.on_frame();

        let (spin, _) = driver.trackball().angles();
        assert!(spin > 0.0);
        assert_eq!(driver.trackball().state(), DragState::CoastingSpin);
    }

    #[test]
    fn manual_mode_leaves_ticking_to_the_host() {
        let mut driver = AutoTick::new(TrackballOptions {
            auto_tick: false,
            ..TrackballOptions::default()
        });
        std::thread::sleep(std::time::Duration::from_millis(5));
        let before = driver.trackball().matrix();
        driver.on_frame();

        assert_eq!(driver.trackball().angles(), (0.0, 0.25));
        assert!(before.abs_diff_eq(driver.trackball().matrix(), 1e-6));

        driver.trackball_mut().tick(10.0);
        assert!(driver.trackball().angles().0 > 0.0);
    }

    #[test]
    fn gestures_forward_to_the_controller() {
        let mut driver = AutoTick::new(TrackballOptions {
            auto_tick: false,
            start_spin: 0.0,
            ..TrackballOptions::default()
        });
        driver.start_drag(Vec2::ZERO);
        driver.update_drag(Vec2::new(10.0, 0.0));
        assert!(driver.trackball().is_dragging());
        driver.end_drag(Vec2::new(10.0, 0.0));
        assert_eq!(driver.trackball().state(), DragState::CoastingSpin);
    }
}
