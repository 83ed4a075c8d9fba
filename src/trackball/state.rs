//! Controller state and drag-axis classification.

use glam::Vec2;

/// Where the controller is in its gesture lifecycle.
///
/// Every transition in [`Trackball`](super::Trackball) matches on this enum
/// exhaustively, so there is no combination of flags that can drift out of
/// sync with the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer held and no momentum.
    #[default]
    Resting,
    /// No pointer held; spin keeps advancing under decaying velocity.
    CoastingSpin,
    /// Pointer held, axis not decided yet (or never decided when axes are
    /// unlocked).
    DraggingInit,
    /// Pointer held, drag locked to the spin axis.
    DraggingSpin,
    /// Pointer held, drag locked to the tilt axis.
    DraggingTilt,
}

impl DragState {
    /// Whether a pointer or contact is currently held.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(
            self,
            Self::DraggingInit | Self::DraggingSpin | Self::DraggingTilt
        )
    }

    /// Which axes a drag in this state contributes to.
    ///
    /// `lock_axes` only matters for [`DragState::DraggingInit`]: unlocked
    /// drags move both axes at once, locked ones contribute nothing until
    /// classified.
    #[must_use]
    pub const fn live_axes(self, lock_axes: bool) -> LiveAxes {
        match self {
            Self::Resting | Self::CoastingSpin => LiveAxes::NONE,
            Self::DraggingInit if lock_axes => LiveAxes::NONE,
            Self::DraggingInit => LiveAxes::BOTH,
            Self::DraggingSpin => LiveAxes::SPIN,
            Self::DraggingTilt => LiveAxes::TILT,
        }
    }
}

/// Pair of flags telling the angle query which drag components to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveAxes {
    /// Horizontal displacement drives spin.
    pub spin: bool,
    /// Vertical displacement drives tilt.
    pub tilt: bool,
}

impl LiveAxes {
    /// Neither axis.
    pub const NONE: Self = Self {
        spin: false,
        tilt: false,
    };
    /// Spin only.
    pub const SPIN: Self = Self {
        spin: true,
        tilt: false,
    };
    /// Tilt only.
    pub const TILT: Self = Self {
        spin: false,
        tilt: true,
    };
    /// Both axes.
    pub const BOTH: Self = Self {
        spin: true,
        tilt: true,
    };

    /// Drop axes the configuration forbids.
    #[must_use]
    pub const fn gated(self, allow_spin: bool, allow_tilt: bool) -> Self {
        Self {
            spin: self.spin && allow_spin,
            tilt: self.tilt && allow_tilt,
        }
    }
}

/// Decide which axis an undecided locked drag commits to.
///
/// `delta` is the displacement from the drag start in pixels. An axis is a
/// candidate once its component strictly exceeds `epsilon` and the
/// configuration allows it. When both cross in the same sample the larger
/// component wins, ties going to spin. Returns `None` while undecided.
#[must_use]
pub fn classify_drag(
    delta: Vec2,
    epsilon: f32,
    allow_spin: bool,
    allow_tilt: bool,
) -> Option<DragState> {
    let (dx, dy) = (delta.x.abs(), delta.y.abs());
    let spin = allow_spin && dx > epsilon;
    let tilt = allow_tilt && dy > epsilon;

    match (spin, tilt) {
        (true, true) if dy > dx => Some(DragState::DraggingTilt),
        (true, _) => Some(DragState::DraggingSpin),
        (false, true) => Some(DragState::DraggingTilt),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_stays_undecided() {
        assert_eq!(classify_drag(Vec2::new(3.0, -3.0), 3.0, true, true), None);
        assert_eq!(classify_drag(Vec2::ZERO, 3.0, true, true), None);
    }

    #[test]
    fn horizontal_motion_locks_spin() {
        assert_eq!(
            classify_drag(Vec2::new(10.0, 0.0), 3.0, true, true),
            Some(DragState::DraggingSpin)
        );
        assert_eq!(
            classify_drag(Vec2::new(-4.0, 1.0), 3.0, true, true),
            Some(DragState::DraggingSpin)
        );
    }

    #[test]
    fn vertical_motion_locks_tilt() {
        assert_eq!(
            classify_drag(Vec2::new(0.0, 10.0), 3.0, true, true),
            Some(DragState::DraggingTilt)
        );
    }

    #[test]
    fn simultaneous_crossing_prefers_dominant_axis() {
        assert_eq!(
            classify_drag(Vec2::new(5.0, 8.0), 3.0, true, true),
            Some(DragState::DraggingTilt)
        );
        assert_eq!(
            classify_drag(Vec2::new(6.0, 6.0), 3.0, true, true),
            Some(DragState::DraggingSpin)
        );
    }

    #[test]
    fn disallowed_axis_never_wins() {
        assert_eq!(
            classify_drag(Vec2::new(20.0, 5.0), 3.0, false, true),
            Some(DragState::DraggingTilt)
        );
        assert_eq!(classify_drag(Vec2::new(20.0, 1.0), 3.0, false, true), None);
        assert_eq!(
            classify_drag(Vec2::new(20.0, 20.0), 3.0, false, false),
            None
        );
    }

    #[test]
    fn live_axes_per_state() {
        assert_eq!(DragState::Resting.live_axes(false), LiveAxes::NONE);
        assert_eq!(DragState::CoastingSpin.live_axes(true), LiveAxes::NONE);
        assert_eq!(DragState::DraggingInit.live_axes(false), LiveAxes::BOTH);
        assert_eq!(DragState::DraggingInit.live_axes(true), LiveAxes::NONE);
        assert_eq!(DragState::DraggingSpin.live_axes(true), LiveAxes::SPIN);
        assert_eq!(DragState::DraggingTilt.live_axes(false), LiveAxes::TILT);
        assert_eq!(LiveAxes::BOTH.gated(false, true), LiveAxes::TILT);
    }
}
