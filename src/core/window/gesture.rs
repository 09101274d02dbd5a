use std::sync::Mutex;

/// Smallest size the resize handle can shrink the widget to (logical px)
pub const MIN_WIDTH: f64 = 200.0;
pub const MIN_HEIGHT: f64 = 150.0;

/// Anchor recorded when a title-bar drag starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveGesture {
    /// Pointer offset within the title bar at drag start
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl MoveGesture {
    pub fn begin(anchor_x: f64, anchor_y: f64) -> Self {
        Self { anchor_x, anchor_y }
    }

    /// New window origin for a pointer at the given screen position
    pub fn origin_for(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (screen_x - self.anchor_x, screen_y - self.anchor_y)
    }
}

/// Anchor and starting size recorded when a corner resize starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    /// Pointer screen position at drag start
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Window size at drag start
    pub start_width: f64,
    pub start_height: f64,
}

impl ResizeGesture {
    pub fn begin(anchor_x: f64, anchor_y: f64, start_width: f64, start_height: f64) -> Self {
        Self {
            anchor_x,
            anchor_y,
            start_width,
            start_height,
        }
    }

    /// New window size for a pointer at the given screen position, clamped
    /// to the minimum widget size. The origin is not touched by a resize.
    pub fn size_for(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        let width = (self.start_width + screen_x - self.anchor_x).max(MIN_WIDTH);
        let height = (self.start_height + screen_y - self.anchor_y).max(MIN_HEIGHT);
        (width, height)
    }
}

/// The gesture currently in flight, if any
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetGesture {
    /// Moving the widget via the title bar
    Move(MoveGesture),
    /// Resizing the widget via the corner handle
    Resize(ResizeGesture),
}

/// Managed record of the drag or resize in progress.
///
/// Written by the pointer-down and pointer-up commands, read on every
/// motion command. Motion with no gesture recorded is a no-op, so a stale
/// or missing anchor can never move the window.
#[derive(Default)]
pub struct GestureState {
    current: Mutex<Option<WidgetGesture>>,
}

impl GestureState {
    /// Record a new gesture, replacing any previous anchor
    pub fn begin(&self, gesture: WidgetGesture) {
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = Some(gesture);
    }

    /// Clear the anchor on pointer release
    pub fn end(&self) {
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = None;
    }

    /// Copy of the gesture in flight
    pub fn current(&self) -> Option<WidgetGesture> {
        match self.current.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_origin_is_screen_minus_anchor() {
        let gesture = MoveGesture::begin(12.0, 7.0);
        assert_eq!(gesture.origin_for(112.0, 207.0), (100.0, 200.0));
    }

    #[test]
    fn test_move_tracks_every_motion_event() {
        let gesture = MoveGesture::begin(5.0, 5.0);
        assert_eq!(gesture.origin_for(5.0, 5.0), (0.0, 0.0));
        assert_eq!(gesture.origin_for(305.0, 105.0), (300.0, 100.0));
        assert_eq!(gesture.origin_for(-5.0, -5.0), (-10.0, -10.0));
    }

    #[test]
    fn test_resize_applies_pointer_delta() {
        let gesture = ResizeGesture::begin(400.0, 300.0, 300.0, 200.0);
        assert_eq!(gesture.size_for(450.0, 330.0), (350.0, 230.0));
    }

    #[test]
    fn test_resize_clamps_to_minimum_size() {
        let gesture = ResizeGesture::begin(400.0, 300.0, 300.0, 200.0);

        // Shrinking past the minimum stops at 200x150
        assert_eq!(gesture.size_for(280.0, 230.0), (MIN_WIDTH, 180.0));
        assert_eq!(gesture.size_for(280.0, 200.0), (MIN_WIDTH, MIN_HEIGHT));

        // A large negative delta never goes below the minimum
        assert_eq!(gesture.size_for(-10_000.0, -10_000.0), (MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_resize_has_no_maximum() {
        let gesture = ResizeGesture::begin(0.0, 0.0, 300.0, 200.0);
        assert_eq!(gesture.size_for(10_000.0, 10_000.0), (10_300.0, 10_200.0));
    }

    #[test]
    fn test_gesture_state_round_trip() {
        let state = GestureState::default();
        assert_eq!(state.current(), None);

        state.begin(WidgetGesture::Move(MoveGesture::begin(1.0, 2.0)));
        assert_eq!(
            state.current(),
            Some(WidgetGesture::Move(MoveGesture::begin(1.0, 2.0)))
        );

        state.end();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_release_disarms_later_motion() {
        // A drag that ended must leave nothing behind: motion arriving
        // later (e.g. a button-held pass over the widget) finds no anchor
        // and so cannot move the window.
        let state = GestureState::default();

        state.begin(WidgetGesture::Move(MoveGesture::begin(3.0, 4.0)));
        state.end();

        assert_eq!(state.current(), None);
        state.end(); // releasing again stays a no-op
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_new_gesture_overwrites_stale_anchor() {
        let state = GestureState::default();

        state.begin(WidgetGesture::Move(MoveGesture::begin(1.0, 1.0)));
        state.begin(WidgetGesture::Resize(ResizeGesture::begin(
            9.0, 9.0, 300.0, 200.0,
        )));

        match state.current() {
            Some(WidgetGesture::Resize(gesture)) => {
                assert_eq!(gesture.start_width, 300.0);
            }
            other => panic!("expected resize gesture, got {:?}", other),
        }
    }
}
