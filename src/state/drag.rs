// Unified drag gesture state shared by mouse, HTML5 drag-and-drop and touch.
use crate::catalog::DecorationKind;
use crate::geometry::{Percent, Point};
use crate::model::ObjectId;

/// Which device started the gesture. Only touch placements need a ghost and
/// document-level listeners; mouse placements ride on native drag-and-drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// What a gesture is carrying when it begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragSource {
    /// A palette tile; carries the decoration to create on drop.
    Palette(DecorationKind),
    /// An object already in the globe, with the pointer-to-object offset in
    /// percent measured at grab time.
    Object { id: ObjectId, grab_offset: Percent },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Placing { kind: DecorationKind, pointer: Point, input: PointerKind },
    Repositioning { id: ObjectId, grab_offset: Percent, input: PointerKind },
}

/// Coarse view of [`DragState`], used to decide which listeners to attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Idle,
    Placing(PointerKind),
    Repositioning(PointerKind),
}

/// Result of a move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Ignored,
    /// The placement ghost should follow the pointer.
    Tracked,
    /// Move object `id` so that it sits under `point` minus the grab offset.
    Move { id: ObjectId, grab_offset: Percent, point: Point },
}

/// Result of a release event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    Ignored,
    /// Test `point` against the globe and create `kind` there if it fits.
    Drop { kind: DecorationKind, point: Option<Point> },
    /// Reposition finished. A touch release that never moved is a tap, since
    /// touch gestures suppress the browser's synthetic click.
    Released { id: ObjectId, moved: bool, input: PointerKind },
}

/// Remembers whether the last reposition gesture moved, for a short while
/// after it ended, so the trailing click does not delete what was just dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickGuard {
    moved: bool,
    clear_in_ms: Option<f64>,
}

impl ClickGuard {
    pub fn blocks_click(&self) -> bool {
        self.moved
    }

    fn mark_moved(&mut self) {
        self.moved = true;
        self.clear_in_ms = None;
    }

    fn release(&mut self, delay_ms: f64) {
        if self.moved {
            self.clear_in_ms = Some(delay_ms);
        }
    }

    fn advance(&mut self, dt_ms: f64) {
        if let Some(left) = self.clear_in_ms {
            let left = left - dt_ms;
            if left <= 0.0 {
                *self = ClickGuard::default();
            } else {
                self.clear_in_ms = Some(left);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureTracker {
    pub state: DragState,
    pub click_guard: ClickGuard,
    click_guard_ms: f64,
}

impl GestureTracker {
    pub fn new(click_guard_ms: f64) -> Self {
        Self { state: DragState::Idle, click_guard: ClickGuard::default(), click_guard_ms }
    }

    pub fn mode(&self) -> DragMode {
        match self.state {
            DragState::Idle => DragMode::Idle,
            DragState::Placing { input, .. } => DragMode::Placing(input),
            DragState::Repositioning { input, .. } => DragMode::Repositioning(input),
        }
    }

    pub fn is_placing(&self) -> bool {
        matches!(self.state, DragState::Placing { .. })
    }

    pub fn dragged_object(&self) -> Option<ObjectId> {
        match self.state {
            DragState::Repositioning { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Starts a gesture. A new gesture replaces whatever was in progress, so
    /// at most one thing is ever being dragged.
    pub fn begin_drag(&mut self, source: DragSource, origin: Point, input: PointerKind) {
        self.state = match source {
            DragSource::Palette(kind) => DragState::Placing { kind, pointer: origin, input },
            DragSource::Object { id, grab_offset } => {
                self.click_guard = ClickGuard::default();
                DragState::Repositioning { id, grab_offset, input }
            }
        };
    }

    pub fn update_drag(&mut self, point: Point) -> DragUpdate {
        match &mut self.state {
            DragState::Idle => DragUpdate::Ignored,
            DragState::Placing { pointer, .. } => {
                *pointer = point;
                DragUpdate::Tracked
            }
            DragState::Repositioning { id, grab_offset, .. } => {
                let (id, grab_offset) = (*id, *grab_offset);
                self.click_guard.mark_moved();
                DragUpdate::Move { id, grab_offset, point }
            }
        }
    }

    pub fn end_drag(&mut self, point: Option<Point>) -> DragRelease {
        let released = match self.state {
            DragState::Idle => DragRelease::Ignored,
            DragState::Placing { kind, .. } => DragRelease::Drop { kind, point },
            DragState::Repositioning { id, input, .. } => {
                self.click_guard.release(self.click_guard_ms);
                DragRelease::Released { id, moved: self.click_guard.blocks_click(), input }
            }
        };
        self.state = DragState::Idle;
        released
    }

    /// Abandons the current gesture and forgets any pending click guard.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.click_guard = ClickGuard::default();
    }

    /// Abandons a placement only; a reposition in flight is left alone.
    pub fn cancel_placement(&mut self) {
        if self.is_placing() {
            self.state = DragState::Idle;
        }
    }

    /// A click on a placed object may delete it only when nothing is being
    /// dragged and the last drag did not move.
    pub fn allows_click_removal(&self) -> bool {
        matches!(self.state, DragState::Idle) && !self.click_guard.blocks_click()
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.click_guard.advance(dt_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> GestureTracker {
        GestureTracker::new(100.0)
    }

    fn grab(id: u64) -> DragSource {
        DragSource::Object { id: ObjectId(id), grab_offset: Percent::default() }
    }

    #[test]
    fn placement_carries_kind_to_release() {
        let mut t = tracker();
        t.begin_drag(DragSource::Palette(DecorationKind::Gift), Point::new(1.0, 1.0), PointerKind::Touch);
        assert_eq!(t.mode(), DragMode::Placing(PointerKind::Touch));
        assert_eq!(t.update_drag(Point::new(5.0, 6.0)), DragUpdate::Tracked);
        match t.state {
            DragState::Placing { pointer, .. } => assert_eq!(pointer, Point::new(5.0, 6.0)),
            other => panic!("unexpected {:?}", other),
        }
        let p = Some(Point::new(7.0, 8.0));
        assert_eq!(t.end_drag(p), DragRelease::Drop { kind: DecorationKind::Gift, point: p });
        assert_eq!(t.mode(), DragMode::Idle);
    }

    #[test]
    fn click_without_movement_allows_removal() {
        let mut t = tracker();
        t.begin_drag(grab(1), Point::default(), PointerKind::Mouse);
        assert!(!t.allows_click_removal());
        assert_eq!(t.end_drag(None), DragRelease::Released { id: ObjectId(1), moved: false, input: PointerKind::Mouse });
        assert!(t.allows_click_removal());
    }

    #[test]
    fn movement_blocks_the_trailing_click_then_expires() {
        let mut t = tracker();
        t.begin_drag(grab(2), Point::default(), PointerKind::Mouse);
        assert!(matches!(t.update_drag(Point::new(3.0, 3.0)), DragUpdate::Move { .. }));
        assert_eq!(t.end_drag(None), DragRelease::Released { id: ObjectId(2), moved: true, input: PointerKind::Mouse });
        assert!(!t.allows_click_removal());
        t.advance(50.0);
        assert!(!t.allows_click_removal());
        t.advance(50.0);
        assert!(t.allows_click_removal());
    }

    #[test]
    fn guard_does_not_expire_while_still_dragging() {
        let mut t = tracker();
        t.begin_drag(grab(3), Point::default(), PointerKind::Touch);
        t.update_drag(Point::new(1.0, 1.0));
        t.advance(1000.0);
        assert!(t.click_guard.blocks_click());
    }

    #[test]
    fn new_grab_resets_guard() {
        let mut t = tracker();
        t.begin_drag(grab(4), Point::default(), PointerKind::Mouse);
        t.update_drag(Point::new(1.0, 1.0));
        t.end_drag(None);
        t.begin_drag(grab(5), Point::default(), PointerKind::Mouse);
        t.end_drag(None);
        assert!(t.allows_click_removal());
    }

    #[test]
    fn updates_and_releases_while_idle_are_ignored() {
        let mut t = tracker();
        assert_eq!(t.update_drag(Point::default()), DragUpdate::Ignored);
        assert_eq!(t.end_drag(None), DragRelease::Ignored);
    }

    #[test]
    fn cancel_placement_leaves_reposition_alone() {
        let mut t = tracker();
        t.begin_drag(grab(6), Point::default(), PointerKind::Mouse);
        t.cancel_placement();
        assert_eq!(t.dragged_object(), Some(ObjectId(6)));
        t.cancel();
        assert_eq!(t.mode(), DragMode::Idle);
    }
}
