pub mod clock;
pub mod drag;
pub mod shake;

pub use clock::TickClock;
pub use drag::{DragMode, DragRelease, DragSource, DragState, DragUpdate, GestureTracker, PointerKind};
pub use shake::{ShakeEffect, ShakeMachine};
