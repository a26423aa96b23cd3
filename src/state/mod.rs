pub mod orientation;
pub mod screen;
pub mod swipe;

pub use orientation::{
    MotionReading, OrientationReading, TiltKey, debug_tilt, fallback_active, fallback_motion,
    indicator_offset, normalize_rotation, remap_acceleration,
};
pub use screen::ScreenState;
pub use swipe::{SwipeThresholds, SwipeTracker};
