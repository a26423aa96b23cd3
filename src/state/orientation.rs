//! Orientation and motion normalization.
//!
//! Raw `deviceorientation` / `devicemotion` readings are expressed in the
//! device's natural frame. Everything here maps them onto the axes of the
//! screen as the user currently sees it.

use crate::model::{Acceleration, Rotation};
use crate::state::screen::{ScreenAngle, ScreenMode, ScreenState};

/// Tilt limit for beta/gamma in the keyboard fallback.
pub const MAX_TILT: f64 = 90.0;

/// A raw orientation event. Browsers report `null` for axes they cannot measure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationReading {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub absolute: Option<bool>,
}

impl OrientationReading {
    /// False for the all-null event desktop browsers emit once on subscribe.
    pub fn has_data(&self) -> bool {
        self.alpha.is_some() || self.beta.is_some() || self.gamma.is_some()
    }
}

impl From<&web_sys::DeviceOrientationEvent> for OrientationReading {
    fn from(e: &web_sys::DeviceOrientationEvent) -> Self {
        Self {
            alpha: e.alpha(),
            beta: e.beta(),
            gamma: e.gamma(),
            absolute: Some(e.absolute()),
        }
    }
}

/// `accelerationIncludingGravity` of a motion event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionReading {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl MotionReading {
    pub fn from_event(e: &web_sys::DeviceMotionEvent) -> Option<Self> {
        let a = e.acceleration_including_gravity()?;
        Some(Self {
            x: a.x(),
            y: a.y(),
            z: a.z(),
        })
    }
}

/// Rotates the (beta, gamma) tilt pair into screen axes.
pub fn remap_tilt(beta: f64, gamma: f64, angle: ScreenAngle) -> (f64, f64) {
    match angle {
        ScreenAngle::Deg0 => (beta, gamma),
        ScreenAngle::Deg90 => (gamma, -beta),
        ScreenAngle::Deg180 => (-beta, -gamma),
        ScreenAngle::Deg270 => (-gamma, beta),
    }
}

/// Screen-relative rotation for a raw reading. Missing axes read as 0.
///
/// Only the screen angle drives the remap; portrait and landscape at the
/// same angle produce the same result.
pub fn normalize_rotation(reading: OrientationReading, screen: ScreenState) -> Rotation {
    let alpha = reading.alpha.unwrap_or(0.0);
    let (beta, gamma) = remap_tilt(
        reading.beta.unwrap_or(0.0),
        reading.gamma.unwrap_or(0.0),
        screen.angle,
    );
    Rotation {
        alpha,
        beta,
        gamma,
        absolute: reading.absolute.unwrap_or(false),
    }
}

/// Screen-relative acceleration, or `None` when any axis is missing so the
/// caller keeps its previous value.
pub fn remap_acceleration(reading: Option<MotionReading>, mode: ScreenMode) -> Option<Acceleration> {
    let r = reading?;
    let (x, y, z) = (r.x?, r.y?, r.z?);
    Some(match mode {
        ScreenMode::Portrait => Acceleration { x, y, z },
        ScreenMode::Landscape => Acceleration { x: y, y: -x, z },
    })
}

/// Offset of the tilt indicator from its centre, in units of `radius`.
///
/// `rotation` is already screen-relative (sensor readings went through
/// `normalize_rotation`, keyboard tilt is entered in screen terms), so no
/// further flip is applied here. Tilts past 90° pin to the rim.
pub fn indicator_offset(rotation: Rotation, radius: f64) -> (f64, f64) {
    let x = (rotation.gamma / MAX_TILT).clamp(-1.0, 1.0) * radius;
    let y = (rotation.beta / MAX_TILT).clamp(-1.0, 1.0) * radius;
    (x, y)
}

/// Keep the keyboard/mouse stand-ins running until the sensor has actually
/// delivered data; some desktop browsers expose the event type but never fire it.
pub fn fallback_active(sensor_available: bool, sensor_seen: bool) -> bool {
    !(sensor_available && sensor_seen)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltKey {
    Up,
    Down,
    Left,
    Right,
}

impl TiltKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(TiltKey::Up),
            "ArrowDown" => Some(TiltKey::Down),
            "ArrowLeft" => Some(TiltKey::Left),
            "ArrowRight" => Some(TiltKey::Right),
            _ => None,
        }
    }
}

/// Keyboard stand-in for an orientation sensor.
///
/// Up/Down tilt gamma, or beta while ctrl is held. Left/Right turn alpha.
pub fn debug_tilt(current: Rotation, key: TiltKey, ctrl: bool, step: f64) -> Rotation {
    let mut r = current;
    match (key, ctrl) {
        (TiltKey::Up, true) => r.beta -= step,
        (TiltKey::Up, false) => r.gamma -= step,
        (TiltKey::Down, true) => r.beta += step,
        (TiltKey::Down, false) => r.gamma += step,
        (TiltKey::Left, _) => r.alpha -= step,
        (TiltKey::Right, _) => r.alpha += step,
    }
    r.beta = r.beta.clamp(-MAX_TILT, MAX_TILT);
    r.gamma = r.gamma.clamp(-MAX_TILT, MAX_TILT);
    r.alpha = r.alpha.rem_euclid(360.0);
    r
}

/// Mouse stand-in for a motion sensor: pointer movement scaled into x/y.
pub fn fallback_motion(movement_x: f64, movement_y: f64, sensitivity: f64) -> Acceleration {
    Acceleration {
        x: movement_x * sensitivity,
        y: movement_y * sensitivity,
        z: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANGLES: [ScreenAngle; 4] = [
        ScreenAngle::Deg0,
        ScreenAngle::Deg90,
        ScreenAngle::Deg180,
        ScreenAngle::Deg270,
    ];

    fn reading(alpha: f64, beta: f64, gamma: f64) -> OrientationReading {
        OrientationReading {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
            absolute: Some(true),
        }
    }

    #[test]
    fn upright_screen_is_identity() {
        assert_eq!(remap_tilt(12.5, -30.0, ScreenAngle::Deg0), (12.5, -30.0));
    }

    #[test]
    fn upside_down_is_self_inverse() {
        for (b, g) in [(10.0, 20.0), (-45.0, 3.5), (0.0, -90.0)] {
            let (b1, g1) = remap_tilt(b, g, ScreenAngle::Deg180);
            assert_eq!(remap_tilt(b1, g1, ScreenAngle::Deg180), (b, g));
        }
    }

    #[test]
    fn quarter_turns_undo_each_other() {
        let (b, g) = remap_tilt(10.0, 20.0, ScreenAngle::Deg90);
        assert_eq!((b, g), (20.0, -10.0));
        assert_eq!(remap_tilt(b, g, ScreenAngle::Deg270), (10.0, 20.0));
        assert_eq!(remap_tilt(10.0, 20.0, ScreenAngle::Deg270), (-20.0, 10.0));
    }

    #[test]
    fn four_quarter_turns_return_home() {
        let mut bg = (7.0, -3.0);
        for _ in 0..4 {
            bg = remap_tilt(bg.0, bg.1, ScreenAngle::Deg90);
        }
        assert_eq!(bg, (7.0, -3.0));
    }

    #[test]
    fn alpha_passes_through_every_angle() {
        for angle in ANGLES {
            for mode in [ScreenMode::Portrait, ScreenMode::Landscape] {
                let r = normalize_rotation(reading(123.0, 1.0, 2.0), ScreenState::new(angle, mode));
                assert_eq!(r.alpha, 123.0);
                assert!(r.absolute);
            }
        }
    }

    #[test]
    fn mode_does_not_change_tilt_remap() {
        let p = normalize_rotation(
            reading(0.0, 15.0, -5.0),
            ScreenState::new(ScreenAngle::Deg90, ScreenMode::Portrait),
        );
        let l = normalize_rotation(
            reading(0.0, 15.0, -5.0),
            ScreenState::new(ScreenAngle::Deg90, ScreenMode::Landscape),
        );
        assert_eq!(p, l);
        assert_eq!((p.beta, p.gamma), (-5.0, -15.0));
    }

    #[test]
    fn missing_orientation_fields_read_as_zero() {
        let r = normalize_rotation(OrientationReading::default(), ScreenState::default());
        assert_eq!(r, Rotation::default());
    }

    #[test]
    fn landscape_acceleration_swaps_axes() {
        let r = MotionReading {
            x: Some(1.0),
            y: Some(2.0),
            z: Some(3.0),
        };
        assert_eq!(
            remap_acceleration(Some(r), ScreenMode::Landscape),
            Some(Acceleration { x: 2.0, y: -1.0, z: 3.0 })
        );
        assert_eq!(
            remap_acceleration(Some(r), ScreenMode::Portrait),
            Some(Acceleration { x: 1.0, y: 2.0, z: 3.0 })
        );
    }

    #[test]
    fn missing_motion_reading_skips_update() {
        assert_eq!(remap_acceleration(None, ScreenMode::Portrait), None);
        let partial = MotionReading {
            x: Some(1.0),
            y: None,
            z: Some(3.0),
        };
        assert_eq!(remap_acceleration(Some(partial), ScreenMode::Landscape), None);
    }

    #[test]
    fn tilt_clamps_at_both_limits() {
        let mut r = Rotation::default();
        for _ in 0..40 {
            r = debug_tilt(r, TiltKey::Up, true, 5.0);
        }
        assert_eq!(r.beta, -90.0);
        for _ in 0..80 {
            r = debug_tilt(r, TiltKey::Down, true, 5.0);
        }
        assert_eq!(r.beta, 90.0);
        for _ in 0..40 {
            r = debug_tilt(r, TiltKey::Down, false, 7.0);
        }
        assert_eq!(r.gamma, 90.0);
    }

    #[test]
    fn ctrl_selects_beta_over_gamma() {
        let r = debug_tilt(Rotation::default(), TiltKey::Up, false, 10.0);
        assert_eq!((r.beta, r.gamma), (0.0, -10.0));
        let r = debug_tilt(Rotation::default(), TiltKey::Up, true, 10.0);
        assert_eq!((r.beta, r.gamma), (-10.0, 0.0));
    }

    #[test]
    fn alpha_wraps_into_full_circle() {
        let r = Rotation {
            alpha: 350.0,
            ..Default::default()
        };
        assert_eq!(debug_tilt(r, TiltKey::Right, false, 20.0).alpha, 10.0);
        let r = Rotation {
            alpha: 5.0,
            ..Default::default()
        };
        assert_eq!(debug_tilt(r, TiltKey::Left, false, 20.0).alpha, 345.0);
    }

    #[test]
    fn debug_tilt_keeps_absolute_flag() {
        let r = Rotation {
            absolute: true,
            ..Default::default()
        };
        assert!(debug_tilt(r, TiltKey::Left, true, 1.0).absolute);
    }

    #[test]
    fn arrow_keys_only() {
        assert_eq!(TiltKey::from_key("ArrowLeft"), Some(TiltKey::Left));
        assert_eq!(TiltKey::from_key("a"), None);
    }

    #[test]
    fn indicator_follows_screen_tilt_at_any_angle() {
        // Right edge lowered 30° as seen on screen, upright and upside down
        let upright = normalize_rotation(
            reading(0.0, 0.0, 30.0),
            ScreenState::new(ScreenAngle::Deg0, ScreenMode::Portrait),
        );
        let flipped = normalize_rotation(
            reading(0.0, 0.0, -30.0),
            ScreenState::new(ScreenAngle::Deg180, ScreenMode::Portrait),
        );
        assert_eq!(indicator_offset(upright, 60.0), indicator_offset(flipped, 60.0));
        assert!(indicator_offset(upright, 60.0).0 > 0.0);
    }

    #[test]
    fn indicator_agrees_between_landscape_sides() {
        // Same screen-relative forward tilt in both landscape orientations
        let left = normalize_rotation(
            reading(0.0, 0.0, 20.0),
            ScreenState::new(ScreenAngle::Deg90, ScreenMode::Landscape),
        );
        let right = normalize_rotation(
            reading(0.0, 0.0, -20.0),
            ScreenState::new(ScreenAngle::Deg270, ScreenMode::Landscape),
        );
        assert_eq!(indicator_offset(left, 60.0), indicator_offset(right, 60.0));
    }

    #[test]
    fn indicator_pins_to_rim() {
        let r = Rotation {
            beta: -180.0,
            gamma: 45.0,
            ..Default::default()
        };
        assert_eq!(indicator_offset(r, 60.0), (30.0, -60.0));
    }

    #[test]
    fn fallback_stays_until_sensor_delivers() {
        assert!(fallback_active(false, false));
        assert!(fallback_active(true, false));
        assert!(!fallback_active(true, true));
    }

    #[test]
    fn all_null_reading_has_no_data() {
        assert!(!OrientationReading::default().has_data());
        let r = OrientationReading {
            beta: Some(0.0),
            ..Default::default()
        };
        assert!(r.has_data());
    }

    #[test]
    fn mouse_motion_is_scaled() {
        let a = fallback_motion(100.0, -50.0, 0.01);
        assert_eq!(a, Acceleration { x: 1.0, y: -0.5, z: 0.0 });
    }
}
