//! Core data models for the sensor playground.
//! Sensor values, permission flags and the session reducer that replaces
//! page-global lock/auth state.

use std::rc::Rc;
use yew::Reducible;

/// Device attitude in screen-relative axes, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Compass heading, [0, 360).
    pub alpha: f64,
    /// Front-back tilt.
    pub beta: f64,
    /// Left-right tilt.
    pub gamma: f64,
    pub absolute: bool,
}

/// Linear acceleration including gravity, in m/s².
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Acceleration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permission {
    /// Has the capability been checked at all?
    pub is_checked: bool,
    pub available: bool,
}

impl Permission {
    pub fn checked(available: bool) -> Self {
        Self {
            is_checked: true,
            available,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Orientation,
    Motion,
}

impl SensorKind {
    /// Name of the event constructor on `window`.
    pub fn constructor_name(self) -> &'static str {
        match self {
            SensorKind::Orientation => "DeviceOrientationEvent",
            SensorKind::Motion => "DeviceMotionEvent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Held by the root layout until it has mounted.
    pub layout_lock: bool,
    /// Held by the current page until its content is ready.
    pub page_lock: bool,
    pub easy_password: String,
    pub easy_authenticated: bool,
    pub orientation: Permission,
    pub motion: Permission,
}

impl SessionState {
    pub fn new(easy_password: impl Into<String>) -> Self {
        Self {
            layout_lock: true,
            page_lock: true,
            easy_password: easy_password.into(),
            easy_authenticated: false,
            orientation: Permission::default(),
            motion: Permission::default(),
        }
    }

    pub fn lock_status(&self) -> bool {
        self.layout_lock || self.page_lock
    }

    pub fn permission(&self, kind: SensorKind) -> Permission {
        match kind {
            SensorKind::Orientation => self.orientation,
            SensorKind::Motion => self.motion,
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum SessionAction {
    SetPageLock(bool),
    SetLayoutLock(bool),
    Unlock,
    SubmitPassword(String),
    SetPermission { kind: SensorKind, available: bool },
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            SetPageLock(b) => new.page_lock = b,
            SetLayoutLock(b) => new.layout_lock = b,
            Unlock => {
                new.layout_lock = false;
                new.page_lock = false;
            }
            SubmitPassword(attempt) => {
                new.easy_authenticated = attempt == new.easy_password;
            }
            SetPermission { kind, available } => match kind {
                SensorKind::Orientation => new.orientation = Permission::checked(available),
                SensorKind::Motion => new.motion = Permission::checked(available),
            },
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(s: SessionState, a: SessionAction) -> SessionState {
        (*Rc::new(s).reduce(a)).clone()
    }

    #[test]
    fn session_starts_locked_and_unauthenticated() {
        let s = SessionState::new("password");
        assert!(s.lock_status());
        assert!(!s.easy_authenticated);
        assert_eq!(s.orientation, Permission::default());
        assert!(!s.motion.is_checked);
    }

    #[test]
    fn lock_status_holds_while_either_lock_is_set() {
        let s = reduce(SessionState::new("pw"), SessionAction::SetLayoutLock(false));
        assert!(s.lock_status());
        let s = reduce(s, SessionAction::SetPageLock(false));
        assert!(!s.lock_status());
        let s = reduce(s, SessionAction::SetPageLock(true));
        assert!(s.lock_status());
    }

    #[test]
    fn unlock_clears_both_flags() {
        let s = reduce(SessionState::new("pw"), SessionAction::Unlock);
        assert!(!s.layout_lock);
        assert!(!s.page_lock);
    }

    #[test]
    fn wrong_password_revokes_previous_success() {
        let s = reduce(
            SessionState::new("open sesame"),
            SessionAction::SubmitPassword("open sesame".into()),
        );
        assert!(s.easy_authenticated);
        let s = reduce(s, SessionAction::SubmitPassword("nope".into()));
        assert!(!s.easy_authenticated);
    }

    #[test]
    fn recording_permission_marks_checked() {
        let s = reduce(
            SessionState::new("pw"),
            SessionAction::SetPermission {
                kind: SensorKind::Motion,
                available: false,
            },
        );
        assert_eq!(s.permission(SensorKind::Motion), Permission::checked(false));
        assert!(s.motion.is_checked);
        assert!(!s.orientation.is_checked);
    }
}
