// Screen orientation as reported by the browser
use web_sys::OrientationType;

/// Screen rotation, restricted to the four right angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenAngle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl ScreenAngle {
    /// Accepts -90 as 270. Any non-right angle maps to `Deg0`.
    pub fn from_degrees(deg: i32) -> Self {
        match deg.rem_euclid(360) {
            90 => ScreenAngle::Deg90,
            180 => ScreenAngle::Deg180,
            270 => ScreenAngle::Deg270,
            _ => ScreenAngle::Deg0,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            ScreenAngle::Deg0 => 0,
            ScreenAngle::Deg90 => 90,
            ScreenAngle::Deg180 => 180,
            ScreenAngle::Deg270 => 270,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenMode {
    #[default]
    Portrait,
    Landscape,
}

impl ScreenMode {
    /// Portrait if the orientation type says so, or if the viewport is taller than wide.
    pub fn detect(kind: Option<OrientationType>, width: f64, height: f64) -> Self {
        let portrait_type = matches!(
            kind,
            Some(OrientationType::PortraitPrimary | OrientationType::PortraitSecondary)
        );
        if portrait_type || width < height {
            ScreenMode::Portrait
        } else {
            ScreenMode::Landscape
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreenMode::Portrait => "portrait",
            ScreenMode::Landscape => "landscape",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub angle: ScreenAngle,
    pub mode: ScreenMode,
}

impl ScreenState {
    pub fn new(angle: ScreenAngle, mode: ScreenMode) -> Self {
        Self { angle, mode }
    }

    /// Stores `next` and reports whether it differs from what was stored.
    pub fn replace(&mut self, next: ScreenState) -> bool {
        let changed = *self != next;
        *self = next;
        changed
    }

    /// Reads `screen.orientation` and the viewport size. Missing pieces fall
    /// back to an upright portrait screen.
    pub fn query() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let orientation = window.screen().ok().map(|s| s.orientation());
        let angle = orientation
            .as_ref()
            .and_then(|o| o.angle().ok())
            .map(|a| ScreenAngle::from_degrees(a as i32))
            .unwrap_or_default();
        let kind = orientation.as_ref().and_then(|o| o.type_().ok());
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Self::new(angle, ScreenMode::detect(kind, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_ninety_is_two_seventy() {
        assert_eq!(ScreenAngle::from_degrees(-90), ScreenAngle::Deg270);
        assert_eq!(ScreenAngle::from_degrees(270), ScreenAngle::Deg270);
        assert_eq!(ScreenAngle::from_degrees(450), ScreenAngle::Deg90);
    }

    #[test]
    fn odd_angles_fall_back_to_upright() {
        assert_eq!(ScreenAngle::from_degrees(45), ScreenAngle::Deg0);
    }

    #[test]
    fn portrait_type_wins_over_wide_viewport() {
        let m = ScreenMode::detect(Some(OrientationType::PortraitSecondary), 800.0, 400.0);
        assert_eq!(m, ScreenMode::Portrait);
    }

    #[test]
    fn tall_viewport_is_portrait_without_type() {
        assert_eq!(ScreenMode::detect(None, 400.0, 800.0), ScreenMode::Portrait);
        assert_eq!(
            ScreenMode::detect(Some(OrientationType::LandscapePrimary), 800.0, 400.0),
            ScreenMode::Landscape
        );
    }

    #[test]
    fn replace_reports_only_real_changes() {
        let mut last = ScreenState::default();
        let turned = ScreenState::new(ScreenAngle::Deg90, ScreenMode::Landscape);
        assert!(last.replace(turned));
        assert!(!last.replace(turned));
        assert!(!last.replace(turned));
        assert!(last.replace(ScreenState::default()));
        assert_eq!(last, ScreenState::default());
    }
}
