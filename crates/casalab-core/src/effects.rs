//! Pure interaction math behind the pointer-driven demo widgets.
//!
//! The web widgets normalize mouse and touch input into element-relative
//! coordinates, feed them through these types, and apply the returned
//! CSS fragments as inline styles. Keeping the arithmetic free of DOM
//! types lets every contract be unit-tested off the browser.

/// Fraction of the center-to-pointer vector applied as button translation.
pub const MAGNETIC_DAMPING: f64 = 0.2;

/// Scale applied while a touch press is active.
pub const PRESSED_SCALE: f64 = 0.95;

/// Viewport width (px) below which pointer magnetism is disabled.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Radius (px) of the unmasked spotlight circle.
pub const SPOTLIGHT_RADIUS: f64 = 120.0;

/// Fraction of the widget that must be visible to trip the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.3;

// ── Pointer input ───────────────────────────────────────────────────

/// Pointer or first-touch position, in px relative to a tracked element.
///
/// Both input modalities converge here; the widgets never carry raw
/// viewport coordinates past the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    /// Convert viewport coordinates into element-relative coordinates.
    pub fn relative_to(client_x: f64, client_y: f64, bounds: &TrackedBounds) -> Self {
        Self {
            x: client_x - bounds.left,
            y: client_y - bounds.top,
        }
    }
}

/// Bounding box of a tracked element, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackedBounds {
    /// Center of the element in viewport coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

// ── Magnetic button ─────────────────────────────────────────────────

/// Translation + press state of a magnetic button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Magnetism {
    pub offset: PointerPoint,
    pub pressed: bool,
}

impl Magnetism {
    /// Pointer moved over the button at viewport position (`client_x`,
    /// `client_y`). Magnetism only engages at desktop widths; below the
    /// breakpoint the offset stays untouched so touch devices get press
    /// feedback exclusively.
    pub fn pointer_moved(
        &mut self,
        viewport_width: f64,
        client_x: f64,
        client_y: f64,
        bounds: &TrackedBounds,
    ) {
        if viewport_width < MOBILE_BREAKPOINT {
            return;
        }
        let (cx, cy) = bounds.center();
        self.offset = PointerPoint {
            x: (client_x - cx) * MAGNETIC_DAMPING,
            y: (client_y - cy) * MAGNETIC_DAMPING,
        };
    }

    /// Pointer left the button: clear translation and any press state.
    pub fn pointer_left(&mut self) {
        self.offset = PointerPoint::default();
        self.pressed = false;
    }

    pub fn touch_started(&mut self) {
        self.pressed = true;
    }

    pub fn touch_ended(&mut self) {
        self.pressed = false;
    }

    /// Inline CSS transform for the current state.
    pub fn transform(&self) -> String {
        let scale = if self.pressed { PRESSED_SCALE } else { 1.0 };
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({scale});",
            self.offset.x, self.offset.y
        )
    }
}

// ── Spotlight ───────────────────────────────────────────────────────

/// Focus point of the spotlight reveal, relative to its container.
///
/// Defaults to the container origin until the first move event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spotlight {
    pub focus: PointerPoint,
}

impl Spotlight {
    /// Track a pointer or first-touch position given in viewport
    /// coordinates.
    pub fn moved(&mut self, client_x: f64, client_y: f64, bounds: &TrackedBounds) {
        self.focus = PointerPoint::relative_to(client_x, client_y, bounds);
    }

    /// Inline background for the masking overlay: everything dark except
    /// a fixed-radius circle around the focus point.
    pub fn mask_css(&self) -> String {
        format!(
            "background: radial-gradient(circle {SPOTLIGHT_RADIUS}px at {:.0}px {:.0}px, \
             transparent 0%, rgba(28, 28, 28, 0.98) 100%);",
            self.focus.x, self.focus.y
        )
    }
}

// ── Scroll-triggered reveal ─────────────────────────────────────────

/// One-way visibility latch driven by intersection callbacks.
///
/// Once the widget has crossed the visibility threshold the latch stays
/// set; scrolling back out must not replay the entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed one intersection observation.
    pub fn observe(&mut self, intersecting: bool) {
        if intersecting {
            self.revealed = true;
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1280.0;
    const PHONE: f64 = 480.0;

    fn button_bounds() -> TrackedBounds {
        // 200x60 button at (100, 400): center (200, 430)
        TrackedBounds {
            left: 100.0,
            top: 400.0,
            width: 200.0,
            height: 60.0,
        }
    }

    // ── Magnetism ─────────────────────────────────────────────────

    #[test]
    fn magnetic_offset_is_damped_center_vector() {
        let mut m = Magnetism::default();
        m.pointer_moved(DESKTOP, 250.0, 410.0, &button_bounds());
        // dx = 50, dy = -20, damped by 0.2
        assert_eq!(m.offset, PointerPoint { x: 10.0, y: -4.0 });
    }

    #[test]
    fn pointer_leave_resets_offset_and_press() {
        let mut m = Magnetism::default();
        m.pointer_moved(DESKTOP, 250.0, 410.0, &button_bounds());
        m.touch_started();
        m.pointer_left();
        assert_eq!(m, Magnetism::default());
    }

    #[test]
    fn magnetism_disabled_below_breakpoint() {
        let mut m = Magnetism::default();
        m.pointer_moved(PHONE, 250.0, 410.0, &button_bounds());
        assert_eq!(m.offset, PointerPoint::default());
        // exactly at the breakpoint counts as desktop
        m.pointer_moved(MOBILE_BREAKPOINT, 250.0, 410.0, &button_bounds());
        assert_ne!(m.offset, PointerPoint::default());
    }

    #[test]
    fn touch_toggles_only_press_state() {
        let mut m = Magnetism::default();
        m.touch_started();
        assert!(m.pressed);
        assert_eq!(m.offset, PointerPoint::default());
        m.touch_ended();
        assert!(!m.pressed);
    }

    #[test]
    fn transform_reflects_press_scale() {
        let mut m = Magnetism::default();
        assert_eq!(m.transform(), "transform: translate(0.0px, 0.0px) scale(1);");
        m.touch_started();
        assert!(m.transform().contains("scale(0.95)"));
    }

    // ── Spotlight ─────────────────────────────────────────────────

    #[test]
    fn spotlight_focus_is_container_relative() {
        let bounds = TrackedBounds {
            left: 300.0,
            top: 1200.0,
            width: 800.0,
            height: 400.0,
        };
        let mut s = Spotlight::default();
        s.moved(350.0, 1260.0, &bounds);
        assert_eq!(s.focus, PointerPoint { x: 50.0, y: 60.0 });
    }

    #[test]
    fn spotlight_defaults_to_origin() {
        let s = Spotlight::default();
        assert_eq!(s.focus, PointerPoint { x: 0.0, y: 0.0 });
        assert!(s.mask_css().contains("at 0px 0px"));
    }

    #[test]
    fn spotlight_mask_uses_fixed_radius() {
        let mut s = Spotlight::default();
        s.moved(10.0, 20.0, &TrackedBounds::default());
        assert!(s.mask_css().contains("circle 120px at 10px 20px"));
    }

    // ── Reveal latch ──────────────────────────────────────────────

    #[test]
    fn reveal_is_one_way() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        latch.observe(false);
        assert!(!latch.is_revealed());
        latch.observe(true);
        assert!(latch.is_revealed());
        // scrolling back out must not reset
        latch.observe(false);
        assert!(latch.is_revealed());
    }
}
