//! Lightbox viewer state
//!
//! Pure state for a full-screen image viewer over a fixed, ordered list of
//! images. Components keep a `LightboxState` in a signal and call the methods
//! below from their event handlers; nothing in here touches the DOM.

use std::ops::Sub;

/// Smallest zoom factor (image fits the viewport)
pub const MIN_ZOOM: f64 = 1.0;
/// Largest zoom factor
pub const MAX_ZOOM: f64 = 4.0;
/// Zoom change per button press, wheel notch or key press
pub const ZOOM_STEP: f64 = 0.5;

/// Zoom factor, stored as a count of half steps so it always stays on the 0.5 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zoom(u8);

impl Zoom {
    const MIN_STEPS: u8 = 2;
    const MAX_STEPS: u8 = 8;

    /// Unmagnified (1×)
    pub const FIT: Zoom = Zoom(Self::MIN_STEPS);

    /// Builds a zoom from a factor, rounding to the nearest half step and clamping to [1, 4]
    pub fn from_factor(factor: f64) -> Self {
        if !factor.is_finite() {
            return Self::FIT;
        }
        let steps = (factor / ZOOM_STEP).round();
        let clamped = steps.clamp(Self::MIN_STEPS as f64, Self::MAX_STEPS as f64);
        Zoom(clamped as u8)
    }

    pub fn factor(self) -> f64 {
        self.0 as f64 * ZOOM_STEP
    }

    pub fn zoomed_in(self) -> Self {
        Zoom((self.0 + 1).min(Self::MAX_STEPS))
    }

    pub fn zoomed_out(self) -> Self {
        Zoom(self.0.saturating_sub(1).max(Self::MIN_STEPS))
    }

    pub fn is_magnified(self) -> bool {
        self.0 > Self::MIN_STEPS
    }

    pub fn is_max(self) -> bool {
        self.0 == Self::MAX_STEPS
    }

    /// Zoom as a rounded percentage, e.g. `250` for 2.5×
    pub fn percent(self) -> u32 {
        (self.factor() * 100.0).round() as u32
    }

    /// Position of the zoom slider, 0.0 at 1× and 100.0 at 4×
    pub fn fill_percent(self) -> f64 {
        (self.factor() - MIN_ZOOM) / (MAX_ZOOM - MIN_ZOOM) * 100.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::FIT
    }
}

/// A pointer position or pan offset in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Observable phase of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Open at 1×
    Viewing,
    /// Open and magnified, pan available
    Zoomed,
    /// Magnified with the pointer held down on the image
    Dragging,
}

/// Keyboard input the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    Other,
}

impl LightboxKey {
    /// Every `KeyboardEvent.key` value the lightbox reacts to
    pub const KEY_NAMES: [&'static str; 8] =
        ["Escape", "Esc", "ArrowLeft", "ArrowRight", "+", "=", "-", "_"];

    /// Maps a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => LightboxKey::Escape,
            "ArrowLeft" => LightboxKey::Previous,
            "ArrowRight" => LightboxKey::Next,
            "+" | "=" => LightboxKey::ZoomIn,
            "-" | "_" => LightboxKey::ZoomOut,
            _ => LightboxKey::Other,
        }
    }
}

/// State of one lightbox over `len` images
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    len: usize,
    open_zoom: Zoom,
    current: Option<usize>,
    zoom: Zoom,
    pan: Point,
    drag_anchor: Option<Point>,
}

impl LightboxState {
    /// `open_zoom` is applied whenever an image is shown (open, prev/next, thumbnail)
    pub fn new(len: usize, open_zoom: f64) -> Self {
        Self {
            len,
            open_zoom: Zoom::from_factor(open_zoom),
            current: None,
            zoom: Zoom::FIT,
            pan: Point::ORIGIN,
            drag_anchor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn phase(&self) -> Phase {
        match (self.current, self.drag_anchor) {
            (None, _) => Phase::Closed,
            (Some(_), Some(_)) => Phase::Dragging,
            (Some(_), None) if self.zoom.is_magnified() => Phase::Zoomed,
            (Some(_), None) => Phase::Viewing,
        }
    }

    /// Opens the viewer on `index`; returns false (and stays closed) when out of range
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.show(index);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
        self.zoom = Zoom::FIT;
        self.reset_pan();
    }

    pub fn next(&mut self) {
        if let Some(index) = self.current {
            let next = if index + 1 >= self.len { 0 } else { index + 1 };
            self.show(next);
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.current {
            let prev = if index == 0 { self.len - 1 } else { index - 1 };
            self.show(prev);
        }
    }

    /// Jumps to `index` while open (thumbnail click)
    pub fn select(&mut self, index: usize) {
        if self.current.is_some() && index < self.len {
            self.show(index);
        }
    }

    pub fn zoom_in(&mut self) {
        if self.current.is_some() {
            self.zoom = self.zoom.zoomed_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.current.is_some() {
            self.zoom = self.zoom.zoomed_out();
            if !self.zoom.is_magnified() {
                self.reset_pan();
            }
        }
    }

    /// Wheel up zooms in, wheel down zooms out
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom_out();
        }
    }

    /// Starts panning; ignored unless magnified
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.current.is_some() && self.zoom.is_magnified() {
            self.drag_anchor = Some(pointer - self.pan);
        }
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if !self.zoom.is_magnified() {
            return;
        }
        if let Some(anchor) = self.drag_anchor {
            self.pan = pointer - anchor;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn handle_key(&mut self, key: LightboxKey) {
        if self.current.is_none() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::Previous => self.prev(),
            LightboxKey::Next => self.next(),
            LightboxKey::ZoomIn => self.zoom_in(),
            LightboxKey::ZoomOut => self.zoom_out(),
            LightboxKey::Other => {}
        }
    }

    /// CSS transform for the displayed image
    pub fn transform(&self) -> String {
        let z = self.zoom.factor();
        format!(
            "scale({}) translate({}px, {}px)",
            z,
            self.pan.x / z,
            self.pan.y / z
        )
    }

    pub fn cursor(&self) -> &'static str {
        match self.phase() {
            Phase::Dragging => "grabbing",
            Phase::Zoomed => "grab",
            Phase::Closed | Phase::Viewing => "default",
        }
    }

    fn show(&mut self, index: usize) {
        self.current = Some(index);
        self.zoom = self.open_zoom;
        self.reset_pan();
    }

    fn reset_pan(&mut self) {
        self.pan = Point::ORIGIN;
        self.drag_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_all_map_to_actions() {
        for name in LightboxKey::KEY_NAMES {
            assert_ne!(LightboxKey::from_key_name(name), LightboxKey::Other, "{}", name);
        }
        assert_eq!(LightboxKey::from_key_name("Enter"), LightboxKey::Other);
    }

    fn opened(len: usize, open_zoom: f64, index: usize) -> LightboxState {
        let mut state = LightboxState::new(len, open_zoom);
        assert!(state.open(index));
        state
    }

    #[test]
    fn test_zoom_from_factor_rounds_and_clamps() {
        assert_eq!(Zoom::from_factor(2.5).factor(), 2.5);
        assert_eq!(Zoom::from_factor(2.6).factor(), 2.5);
        assert_eq!(Zoom::from_factor(0.2).factor(), 1.0);
        assert_eq!(Zoom::from_factor(9.0).factor(), 4.0);
        assert_eq!(Zoom::from_factor(f64::NAN), Zoom::FIT);
    }

    #[test]
    fn test_zoom_display_values() {
        assert_eq!(Zoom::from_factor(2.5).percent(), 250);
        assert_eq!(Zoom::FIT.fill_percent(), 0.0);
        assert_eq!(Zoom::from_factor(4.0).fill_percent(), 100.0);
        assert_eq!(Zoom::from_factor(2.5).fill_percent(), 50.0);
    }

    #[test]
    fn test_open_out_of_range_stays_closed() {
        let mut state = LightboxState::new(3, 2.5);
        assert!(!state.open(3));
        assert_eq!(state.phase(), Phase::Closed);

        let mut empty = LightboxState::new(0, 1.0);
        assert!(!empty.open(0));
        empty.next();
        assert!(!empty.is_open());
    }

    #[test]
    fn test_open_applies_open_zoom() {
        let state = opened(4, 2.5, 1);
        assert_eq!(state.current(), Some(1));
        assert_eq!(state.zoom().factor(), 2.5);
        assert_eq!(state.phase(), Phase::Zoomed);

        let suite = opened(4, 1.0, 0);
        assert_eq!(suite.phase(), Phase::Viewing);
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut state = opened(3, 1.0, 0);
        state.prev();
        assert_eq!(state.current(), Some(2));
        state.next();
        assert_eq!(state.current(), Some(0));
        state.next();
        state.next();
        assert_eq!(state.current(), Some(2));
    }

    #[test]
    fn test_navigation_resets_zoom_and_pan() {
        let mut state = opened(3, 2.5, 0);
        state.zoom_in();
        state.begin_drag(Point::new(10.0, 10.0));
        state.drag_to(Point::new(40.0, 30.0));
        assert_eq!(state.pan(), Point::new(30.0, 20.0));

        state.next();
        assert_eq!(state.zoom().factor(), 2.5);
        assert_eq!(state.pan(), Point::ORIGIN);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_zoom_clamped_to_range() {
        let mut state = opened(2, 2.5, 0);
        for _ in 0..10 {
            state.zoom_in();
        }
        assert_eq!(state.zoom().factor(), MAX_ZOOM);
        for _ in 0..10 {
            state.zoom_out();
        }
        assert_eq!(state.zoom().factor(), MIN_ZOOM);
    }

    #[test]
    fn test_pan_resets_when_zoom_returns_to_one() {
        let mut state = opened(2, 1.5, 0);
        state.begin_drag(Point::new(0.0, 0.0));
        state.drag_to(Point::new(25.0, -5.0));
        state.end_drag();
        assert_eq!(state.pan(), Point::new(25.0, -5.0));

        state.zoom_out();
        assert_eq!(state.zoom(), Zoom::FIT);
        assert_eq!(state.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_drag_requires_magnification() {
        let mut state = opened(2, 1.0, 0);
        state.begin_drag(Point::new(5.0, 5.0));
        assert!(!state.is_dragging());
        state.drag_to(Point::new(50.0, 50.0));
        assert_eq!(state.pan(), Point::ORIGIN);
        assert_eq!(state.phase(), Phase::Viewing);
    }

    #[test]
    fn test_drag_continues_from_previous_pan() {
        let mut state = opened(1, 2.0, 0);
        state.begin_drag(Point::new(100.0, 100.0));
        state.drag_to(Point::new(120.0, 90.0));
        state.end_drag();

        state.begin_drag(Point::new(0.0, 0.0));
        assert_eq!(state.phase(), Phase::Dragging);
        state.drag_to(Point::new(5.0, 5.0));
        assert_eq!(state.pan(), Point::new(25.0, -5.0));
        assert_eq!(state.cursor(), "grabbing");
    }

    #[test]
    fn test_wheel_direction() {
        let mut state = opened(1, 2.0, 0);
        state.wheel(-120.0);
        assert_eq!(state.zoom().factor(), 2.5);
        state.wheel(53.0);
        state.wheel(53.0);
        assert_eq!(state.zoom().factor(), 1.5);
        state.wheel(0.0);
        assert_eq!(state.zoom().factor(), 1.5);
    }

    #[test]
    fn test_keys() {
        assert_eq!(LightboxKey::from_key_name("Escape"), LightboxKey::Escape);
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), LightboxKey::Next);
        assert_eq!(LightboxKey::from_key_name("a"), LightboxKey::Other);

        let mut state = opened(3, 1.0, 1);
        state.handle_key(LightboxKey::Next);
        assert_eq!(state.current(), Some(2));
        state.handle_key(LightboxKey::ZoomIn);
        assert_eq!(state.zoom().factor(), 1.5);
        state.handle_key(LightboxKey::Escape);
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.zoom(), Zoom::FIT);

        state.handle_key(LightboxKey::Next);
        assert!(!state.is_open());
    }

    #[test]
    fn test_transform_divides_pan_by_zoom() {
        let mut state = opened(1, 2.0, 0);
        state.begin_drag(Point::ORIGIN);
        state.drag_to(Point::new(40.0, -20.0));
        assert_eq!(state.transform(), "scale(2) translate(20px, -10px)");
    }

    #[test]
    fn test_invariants_hold_for_mixed_sequences() {
        let mut state = LightboxState::new(5, 2.5);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..5_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let p = Point::new((seed % 400) as f64 - 200.0, (seed % 300) as f64 - 150.0);
            match seed % 11 {
                0 => {
                    state.open((seed as usize) % 7);
                }
                1 => state.close(),
                2 => state.next(),
                3 => state.prev(),
                4 => state.zoom_in(),
                5 => state.zoom_out(),
                6 => state.wheel(if seed & 1 == 0 { -1.0 } else { 1.0 }),
                7 => state.begin_drag(p),
                8 => state.drag_to(p),
                9 => state.end_drag(),
                _ => state.select((seed as usize) % 6),
            }

            let zoom = state.zoom().factor();
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
            assert_eq!((zoom / ZOOM_STEP).fract(), 0.0);
            if !state.zoom().is_magnified() {
                assert_eq!(state.pan(), Point::ORIGIN);
                assert!(!state.is_dragging());
            }
            if let Some(index) = state.current() {
                assert!(index < state.len());
            }
        }
    }
}
