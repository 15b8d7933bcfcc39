//! Scroll-aware header visibility and hover menus with a close grace period

/// Below this scroll position the header is always shown
pub const SHOW_ALWAYS_ABOVE: f64 = 10.0;
/// Scrolling down hides the header only past this position
pub const HIDE_BELOW: f64 = 100.0;

/// Shows the header when scrolling up and hides it when scrolling down the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollVisibility {
    visible: bool,
    last_y: f64,
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            last_y: 0.0,
        }
    }
}

impl ScrollVisibility {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feeds a new `window.scrollY` sample, returns the resulting visibility
    pub fn update(&mut self, y: f64) -> bool {
        if y < self.last_y || y < SHOW_ALWAYS_ABOVE {
            self.visible = true;
        } else if y > self.last_y && y > HIDE_BELOW {
            self.visible = false;
        }
        self.last_y = y;
        self.visible
    }
}

/// Handle for a delayed close; stale once the menu was opened or closed again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// Open/closed state of a hover menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverMenu {
    open: bool,
    generation: u64,
}

impl HoverMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the menu and cancels any pending close
    pub fn open(&mut self) {
        self.generation += 1;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Starts a delayed close; pass the ticket to `close_if_current` after the delay
    pub fn schedule_close(&mut self) -> CloseTicket {
        self.generation += 1;
        CloseTicket(self.generation)
    }

    /// Closes unless something happened since the ticket was issued
    pub fn close_if_current(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 == self.generation {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_hides_on_scroll_down() {
        let mut header = ScrollVisibility::default();
        assert!(header.update(50.0));
        assert!(header.update(99.0));
        assert!(!header.update(150.0));
        assert!(!header.update(150.0));
        assert!(header.update(140.0));
    }

    #[test]
    fn test_header_visible_near_top() {
        let mut header = ScrollVisibility::default();
        header.update(500.0);
        assert!(!header.visible());
        assert!(header.update(5.0));
    }

    #[test]
    fn test_delayed_close() {
        let mut menu = HoverMenu::default();
        menu.open();
        let ticket = menu.schedule_close();
        assert!(menu.is_open());
        assert!(menu.close_if_current(ticket));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_reopen_cancels_pending_close() {
        let mut menu = HoverMenu::default();
        menu.open();
        let ticket = menu.schedule_close();
        menu.open();
        assert!(!menu.close_if_current(ticket));
        assert!(menu.is_open());
    }

    #[test]
    fn test_newer_close_supersedes_older() {
        let mut menu = HoverMenu::default();
        menu.open();
        let first = menu.schedule_close();
        let second = menu.schedule_close();
        assert!(!menu.close_if_current(first));
        assert!(menu.is_open());
        assert!(menu.close_if_current(second));
    }

    #[test]
    fn test_toggle() {
        let mut menu = HoverMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }
}
