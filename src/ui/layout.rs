//! Terminal-size breakpoints.

use ratatui::layout::Rect;

/// Below this width the details panel is hidden.
pub const DETAILS_MIN_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage.min(100) as u32) / 100) as u16
    }

    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage.min(100) as u32) / 100) as u16
    }

    /// Percentage of the width, clamped to `[min, max]` and to the terminal.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    pub fn shows_details(&self) -> bool {
        self.width >= DETAILS_MIN_WIDTH
    }
}
