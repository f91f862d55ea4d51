//! Selection cursor over a list whose length changes under it.

/// Cursor position and scroll offset for one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the cursor inside a list of `len` items.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.reset();
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Adjust the scroll offset so the cursor is inside a window of `rows`.
    pub fn ensure_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
    }
}
