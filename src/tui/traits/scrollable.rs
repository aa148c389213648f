//! Scrollable trait for components with scrollable content
//!
//! Components own their `ScrollState` and expose it through this trait;
//! the navigation methods delegate to it.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Get the visible range of items (start_index, end_index)
    fn visible_range(&self) -> (usize, usize) {
        self.scroll_state().visible_range()
    }
}

/// Extension trait for components that support selection within scrollable content
pub trait Selectable: Scrollable {
    /// Get the currently selected item index
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected item index
    fn select(&mut self, index: usize);

    /// Get total number of selectable items
    fn item_count(&self) -> usize;

    /// Select the next item (with bounds checking)
    fn select_next(&mut self) {
        if let Some(current) = self.selected_index() {
            let max = self.item_count().saturating_sub(1);
            if current < max {
                self.select(current + 1);
            }
        } else if self.item_count() > 0 {
            self.select(0);
        }
    }

    /// Select the previous item (with bounds checking)
    fn select_previous(&mut self) {
        if let Some(current) = self.selected_index() {
            if current > 0 {
                self.select(current - 1);
            }
        } else if self.item_count() > 0 {
            self.select(self.item_count().saturating_sub(1));
        }
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    fn select_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.select(count - 1);
        }
    }
}
