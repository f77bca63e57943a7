//! Single-slot selection for the choice grid.

/// At most one selected item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState(Option<u32>);

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.0
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.0 == Some(id)
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    ///
    /// Selecting a different item replaces the previous one.
    pub fn toggle(&mut self, id: u32) -> Option<u32> {
        self.0 = if self.is_selected(id) { None } else { Some(id) };
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
