// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Menu state
//!
//! Navigation state for the model selection menu. Positions are 1-based and
//! wrap at both ends; group separators are render-only rows that never
//! consume a position, so position N always means the Nth selectable entry
//! regardless of how the list is grouped on screen.

use crate::error::MenuError;

/// One selectable row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown for the entry (the encoded model key).
    pub label: String,
    /// Grouping value; a blank line separates consecutive groups.
    pub group: String,
    /// Marks the currently configured model.
    pub active: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, group: impl Into<String>) -> Self {
        MenuItem {
            label: label.into(),
            group: group.into(),
            active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// How a menu run ended.
///
/// The two cases are structurally distinct: confirming the first entry is
/// `Confirmed(1)`, which no cancellation path can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The user confirmed the entry at this 1-based position.
    Confirmed(usize),
    /// The user dismissed the menu.
    Cancelled,
}

/// A row as rendered: either a selectable entry or a group separator.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuRow<'a> {
    Entry { position: usize, item: &'a MenuItem },
    Separator,
}

/// Cursor state over a non-empty item list.
#[derive(Debug)]
pub struct MenuState {
    items: Vec<MenuItem>,
    position: usize,
}

impl MenuState {
    /// Build the state, starting at position 1.
    ///
    /// An empty item list is refused here, before any terminal mode change.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }
        Ok(MenuState { items, position: 1 })
    }

    /// Current 1-based position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The item under the cursor.
    pub fn selected(&self) -> &MenuItem {
        &self.items[self.position - 1]
    }

    /// Move the cursor up, wrapping from 1 to the last position.
    pub fn move_up(&mut self) {
        if self.position > 1 {
            self.position -= 1;
        } else {
            self.position = self.items.len();
        }
    }

    /// Move the cursor down, wrapping from the last position to 1.
    pub fn move_down(&mut self) {
        if self.position < self.items.len() {
            self.position += 1;
        } else {
            self.position = 1;
        }
    }

    /// Render rows: entries in order with a separator wherever the group
    /// changes between neighbors.
    pub fn rows(&self) -> Vec<MenuRow<'_>> {
        let mut rows = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 && self.items[index - 1].group != item.group {
                rows.push(MenuRow::Separator);
            }
            rows.push(MenuRow::Entry {
                position: index + 1,
                item,
            });
        }
        rows
    }
}
