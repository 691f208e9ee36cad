// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Interactive model selection menu
//!
//! A one-shot modal menu over the terminal: grouped model list, wrapping
//! cursor, Enter to confirm, q/Esc/Ctrl-C to cancel. Uses ratatui for
//! rendering and crossterm for input handling.
//!
//! The outcome is a 1-based position into the item list, not a copy of the
//! item: callers map it back through the same ordered sequence they built
//! the items from.

pub mod guard;
pub mod render;
pub mod state;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::error::MenuError;

// Re-export commonly used types
pub use guard::TerminalGuard;
pub use state::{MenuItem, MenuRow, MenuState, SelectionOutcome};

/// Run the menu to completion and return how it ended.
///
/// The empty-items check happens before any terminal mode change; after
/// that, the guard restores the terminal on every way out of this function.
pub fn run_menu(items: Vec<MenuItem>) -> Result<SelectionOutcome, MenuError> {
    let mut state = MenuState::new(items)?;

    let _guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_loop(&mut terminal, &mut state)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut MenuState,
) -> Result<SelectionOutcome, MenuError>
where
    MenuError: From<B::Error>,
{
    loop {
        terminal.draw(|f| render::draw(f, state))?;
        if let Some(outcome) = handle_input(state)? {
            return Ok(outcome);
        }
    }
}

/// Poll for one input event and apply it.
fn handle_input(state: &mut MenuState) -> Result<Option<SelectionOutcome>, MenuError> {
    // Poll with a small timeout; resize and other events fall through to a
    // redraw in the caller's loop
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(apply_key(state, key));
        }
    }
    Ok(None)
}

/// Apply one key press to the menu state.
///
/// Navigation keys move the cursor and return `None`; Enter confirms the
/// current position; q, Esc, and Ctrl-C cancel. Every other key is ignored.
pub fn apply_key(state: &mut MenuState, key: KeyEvent) -> Option<SelectionOutcome> {
    // Ctrl+C cancels regardless of the character mapping below
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(SelectionOutcome::Cancelled);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            None
        }
        KeyCode::Enter => Some(SelectionOutcome::Confirmed(state.position())),
        KeyCode::Char('q') | KeyCode::Esc => Some(SelectionOutcome::Cancelled),
        _ => None,
    }
}
