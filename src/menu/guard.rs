// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Terminal guard
//!
//! Owns the terminal mode changes for the menu: raw mode, alternate screen,
//! hidden cursor. Restoration happens in `drop`, so every exit path out of
//! the menu, including errors and cancellation, puts the terminal back.
//!
//! A process-wide flag refuses a second concurrent acquisition; nested menus
//! would fight over the same raw-mode state.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::MenuError;

static MENU_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Claims the menu-active flag and the terminal; releases both on drop.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode, the alternate screen, and hide the cursor.
    ///
    /// Fails with [`MenuError::AlreadyActive`] when another guard is alive
    /// in this process. On a partial setup failure the completed steps are
    /// rolled back before returning.
    pub fn acquire() -> Result<Self, MenuError> {
        claim()?;
        if let Err(err) = setup_terminal() {
            release();
            return Err(MenuError::Io(err));
        }
        Ok(TerminalGuard { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // restore failures have no recovery path in drop
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        release();
    }
}

fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    Ok(())
}

fn claim() -> Result<(), MenuError> {
    if MENU_ACTIVE
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(MenuError::AlreadyActive);
    }
    Ok(())
}

fn release() {
    MENU_ACTIVE.store(false, Ordering::SeqCst);
}
