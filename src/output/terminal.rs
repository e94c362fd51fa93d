//! Raw terminal control

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

/// Clear the screen and move the cursor to the top-left corner
///
/// # Errors
/// Returns an I/O error if writing to stdout fails.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
