//! Syntax error location from engine error text.
//!
//! Recognized layout, one item per line:
//!
//! ```text
//! <error text>
//! LINE <n>: <statement line>
//!           ^
//! ```
//!
//! The column is the caret's offset relative to the start of the echoed
//! statement line, i.e. the caret index minus the `LINE <n>` prefix and the
//! `": "` separator after it.

use crate::models::ErrorPosition;

const LINE_MARKER: &str = "LINE";
const CARET: char = '^';
const SEPARATOR_LEN: usize = 2;

/// Extracts the error location, or `None` when the message does not follow
/// the layout above.
///
/// # Example
/// ```rust
/// use dbadmin_core::adapters::oracle::error_position;
/// use dbadmin_core::models::ErrorPosition;
///
/// let message = "syntax error\nLINE 3: select * fron emp\n                  ^";
/// assert_eq!(error_position(message), Some(ErrorPosition { row: 3, col: 10 }));
/// assert_eq!(error_position("ORA-00942: table or view does not exist"), None);
/// ```
pub fn error_position(message: &str) -> Option<ErrorPosition> {
    let mut lines = message.split('\n');
    let _headline = lines.next()?;
    let line_echo = lines.next()?;

    if !line_echo.starts_with(LINE_MARKER) {
        return None;
    }

    let prefix = line_echo.split(':').next().unwrap_or(line_echo);
    let row = prefix.split(' ').nth(1)?.parse::<u32>().ok()?;

    let caret_line = lines.next()?;
    let caret = caret_line.chars().position(|c| c == CARET)?;
    let col = caret.checked_sub(prefix.chars().count() + SEPARATOR_LEN)?;

    Some(ErrorPosition {
        row,
        col: u32::try_from(col).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_message() {
        let message = "ERROR: syntax error at or near \"fron\"\nLINE 1: select * fron x\n                 ^";
        assert_eq!(
            error_position(message),
            Some(ErrorPosition { row: 1, col: 9 })
        );
    }

    #[test]
    fn test_caret_under_first_statement_character() {
        let message = "error\nLINE 12: selec 1\n         ^";
        assert_eq!(
            error_position(message),
            Some(ErrorPosition { row: 12, col: 0 })
        );
    }

    #[test]
    fn test_missing_marker_is_no_position() {
        assert_eq!(error_position("ORA-00942: table or view does not exist"), None);
        assert_eq!(error_position("first\nsecond\n   ^"), None);
        assert_eq!(error_position(""), None);
    }

    #[test]
    fn test_missing_caret_line_is_no_position() {
        let message = "ORA-00942: table or view does not exist\nLINE 1: select * from x";
        assert_eq!(error_position(message), None);

        let message = "error\nLINE 1: select * from x\n   no caret here";
        assert_eq!(error_position(message), None);
    }

    #[test]
    fn test_caret_left_of_prefix_is_no_position() {
        let message = "error\nLINE 1: select\n ^";
        assert_eq!(error_position(message), None);
    }

    #[test]
    fn test_non_numeric_row_is_no_position() {
        assert_eq!(error_position("error\nLINE x: select\n        ^"), None);
        assert_eq!(error_position("error\nLINE: select\n      ^"), None);
    }
}
