//! Assembly cursor: the engine's current window.
//!
//! The cursor is deliberately dumb. It knows the configured window length
//! and holds at most one window of exactly that length; it knows nothing
//! about symbols, tokens, or the graph. Symbol validation belongs to the
//! codec, which sees every window before a walk starts.

use thiserror::Error;

/// Error raised when assigning a window to a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The supplied window's symbol count does not match the configured k.
    #[error("Invalid window length: expected {expected}, got {actual}")]
    InvalidWindowLength {
        /// The configured window length.
        expected: usize,
        /// The symbol count of the rejected window.
        actual: usize,
    },
}

/// Position state for the assembler: a window of exactly `k` symbols.
///
/// Assignment is set-or-fail: a wrong-length window is rejected before any
/// state changes, so after a failed `set` the previous position is still
/// readable.
#[derive(Debug, Clone)]
pub struct Cursor {
    k: usize,
    window: Option<String>,
}

impl Cursor {
    /// Create an unset cursor for windows of length `k`.
    pub fn new(k: usize) -> Self {
        Self { k, window: None }
    }

    /// The configured window length.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Assign a new window, validating its symbol count first.
    pub fn set(&mut self, window: &str) -> Result<(), CursorError> {
        let symbols = window.chars().count();
        if symbols != self.k {
            return Err(CursorError::InvalidWindowLength {
                expected: self.k,
                actual: symbols,
            });
        }
        self.window = Some(window.to_string());
        Ok(())
    }

    /// The current window, if one has been set.
    pub fn window(&self) -> Option<&str> {
        self.window.as_deref()
    }

    /// Whether a window has ever been assigned.
    pub fn is_set(&self) -> bool {
        self.window.is_some()
    }
}
