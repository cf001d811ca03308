use std::fmt;

/// Fatal failures of the UI tasks. Anything that reaches the dispatch loop
/// as a `DashError` ends the process with a non-zero status.
#[derive(Debug)]
pub enum DashError {
    /// Terminal backend I/O failed (init, event read).
    Io(std::io::Error),
    /// A draw pass failed.
    Render(String),
    /// The terminal is too small to lay out valid rectangles.
    Layout(String),
    /// The input relay went away without a quit signal.
    RelayClosed,
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Io(e) => write!(f, "terminal I/O error: {e}"),
            DashError::Render(msg) => write!(f, "render error: {msg}"),
            DashError::Layout(msg) => write!(f, "layout error: {msg}"),
            DashError::RelayClosed => write!(f, "input relay closed"),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashError {
    fn from(e: std::io::Error) -> Self {
        DashError::Io(e)
    }
}
