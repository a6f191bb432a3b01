use crate::layout::ViewId;
use thiserror::Error;

/// Errors surfaced by the shared layout state accessors.
///
/// Every variant is recoverable: the interactive layer catches these at
/// the call site, logs a warning and falls back to its own tracked
/// values. Nothing here propagates into the gesture or tick contexts.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The referenced view was destroyed or is otherwise inaccessible.
    #[error("View {0} not found in layout state")]
    ViewNotFound(ViewId),
}
