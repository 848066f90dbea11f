use thiserror::Error;

/// Error kinds surfaced by [`WindowList`](crate::WindowList) and
/// [`Cursor`](crate::Cursor) operations.
///
/// Every kind is reported immediately to the caller; nothing is retried
/// or recovered internally. Callers should branch on the variant, never
/// on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A positional argument fell outside the window.
    #[error("index {index} out of range for window of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A traversal stepped past either end of the window.
    #[error("no element in the direction of travel")]
    NoSuchElement,
    /// A guarded cursor mutation was attempted without a preceding
    /// traversal step, or after that step was already consumed.
    #[error("cursor mutation without a preceding traversal step")]
    IllegalState,
    /// A stack read or pop on an empty window.
    #[error("stack is empty")]
    EmptyStack,
    /// The cursor's window was structurally edited through another
    /// handle sharing the same store.
    #[error("cursor invalidated by a structural edit through another handle")]
    StaleCursor,
}

pub type Result<T> = std::result::Result<T, Error>;
