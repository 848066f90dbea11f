//! One growable sequence that behaves as a positional list, an
//! unordered membership collection, and a LIFO stack, all over a single
//! shared slot array.
//!
//! - [`WindowList`] exposes the three operation groups over a
//!   `[start, end)` window into the backing store.
//! - [`WindowList::subrange`] carves views aliasing the same store, so
//!   mutation through any handle stays visible through every
//!   overlapping handle. Structural edits renumber the other windows in
//!   place; live cursors detect them and fail fast instead.
//! - [`Cursor`] is a bidirectional traversal handle with guarded
//!   in-place mutation: `remove` and `replace` act on the element the
//!   last traversal step yielded, and only then.
//!
//! Single-threaded by design (`Rc`/`RefCell` sharing); middle-of-window
//! edits are linear in the store size.

mod cursor;
mod error;
mod list;
mod store;

pub use cursor::{Cursor, Step};
pub use error::{Error, Result};
pub use list::WindowList;
