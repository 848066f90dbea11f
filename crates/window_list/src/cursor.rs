use crate::error::{Error, Result};
use crate::list::WindowList;

/// Direction of the most recent traversal step.
///
/// `remove` consumes it and `insert` resets it, so each guards on a
/// fresh step; `replace` requires one but leaves it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    None,
    Forward,
    Backward,
}

/// A bidirectional cursor over one [`WindowList`].
///
/// The cursor borrows its sequence mutably for its whole lifetime, so
/// edits through that handle are impossible while it is alive and the
/// cursor's own edits keep the handle's window in sync. Structural
/// edits through *other* handles sharing the same store are detected
/// against the store's version counter and fail every subsequent
/// fallible operation with [`Error::StaleCursor`]. In-place
/// replacement is non-structural and never stales a cursor.
///
/// `position` sits between elements, in `[0, len]`; a cursor at
/// position `i` yields the element at `i` on `advance` and the element
/// at `i - 1` on `retreat`.
pub struct Cursor<'a, T> {
    list: &'a mut WindowList<T>,
    position: usize,
    last_step: Step,
    seen_version: u64,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a mut WindowList<T>, position: usize) -> Self {
        let seen_version = list.store_version();
        Self {
            list,
            position,
            last_step: Step::None,
            seen_version,
        }
    }

    fn check_sync(&self) -> Result<()> {
        if self.seen_version != self.list.store_version() {
            return Err(Error::StaleCursor);
        }
        Ok(())
    }

    fn resync(&mut self) {
        self.seen_version = self.list.store_version();
    }

    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Index of the element a following `advance` would yield; equals
    /// the window length when the cursor sits at the end.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element a following `retreat` would yield, or
    /// `None` when the cursor sits at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    pub fn last_step(&self) -> Step {
        self.last_step
    }

    /// Removes the element last yielded by `advance` or `retreat`.
    pub fn remove(&mut self) -> Result<()> {
        self.check_sync()?;
        match self.last_step {
            Step::None => return Err(Error::IllegalState),
            Step::Forward => {
                self.list.remove(self.position - 1)?;
                self.position -= 1;
            }
            Step::Backward => {
                self.list.remove(self.position)?;
            }
        }
        self.last_step = Step::None;
        self.resync();
        Ok(())
    }

    /// Overwrites the element last yielded by `advance` or `retreat`,
    /// leaving the position and the last step unchanged.
    pub fn replace(&mut self, value: T) -> Result<()> {
        self.check_sync()?;
        let at = match self.last_step {
            Step::None => return Err(Error::IllegalState),
            Step::Forward => self.position - 1,
            Step::Backward => self.position,
        };
        self.list.set(at, value)?;
        Ok(())
    }

    /// Inserts `value` at the cursor position and steps over it. The
    /// insertion does not count as a traversal step for a following
    /// `remove` or `replace`.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.check_sync()?;
        self.list.insert(self.position, value)?;
        self.position += 1;
        self.last_step = Step::None;
        self.resync();
        Ok(())
    }
}

impl<T: Clone> Cursor<'_, T> {
    /// Yields the element at the cursor position and steps forward.
    pub fn advance(&mut self) -> Result<T> {
        self.check_sync()?;
        if !self.has_next() {
            return Err(Error::NoSuchElement);
        }
        let value = self.list.get(self.position)?;
        self.position += 1;
        self.last_step = Step::Forward;
        Ok(value)
    }

    /// Steps backward and yields the element now at the cursor position.
    pub fn retreat(&mut self) -> Result<T> {
        self.check_sync()?;
        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }
        self.position -= 1;
        self.last_step = Step::Backward;
        self.list.get(self.position)
    }
}

/// Forward traversal over clones of the remaining elements. Iteration
/// ends at the window end, or early if the cursor goes stale.
impl<T: Clone> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance().ok()
    }
}
