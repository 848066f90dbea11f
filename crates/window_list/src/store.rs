use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Absolute `[start, end)` bounds of one view into a [`Store`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Window {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Window {
    pub(crate) fn len(self) -> usize {
        self.end - self.start
    }
}

/// The growable slot array shared by a root list and every view carved
/// from it.
///
/// - Structural edits (`insert_before`, `remove_at`, `remove_range`)
///   renumber every registered window so views keep observing
///   store-relative bounds, and bump `version`.
/// - `set` replaces a slot in place: no renumbering, no version bump.
/// - Indices are absolute; callers guarantee validity.
pub(crate) struct Store<T> {
    slots: Vec<T>,
    windows: Vec<Weak<Cell<Window>>>,
    version: u64,
}

impl<T> Store<T> {
    pub(crate) fn new() -> Self {
        Self::with_slots(Vec::new())
    }

    pub(crate) fn with_slots(slots: Vec<T>) -> Self {
        Self {
            slots,
            windows: Vec::new(),
            version: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn get(&self, at: usize) -> &T {
        &self.slots[at]
    }

    pub(crate) fn slice(&self, window: Window) -> &[T] {
        &self.slots[window.start..window.end]
    }

    pub(crate) fn set(&mut self, at: usize, value: T) -> T {
        std::mem::replace(&mut self.slots[at], value)
    }

    /// Records a view window so structural edits keep its bounds in sync.
    /// Dropped views fall out of the registry lazily.
    pub(crate) fn register(&mut self, window: &Rc<Cell<Window>>) {
        self.windows.push(Rc::downgrade(window));
    }

    /// Inserts `value` before absolute index `at`.
    ///
    /// `actor` is the pre-edit window of the handle the edit was issued
    /// through (the implicit whole-store window for a root), and
    /// `acting` its registered cell, if any. The acting window always
    /// grows; every other window shifts, grows, or stays put depending
    /// on whether the new element lands before, inside, or past it.
    /// Boundary convention: an element inserted at another window's
    /// start belongs to that window only if the actor does not extend
    /// left of it, and one inserted at another window's end belongs to
    /// it only if the actor is nested within it.
    pub(crate) fn insert_before(
        &mut self,
        at: usize,
        value: T,
        actor: Window,
        acting: Option<&Rc<Cell<Window>>>,
    ) {
        self.slots.insert(at, value);
        self.version += 1;
        if let Some(cell) = acting {
            let mut w = cell.get();
            w.end += 1;
            cell.set(w);
        }
        self.renumber(acting, |mut w| {
            if at < w.start || (at == w.start && actor.start < w.start) {
                w.start += 1;
                w.end += 1;
            } else if at < w.end || (at == w.end && actor.start >= w.start && actor.end <= w.end) {
                w.end += 1;
            }
            w
        });
    }

    pub(crate) fn append(&mut self, value: T, actor: Window, acting: Option<&Rc<Cell<Window>>>) {
        self.insert_before(actor.end, value, actor, acting);
    }

    /// Removes and returns the slot at absolute index `at`. Windows
    /// after it shift left; windows containing it shrink.
    pub(crate) fn remove_at(&mut self, at: usize) -> T {
        let value = self.slots.remove(at);
        self.version += 1;
        self.renumber(None, |mut w| {
            if at < w.start {
                w.start -= 1;
                w.end -= 1;
            } else if at < w.end {
                w.end -= 1;
            }
            w
        });
        value
    }

    /// Removes the absolute range `[start, end)`, collapsing any window
    /// portion that fell inside it.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        let removed = end - start;
        self.slots.drain(start..end);
        self.version += 1;
        let collapse = move |at: usize| {
            if at <= start {
                at
            } else if at >= end {
                at - removed
            } else {
                start
            }
        };
        self.renumber(None, |mut w| {
            w.start = collapse(w.start);
            w.end = collapse(w.end);
            w
        });
    }

    fn renumber(&mut self, acting: Option<&Rc<Cell<Window>>>, apply: impl Fn(Window) -> Window) {
        self.windows.retain(|weak| {
            let Some(cell) = weak.upgrade() else {
                return false;
            };
            let skip = acting.is_some_and(|acting| Rc::ptr_eq(&cell, acting));
            if !skip {
                cell.set(apply(cell.get()));
            }
            true
        });
    }
}
