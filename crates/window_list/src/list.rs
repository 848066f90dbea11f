use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::store::{Store, Window};

/// An ordered, growable sequence exposing list, membership-collection,
/// and LIFO stack operations over a `[start, end)` window into a shared
/// backing store.
///
/// - A *root* list owns a fresh store and always spans all of it.
/// - [`WindowList::subrange`] carves a *view*: another `WindowList`
///   aliasing the same store over a narrower window. Edits through any
///   handle are visible through every overlapping handle; structural
///   edits renumber the other windows in place.
/// - Element slots live behind a shared `RefCell`, so accessors return
///   clones rather than borrows.
/// - The stack's top is the highest index of the window.
///
/// An element type with an absent sentinel is spelled `Option<U>`; the
/// sentinel then matches only itself, as plain value equality.
pub struct WindowList<T> {
    store: Rc<RefCell<Store<T>>>,
    /// `None` marks a root, whose window is implicitly the whole store.
    window: Option<Rc<Cell<Window>>>,
}

impl<T> WindowList<T> {
    /// Creates an empty root list with its own backing store.
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(Store::new())),
            window: None,
        }
    }

    fn bounds(&self) -> Window {
        match &self.window {
            None => Window {
                start: 0,
                end: self.store.borrow().len(),
            },
            Some(cell) => cell.get(),
        }
    }

    pub(crate) fn store_version(&self) -> u64 {
        self.store.borrow().version()
    }

    pub fn len(&self) -> usize {
        self.bounds().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the logical end of the window. Always succeeds
    /// and reports `true`, matching the membership-collection contract.
    pub fn add(&mut self, value: T) -> bool {
        let w = self.bounds();
        self.store
            .borrow_mut()
            .append(value, w, self.window.as_ref());
        true
    }

    /// Inserts `value` at `index`, shifting subsequent elements right.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let w = self.bounds();
        if index > w.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: w.len(),
            });
        }
        self.store
            .borrow_mut()
            .insert_before(w.start + index, value, w, self.window.as_ref());
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let w = self.bounds();
        if index >= w.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: w.len(),
            });
        }
        Ok(self.store.borrow_mut().remove_at(w.start + index))
    }

    /// Replaces the element at `index` in place, returning the previous
    /// value. Replacement is non-structural: windows and live cursors
    /// are unaffected.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let w = self.bounds();
        if index >= w.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: w.len(),
            });
        }
        Ok(self.store.borrow_mut().set(w.start + index, value))
    }

    /// Removes and returns the top of the stack.
    pub fn pop(&mut self) -> Result<T> {
        let w = self.bounds();
        if w.len() == 0 {
            return Err(Error::EmptyStack);
        }
        Ok(self.store.borrow_mut().remove_at(w.end - 1))
    }

    /// Empties the window. A root clear empties the whole store and
    /// collapses every view; a view clear removes only its own range and
    /// shrinks the windows that contained it.
    pub fn clear(&mut self) {
        let w = self.bounds();
        self.store.borrow_mut().remove_range(w.start, w.end);
    }

    /// Returns the sub-sequence `[from, to)` of this window.
    ///
    /// An empty request (`from == to`) yields a fresh independent list;
    /// otherwise the result is a view sharing this list's store.
    pub fn subrange(&self, from: usize, to: usize) -> Result<WindowList<T>> {
        let w = self.bounds();
        if to > w.len() {
            return Err(Error::IndexOutOfRange {
                index: to,
                len: w.len(),
            });
        }
        if from > to {
            return Err(Error::IndexOutOfRange {
                index: from,
                len: w.len(),
            });
        }
        if from == to {
            return Ok(WindowList::new());
        }
        let cell = Rc::new(Cell::new(Window {
            start: w.start + from,
            end: w.start + to,
        }));
        self.store.borrow_mut().register(&cell);
        Ok(WindowList {
            store: Rc::clone(&self.store),
            window: Some(cell),
        })
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor positioned so that its first `advance` yields
    /// the element at `index`.
    pub fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_, T>> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(Cursor::new(self, index))
    }
}

impl<T: Clone> WindowList<T> {
    pub fn get(&self, index: usize) -> Result<T> {
        let w = self.bounds();
        if index >= w.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: w.len(),
            });
        }
        let store = self.store.borrow();
        Ok(store.get(w.start + index).clone())
    }

    /// Reads the top of the stack without removing it.
    pub fn peek(&self) -> Result<T> {
        let w = self.bounds();
        if w.len() == 0 {
            return Err(Error::EmptyStack);
        }
        let store = self.store.borrow();
        Ok(store.get(w.end - 1).clone())
    }

    /// Pushes `value` onto the stack and hands the argument back.
    pub fn push(&mut self, value: T) -> T {
        self.add(value.clone());
        value
    }

    /// Snapshots the window in order.
    pub fn to_vec(&self) -> Vec<T> {
        let w = self.bounds();
        self.store.borrow().slice(w).to_vec()
    }

    /// Copies the window into `buffer` when it is long enough, padding
    /// the trailing slots with `T::default()` (the absent sentinel for
    /// `Option` elements) and returning the same allocation. A too-short
    /// buffer is returned untouched in favor of a freshly allocated
    /// exact-size snapshot, so the two cases stay distinguishable by
    /// identity.
    pub fn copy_into(&self, mut buffer: Vec<T>) -> Vec<T>
    where
        T: Default,
    {
        let w = self.bounds();
        if buffer.len() < w.len() {
            return self.to_vec();
        }
        let store = self.store.borrow();
        for (slot, value) in buffer.iter_mut().zip(store.slice(w)) {
            *slot = value.clone();
        }
        for slot in buffer.iter_mut().skip(w.len()) {
            *slot = T::default();
        }
        drop(store);
        buffer
    }

    /// Appends every element of `other` in order. Reports `false`
    /// without modification when `other` is empty.
    pub fn add_all(&mut self, other: &[T]) -> bool {
        if other.is_empty() {
            return false;
        }
        for value in other {
            self.add(value.clone());
        }
        true
    }

    /// Inserts every element of `other`, in order, starting at `index`.
    /// Reports `Ok(false)` without modification when `other` is empty.
    pub fn insert_all(&mut self, index: usize, other: &[T]) -> Result<bool> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if other.is_empty() {
            return Ok(false);
        }
        for (offset, value) in other.iter().enumerate() {
            self.insert(index + offset, value.clone())?;
        }
        Ok(true)
    }
}

impl<T: PartialEq> WindowList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first value-equal element, if any.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let w = self.bounds();
        let store = self.store.borrow();
        store.slice(w).iter().position(|v| v == value)
    }

    /// Position of the last value-equal element, if any.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let w = self.bounds();
        let store = self.store.borrow();
        store.slice(w).iter().rposition(|v| v == value)
    }

    /// Removes the first occurrence of `value`, scanning from the window
    /// start. Reports whether anything was removed.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// True iff every element of `other` occurs in this sequence.
    /// Duplicates in `other` are not multiplicity-checked.
    pub fn contains_all(&self, other: &[T]) -> bool {
        other.iter().all(|value| self.contains(value))
    }

    /// Removes one first occurrence per element of `other`, in `other`'s
    /// order. Reports whether at least one removal happened.
    pub fn remove_all(&mut self, other: &[T]) -> bool {
        let mut changed = false;
        for value in other {
            changed |= self.remove_item(value);
        }
        changed
    }

    /// Removes every element not present in `other`. Reports whether the
    /// sequence was modified; an empty sequence always reports `false`.
    pub fn retain_all(&mut self, other: &[T]) -> bool {
        let mut changed = false;
        let mut index = 0;
        while index < self.len() {
            let keep = {
                let w = self.bounds();
                let store = self.store.borrow();
                other.contains(store.get(w.start + index))
            };
            if keep {
                index += 1;
            } else {
                changed |= self.remove(index).is_ok();
            }
        }
        changed
    }

    /// 1-based distance from the top of the stack to the nearest
    /// value-equal element, or `None` when absent.
    pub fn search(&self, value: &T) -> Option<usize> {
        let w = self.bounds();
        let store = self.store.borrow();
        store
            .slice(w)
            .iter()
            .rev()
            .position(|v| v == value)
            .map(|distance| distance + 1)
    }
}

impl<T> Default for WindowList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for WindowList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Vec<T> = iter.into_iter().collect();
        Self {
            store: Rc::new(RefCell::new(Store::with_slots(slots))),
            window: None,
        }
    }
}

impl<T: Clone> From<&[T]> for WindowList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

/// Pairwise, order-sensitive value equality over the windows. Vacuously
/// true for two empty sequences.
impl<T: PartialEq> PartialEq for WindowList<T> {
    fn eq(&self, other: &Self) -> bool {
        let (wa, wb) = (self.bounds(), other.bounds());
        if wa.len() != wb.len() {
            return false;
        }
        let (sa, sb) = (self.store.borrow(), other.store.borrow());
        sa.slice(wa) == sb.slice(wb)
    }
}

impl<T: Eq> Eq for WindowList<T> {}

/// Order-sensitive combination of the window's element hashes,
/// consistent with `PartialEq`.
impl<T: Hash> Hash for WindowList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let w = self.bounds();
        self.store.borrow().slice(w).hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for WindowList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds();
        let store = self.store.borrow();
        f.debug_list().entries(store.slice(w).iter()).finish()
    }
}
