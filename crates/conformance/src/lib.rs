//! Conformance suite for the `window_list` container.
//!
//! Each check exercises one public contract through the crate's API and
//! reports a message on violation. The companion binary runs the whole
//! suite and prints pass/fail counts; `run_all` is also asserted from a
//! unit test so `cargo test` covers the suite.

use std::hash::{DefaultHasher, Hash, Hasher};
use window_list::{Error, WindowList};

/// Result of one named check.
pub struct Outcome {
    pub name: &'static str,
    pub result: Result<(), String>,
}

type Check = fn() -> Result<(), String>;

const CHECKS: &[(&str, Check)] = &[
    ("build_and_snapshot", build_and_snapshot),
    ("size_and_emptiness", size_and_emptiness),
    ("empty_subrange", empty_subrange),
    ("subrange_window", subrange_window),
    ("view_aliasing", view_aliasing),
    ("cursor_at_end", cursor_at_end),
    ("cursor_remove_after_advance", cursor_remove_after_advance),
    ("cursor_guard_state", cursor_guard_state),
    ("stack_discipline", stack_discipline),
    ("insert_remove_round_trip", insert_remove_round_trip),
    ("equality_and_hashing", equality_and_hashing),
    ("buffer_snapshot_identity", buffer_snapshot_identity),
    ("error_kinds", error_kinds),
];

/// Runs every check and collects the outcomes in order.
pub fn run_all() -> Vec<Outcome> {
    CHECKS
        .iter()
        .map(|&(name, check)| Outcome {
            name,
            result: check(),
        })
        .collect()
}

macro_rules! ensure {
    ($cond:expr, $($msg:tt)+) => {
        if !$cond {
            return Err(format!($($msg)+));
        }
    };
}

fn ok<T>(result: window_list::Result<T>) -> Result<T, String> {
    result.map_err(|error| format!("unexpected error: {error}"))
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn build_and_snapshot() -> Result<(), String> {
    let mut s = WindowList::new();
    s.add(1);
    s.add(2);
    s.add(3);
    ensure!(s.to_vec() == vec![1, 2, 3], "expected [1, 2, 3], got {s:?}");
    Ok(())
}

fn size_and_emptiness() -> Result<(), String> {
    let mut s = WindowList::new();
    ensure!(s.is_empty() == (s.len() == 0), "emptiness disagrees with size");
    for value in 0..4 {
        s.add(value);
        ensure!(
            s.to_vec().len() == s.len(),
            "snapshot length {} != size {}",
            s.to_vec().len(),
            s.len()
        );
        ensure!(!s.is_empty(), "non-empty sequence reported empty");
    }
    Ok(())
}

fn empty_subrange() -> Result<(), String> {
    let s: WindowList<i64> = (1..=5).collect();
    let empty = ok(s.subrange(2, 2))?;
    ensure!(empty.is_empty(), "subrange(2, 2) is not empty");
    ensure!(empty.len() == 0, "subrange(2, 2) has size {}", empty.len());
    Ok(())
}

fn subrange_window() -> Result<(), String> {
    let s: WindowList<i64> = (1..=5).collect();
    let view = ok(s.subrange(2, 4))?;
    ensure!(view.to_vec() == vec![3, 4], "expected [3, 4], got {view:?}");
    Ok(())
}

fn view_aliasing() -> Result<(), String> {
    let mut root: WindowList<i64> = (1..=5).collect();
    let mut view = ok(root.subrange(1, 4))?;
    ok(view.set(0, 20))?;
    ensure!(ok(root.get(1))? == 20, "replacement through view invisible in root");
    ok(view.insert(0, 9))?;
    ensure!(
        root.to_vec() == vec![1, 9, 20, 3, 4, 5],
        "structural edit through view invisible in root: {root:?}"
    );
    ensure!(root.len() == 6, "root size did not grow, got {}", root.len());
    Ok(())
}

fn cursor_at_end() -> Result<(), String> {
    let mut s: WindowList<i64> = (1..=5).collect();
    let mut cur = ok(s.cursor_at(5))?;
    ensure!(
        cur.advance() == Err(Error::NoSuchElement),
        "advance past the end did not fail"
    );
    ensure!(cur.retreat() == Ok(5), "first retreat should yield 5");
    ensure!(cur.retreat() == Ok(4), "second retreat should yield 4");
    Ok(())
}

fn cursor_remove_after_advance() -> Result<(), String> {
    let mut s: WindowList<i64> = (1..=5).collect();
    let mut cur = s.cursor();
    ensure!(cur.advance() == Ok(1), "first advance should yield 1");
    ok(cur.remove())?;
    drop(cur);
    ensure!(
        s.to_vec() == vec![2, 3, 4, 5],
        "expected [2, 3, 4, 5], got {s:?}"
    );
    Ok(())
}

fn cursor_guard_state() -> Result<(), String> {
    let mut s: WindowList<i64> = (1..=3).collect();
    let mut cur = s.cursor();
    ensure!(
        cur.remove() == Err(Error::IllegalState),
        "remove before any step did not fail"
    );
    ensure!(cur.advance() == Ok(1), "advance should yield 1");
    ok(cur.insert(9))?;
    ensure!(
        cur.remove() == Err(Error::IllegalState),
        "remove after insert did not fail"
    );
    drop(cur);
    ensure!(s.to_vec() == vec![1, 9, 2, 3], "expected [1, 9, 2, 3], got {s:?}");
    Ok(())
}

fn stack_discipline() -> Result<(), String> {
    let mut s = WindowList::new();
    for value in 1..=5 {
        s.push(value);
    }
    ensure!(s.search(&3) == Some(3), "search(3) should be 3");
    ensure!(s.search(&10).is_none(), "search(10) should miss");
    ensure!(s.search(&5) == Some(1), "the most recent push is at distance 1");
    ensure!(ok(s.pop())? == 5, "pop should yield 5");
    ensure!(s.search(&5).is_none(), "popped element still found");
    Ok(())
}

fn insert_remove_round_trip() -> Result<(), String> {
    let mut s: WindowList<i64> = (1..=5).collect();
    let before = s.to_vec();
    for index in 0..=s.len() {
        ok(s.insert(index, 42))?;
        ensure!(ok(s.remove(index))? == 42, "round trip removed a stranger");
        ensure!(
            s.to_vec() == before,
            "round trip at {index} changed contents: {s:?}"
        );
    }
    Ok(())
}

fn equality_and_hashing() -> Result<(), String> {
    let a: WindowList<i64> = (1..=3).collect();
    let b: WindowList<i64> = (1..=3).collect();
    let reordered: WindowList<i64> = vec![3, 2, 1].into_iter().collect();
    ensure!(a == a, "equality is not reflexive");
    ensure!(a == b && b == a, "equality is not symmetric");
    ensure!(a != reordered, "reordered sequences compare equal");
    ensure!(hash_of(&a) == hash_of(&b), "equal sequences hash differently");
    ensure!(
        hash_of(&a) != hash_of(&reordered),
        "reordered sequences hash identically"
    );
    Ok(())
}

fn buffer_snapshot_identity() -> Result<(), String> {
    let s: WindowList<i64> = (1..=3).collect();

    let buffer = vec![7_i64; 5];
    let ptr = buffer.as_ptr();
    let out = s.copy_into(buffer);
    ensure!(out.as_ptr() == ptr, "sufficient buffer was not reused");
    ensure!(out == vec![1, 2, 3, 0, 0], "trailing slots not padded: {out:?}");

    let out = s.copy_into(vec![7_i64; 2]);
    ensure!(out.len() == 3, "insufficient buffer not replaced by exact fit");
    ensure!(out == vec![1, 2, 3], "fresh snapshot is wrong: {out:?}");
    Ok(())
}

fn error_kinds() -> Result<(), String> {
    let mut s: WindowList<i64> = (1..=3).collect();
    ensure!(
        s.get(3) == Err(Error::IndexOutOfRange { index: 3, len: 3 }),
        "out-of-range get did not fail"
    );
    ensure!(
        s.insert(4, 0) == Err(Error::IndexOutOfRange { index: 4, len: 3 }),
        "out-of-range insert did not fail"
    );
    s.clear();
    ensure!(s.peek() == Err(Error::EmptyStack), "peek on empty did not fail");
    ensure!(s.pop() == Err(Error::EmptyStack), "pop on empty did not fail");

    let mut root: WindowList<i64> = (1..=3).collect();
    let mut view = ok(root.subrange(0, 2))?;
    let mut cur = view.cursor();
    ensure!(cur.advance() == Ok(1), "advance should yield 1");
    root.add(9);
    ensure!(
        cur.advance() == Err(Error::StaleCursor),
        "cursor survived a foreign structural edit"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_all;

    #[test]
    fn suite_passes() {
        for outcome in run_all() {
            if let Err(message) = &outcome.result {
                panic!("{} failed: {message}", outcome.name);
            }
        }
    }
}
