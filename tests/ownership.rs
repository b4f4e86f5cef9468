//! Release-exactly-once checks.
//!
//! A counting global allocator tracks live allocations per thread. Each test
//! builds, copies, reassigns, and drops trees inside `balanced`, which asserts
//! that every allocation made in the closure was freed exactly once by the
//! time it returns.

use jsonmodel::json::{Array, Object, Value};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct CountingAlloc;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static TOTAL: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|c| c.set(c.get() + 1));
            let _ = TOTAL.try_with(|c| c.set(c.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|c| c.set(c.get() - 1));
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live() -> isize {
    LIVE.with(Cell::get)
}

fn total() -> usize {
    TOTAL.with(Cell::get)
}

/// Run `f` and assert it left no allocation behind. Returns how many
/// allocations it made.
fn balanced(f: impl FnOnce()) -> usize {
    let live_before = live();
    let total_before = total();
    f();
    assert_eq!(live(), live_before, "allocations leaked or double-freed");
    total() - total_before
}

fn build_tree(width: usize, depth: usize) -> Value {
    if depth == 0 {
        return Value::from(format!("leaf-{width}"));
    }
    let mut obj = Object::new();
    for i in 0..width {
        let children: Array = (0..width).map(|_| build_tree(width, depth - 1)).collect();
        obj.insert(format!("k{i}"), children);
    }
    obj.insert("flag", true);
    Value::Object(obj)
}

#[test]
fn build_then_drop_is_balanced() {
    let allocations = balanced(|| {
        let tree = build_tree(3, 3);
        assert!(tree.is_object());
        drop(tree);
    });
    assert!(allocations > 0);
}

#[test]
fn clone_then_drop_both_is_balanced() {
    balanced(|| {
        let tree = build_tree(3, 2);
        let copy = tree.clone();
        drop(tree);
        // The copy must still be intact after the original is gone
        assert!(copy.get("k0").is_some());
        drop(copy);
    });
}

#[test]
fn clone_allocates_a_full_new_subtree() {
    let tree = build_tree(2, 2);
    let copies = balanced(|| {
        let copy = tree.clone();
        drop(copy);
    });
    assert!(copies > 0);
}

#[test]
fn assignment_is_balanced() {
    balanced(|| {
        let source = build_tree(2, 2);
        let mut target = build_tree(3, 1);
        assert_ne!(target, source);
        target = source.clone();
        assert_eq!(target, source);

        let mut other = build_tree(1, 3);
        other.clone_from(&source);
        assert_eq!(other, source);
    });
}

#[test]
#[allow(clippy::redundant_clone)]
fn self_assignment_is_balanced() {
    balanced(|| {
        let mut tree = build_tree(2, 2);
        let before = tree.to_string();
        tree = tree.clone();
        assert_eq!(tree.to_string(), before);
    });
}

#[test]
fn overwrite_releases_previous_slot() {
    balanced(|| {
        let mut arr = Array::from(vec![build_tree(2, 2), Value::Null]);
        let _ = arr.set(0, "replacement");
        arr[1] = build_tree(2, 1);

        let mut obj = Object::new();
        obj.insert("slot", build_tree(2, 2));
        obj.insert("slot", build_tree(1, 1));
        if let Some(v) = obj.get_mut("slot") {
            *v = Value::from("direct");
        }
        assert_eq!(obj.len(), 1);
    });
}

#[test]
fn serialization_does_not_retain_memory() {
    let tree = build_tree(3, 2);
    balanced(|| {
        let text = tree.to_string();
        let compact = tree.to_compact_string();
        assert!(text.len() > compact.len());
    });
}
