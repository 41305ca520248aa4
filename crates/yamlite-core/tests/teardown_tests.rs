//! Teardown of deep documents under an allocation-tracking allocator.
//!
//! The allocator keeps a per-thread count of live allocations, so each test
//! sees only its own traffic. A leak leaves the count above its starting
//! point; a double release drives it below.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use yamlite_core::document::release;
use yamlite_core::{parse, Document, Mapping, Value};

struct Tracking;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for Tracking {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            adjust(1);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            adjust(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        adjust(-1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: Tracking = Tracking;

fn live() -> isize {
    LIVE.with(Cell::get)
}

fn nested_mappings(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}k{level}:\n", "  ".repeat(level)))
        .collect()
}

fn nested_arrays(depth: usize) -> String {
    format!("deep: {}1{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn deep_mapping_chain_is_fully_released() {
    let input = nested_mappings(1000);
    // Warm up once so lazily registered logging callsites are not counted.
    drop(parse(&input).unwrap());

    let before = live();
    let doc = parse(&input).unwrap();
    assert!(live() > before);

    let mut current = doc.get("k0").unwrap();
    for level in 1..1000 {
        current = current.get(&format!("k{level}")).unwrap();
    }
    assert_eq!(current.len().unwrap(), 0);

    drop(doc);
    assert_eq!(live(), before);
}

#[test]
fn deep_array_chain_is_fully_released() {
    let input = nested_arrays(1000);
    drop(parse(&input).unwrap());

    let before = live();
    let doc = parse(&input).unwrap();

    let mut current = doc.get("deep").unwrap();
    let mut levels = 0;
    while let Value::Sequence(items) = current {
        assert_eq!(items.len(), 1);
        current = &items[0];
        levels += 1;
    }
    assert_eq!(levels, 1000);
    assert_eq!(current, &Value::Integer(1));

    drop(doc);
    assert_eq!(live(), before);
}

#[test]
fn very_deep_tree_is_released_without_recursion() {
    let before = live();

    let mut value = Value::Integer(0);
    for level in 0..100_000 {
        value = if level % 2 == 0 {
            Value::Sequence(vec![value, Value::Text("leaf".into())])
        } else {
            let mut entries = Mapping::new();
            entries.insert("child".into(), value);
            Value::Mapping(entries)
        };
    }
    let mut root = Mapping::new();
    root.insert("root".into(), value);
    let doc = Document::from(root);
    assert!(live() > before);

    drop(doc);
    assert_eq!(live(), before);
}

#[test]
fn extracted_mapping_is_released_without_recursion() {
    let before = live();

    let mut value = Value::Integer(0);
    for _ in 0..100_000 {
        let mut entries = Mapping::new();
        entries.insert("child".into(), value);
        value = Value::Mapping(entries);
    }
    let mut root = Mapping::new();
    root.insert("root".into(), value);

    let mapping = Document::from(root).into_mapping();
    assert_eq!(mapping.len(), 1);

    release(mapping);
    assert_eq!(live(), before);
}

#[test]
fn empty_document_releases_nothing_extra() {
    let before = live();
    drop(Document::new());
    drop(parse("").unwrap());
    assert_eq!(live(), before);
}
