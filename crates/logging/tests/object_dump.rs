//! Integration tests for null checks and object dumps.
//!
//! Both entry points bypass the switch gate, so they are exercised with the
//! default settings where force-off is still on.

use std::sync::Arc;

use logging::{
    CaptureSink, DebugTools, Debugged, Describe, Field, Level, SettingsFile, describe,
    display_field_value,
};

fn setup() -> (Arc<DebugTools>, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::new());
    let tools = Arc::new(DebugTools::new(SettingsFile::in_memory(), sink.clone()));
    (tools, sink)
}

struct Inventory {
    slot: char,
    label: String,
    owner: Option<String>,
    count: u32,
    weight: f32,
    sealed: bool,
    tags: Vec<String>,
}

describe!(Inventory {
    slot,
    label,
    owner,
    count,
    weight,
    sealed,
    tags,
});

fn inventory() -> Inventory {
    Inventory {
        slot: 'Q',
        label: "hi".into(),
        owner: None,
        count: 3,
        weight: 1.5,
        sealed: false,
        tags: vec!["a".into(), "b".into()],
    }
}

#[derive(Debug)]
enum Mode {
    Idle,
}

struct Machine {
    mode: Mode,
    revision: Revision,
}

struct Revision(u8);

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

display_field_value!(Revision);

impl Describe for Machine {
    fn type_name(&self) -> std::borrow::Cow<'static, str> {
        "Machine<v2>".into()
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("mode", &Debugged(&self.mode)),
            Field::new("revision", &self.revision),
        ]
    }
}

// ============================================================================
// Null Check
// ============================================================================

/// Verifies a missing object warns and returns false.
#[test]
fn null_check_on_none_warns() {
    let (tools, sink) = setup();
    assert!(!tools.null_check::<Inventory>(None, "x", false));

    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Warning);
    assert!(records[0].line.contains("x is null"));
}

/// Verifies a present object only logs when asked to.
#[test]
fn null_check_on_some_logs_on_request() {
    let (tools, sink) = setup();
    let item = inventory();

    assert!(tools.null_check(Some(&item), "x", false));
    assert!(sink.is_empty());

    assert!(tools.null_check(Some(&item), "x", true));
    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert!(records[0].line.contains("x is not null"));
}

/// Verifies null checks through a component logger behave the same.
#[test]
fn null_check_through_logger() {
    let (tools, sink) = setup();
    let net = tools.register("net");
    let missing: Option<&str> = None;
    assert!(!net.null_check(missing, "peer", true));
    assert_eq!(sink.lines(), ["peer is null"]);
}

// ============================================================================
// Object Dump
// ============================================================================

/// Verifies every field is written with its label and quoting.
#[test]
fn dump_formats_fields() {
    let (tools, sink) = setup();
    tools.dump_object(Some(&inventory()), "bag");

    let records = sink.drain();
    assert!(records.iter().all(|record| record.level == Level::Info));
    let lines: Vec<_> = records.into_iter().map(|record| record.line).collect();
    assert_eq!(
        lines,
        [
            "Debugging Inventory 'bag':",
            "\tchar slot = 'Q'",
            "\tstring label = \"hi\"",
            "\tcore::option::Option<alloc::string::String> owner = null",
            "\tu32 count = 3",
            "\tf32 weight = 1.5",
            "\tbool sealed = false",
            "\talloc::vec::Vec<alloc::string::String> tags = a b",
        ]
    );
}

/// Verifies composite fields use their own rendering and full type names.
#[test]
fn dump_renders_composites_one_level() {
    let (tools, sink) = setup();
    let machine = Machine {
        mode: Mode::Idle,
        revision: Revision(2),
    };
    tools.dump_object(Some(&machine), "m");

    assert_eq!(
        sink.lines(),
        [
            "Debugging Machine<v2> 'm':",
            "\tobject_dump::Mode mode = Idle",
            "\tobject_dump::Revision revision = v2",
        ]
    );
}

/// Verifies dumping nothing reports the null object.
#[test]
fn dump_of_none_reports_error() {
    let (tools, sink) = setup();
    let net = tools.register("net");
    net.dump_object::<Inventory>(None, "bag");

    let records = sink.drain();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, "bag is null");
    assert_eq!(records[1].level, Level::Error);
    assert_eq!(records[1].line, "Can't debug null object");
}

/// Verifies dumps work on trait objects.
#[test]
fn dump_accepts_trait_objects() {
    let (tools, sink) = setup();
    let item = inventory();
    let described: &dyn Describe = &item;
    tools.dump_object(Some(described), "dyn");
    assert_eq!(sink.lines()[0], "Debugging Inventory 'dyn':");
}
