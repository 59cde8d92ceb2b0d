//! crates/logging/src/dump.rs
//! One-level structural dumps of types that opt in through [`Describe`].
//!
//! A dump is a header line followed by one line per field:
//!
//! ```text
//! Debugging Packet 'last':
//! 	u16 port = 8080
//! 	char flag = 'Q'
//! 	string payload = "hi"
//! 	core::option::Option<alloc::string::String> peer = null
//! ```
//!
//! Primitive-like fields use a short label from a fixed table; every other
//! type is labelled with its full type name. Composite fields are rendered with
//! their own textual form and never expanded.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::Arc;

/// How a rendered value is decorated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ValueKind {
    /// Wrapped in single quotes.
    Char,
    /// Wrapped in double quotes.
    Text,
    /// Written as rendered.
    #[default]
    Other,
}

/// A value that can appear as a field in a dump.
pub trait FieldValue {
    /// Label printed before the field name.
    fn type_label() -> Cow<'static, str>;

    /// Decoration applied to the rendered value.
    fn kind() -> ValueKind {
        ValueKind::Other
    }

    /// Textual form of the value, `None` when it is unset.
    fn render(&self) -> Option<String>;
}

/// Types that can list their fields for [`DebugTools::dump_object`].
///
/// Usually implemented with [`describe!`](crate::describe).
///
/// [`DebugTools::dump_object`]: crate::DebugTools::dump_object
pub trait Describe {
    /// Name printed in the dump header.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field>;
}

/// One captured field of a [`Describe`] value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    name: &'static str,
    type_label: Cow<'static, str>,
    kind: ValueKind,
    value: Option<String>,
}

impl Field {
    /// Captures `value` under `name`.
    pub fn new<T: FieldValue + ?Sized>(name: &'static str, value: &T) -> Self {
        Self {
            name,
            type_label: T::type_label(),
            kind: T::kind(),
            value: value.render(),
        }
    }

    /// Builds a field from already rendered parts.
    pub fn from_parts(
        name: &'static str,
        type_label: impl Into<Cow<'static, str>>,
        kind: ValueKind,
        value: Option<String>,
    ) -> Self {
        Self {
            name,
            type_label: type_label.into(),
            kind,
            value,
        }
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type label.
    #[must_use]
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Value decoration.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Value with quoting applied; unset values read `null`.
    #[must_use]
    pub fn formatted_value(&self) -> Cow<'_, str> {
        match (&self.value, self.kind) {
            (None, _) => Cow::Borrowed("null"),
            (Some(value), ValueKind::Char) => Cow::Owned(format!("'{value}'")),
            (Some(value), ValueKind::Text) => Cow::Owned(format!("\"{value}\"")),
            (Some(value), ValueKind::Other) => Cow::Borrowed(value),
        }
    }

    /// The dump line for this field.
    #[must_use]
    pub fn line(&self) -> String {
        format!("\t{} {} = {}", self.type_label, self.name, self.formatted_value())
    }
}

/// Renders the header and field lines of a dump of `object` named `name`.
pub fn render_dump<T: Describe + ?Sized>(object: &T, name: &str) -> Vec<String> {
    let fields = object.fields();
    let mut lines = Vec::with_capacity(fields.len() + 1);
    lines.push(format!("Debugging {} '{name}':", object.type_name()));
    lines.extend(fields.iter().map(Field::line));
    lines
}

/// Last path segment of a type name, ignoring generic arguments.
///
/// `alloc::vec::Vec<u8>` becomes `Vec`.
#[must_use]
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

macro_rules! primitive_field_value {
    ($($ty:ty => $label:literal),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn type_label() -> Cow<'static, str> {
                    Cow::Borrowed($label)
                }

                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

primitive_field_value! {
    bool => "bool",
    u8 => "u8",
    i8 => "i8",
    i16 => "i16",
    u16 => "u16",
    i32 => "i32",
    u32 => "u32",
    i64 => "i64",
    u64 => "u64",
    i128 => "i128",
    u128 => "u128",
    isize => "isize",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
}

impl FieldValue for char {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn kind() -> ValueKind {
        ValueKind::Char
    }

    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl FieldValue for str {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed("string")
    }

    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn render(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl FieldValue for String {
    fn type_label() -> Cow<'static, str> {
        <str as FieldValue>::type_label()
    }

    fn kind() -> ValueKind {
        ValueKind::Text
    }

    fn render(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn type_label() -> Cow<'static, str> {
        T::type_label()
    }

    fn kind() -> ValueKind {
        T::kind()
    }

    fn render(&self) -> Option<String> {
        (**self).render()
    }
}

macro_rules! delegating_field_value {
    ($($wrapper:ident),*) => {
        $(
            impl<T: FieldValue + ?Sized> FieldValue for $wrapper<T> {
                fn type_label() -> Cow<'static, str> {
                    T::type_label()
                }

                fn kind() -> ValueKind {
                    T::kind()
                }

                fn render(&self) -> Option<String> {
                    (**self).render()
                }
            }
        )*
    };
}

delegating_field_value!(Box, Rc, Arc);

impl<T: FieldValue> FieldValue for Option<T> {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    fn kind() -> ValueKind {
        T::kind()
    }

    fn render(&self) -> Option<String> {
        self.as_ref().and_then(FieldValue::render)
    }
}

/// Sequences render their elements separated by spaces.
impl<T: FieldValue> FieldValue for [T] {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    fn render(&self) -> Option<String> {
        let mut out = String::new();
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            match item.render() {
                Some(text) => out.push_str(&text),
                None => out.push_str("null"),
            }
        }
        Some(out)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    fn render(&self) -> Option<String> {
        self.as_slice().render()
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    fn render(&self) -> Option<String> {
        self.as_slice().render()
    }
}

/// Renders values through [`Debug`](std::fmt::Debug) under their full type name.
///
/// Handy for fields whose type has no [`FieldValue`] impl:
/// `Field::new("addr", &Debugged(&addr))`.
#[derive(Clone, Copy, Debug)]
pub struct Debugged<'a, T: ?Sized>(pub &'a T);

impl<T: std::fmt::Debug + ?Sized> FieldValue for Debugged<'_, T> {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<T>())
    }

    fn render(&self) -> Option<String> {
        let mut out = String::new();
        let _ = write!(out, "{:?}", self.0);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Packet {
        port: u16,
        flag: char,
        payload: String,
        peer: Option<String>,
        hops: Vec<u8>,
    }

    impl Describe for Packet {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new("port", &self.port),
                Field::new("flag", &self.flag),
                Field::new("payload", &self.payload),
                Field::new("peer", &self.peer),
                Field::new("hops", &self.hops),
            ]
        }
    }

    fn packet() -> Packet {
        Packet {
            port: 8080,
            flag: 'Q',
            payload: "hi".into(),
            peer: None,
            hops: vec![1, 2, 3],
        }
    }

    #[test]
    fn dump_lists_header_then_fields() {
        let lines = render_dump(&packet(), "last");
        assert_eq!(
            lines,
            [
                "Debugging Packet 'last':",
                "\tu16 port = 8080",
                "\tchar flag = 'Q'",
                "\tstring payload = \"hi\"",
                "\tcore::option::Option<alloc::string::String> peer = null",
                "\talloc::vec::Vec<u8> hops = 1 2 3",
            ]
        );
    }

    #[test]
    fn present_option_keeps_inner_quoting() {
        let field = Field::new("peer", &Some(String::from("10.0.0.1")));
        assert_eq!(field.formatted_value(), "\"10.0.0.1\"");
    }

    #[test]
    fn references_and_boxes_delegate() {
        let text = "hi";
        assert_eq!(Field::new("a", &text).line(), "\tstring a = \"hi\"");
        assert_eq!(Field::new("b", &Box::new(7_i64)).line(), "\ti64 b = 7");
        assert_eq!(Field::new("c", &Arc::new('x')).line(), "\tchar c = 'x'");
    }

    #[test]
    fn primitive_labels_are_short() {
        assert_eq!(bool::type_label(), "bool");
        assert_eq!(f64::type_label(), "f64");
        assert_eq!(u128::type_label(), "u128");
        assert_eq!(<&str>::type_label(), "string");
    }

    #[test]
    fn nested_none_in_sequence_reads_null() {
        let values = [Some(1_u8), None, Some(3)];
        assert_eq!(Field::new("v", &values).formatted_value(), "1 null 3");
    }

    #[test]
    fn debugged_uses_debug_output() {
        let pair = (1, "a");
        let field = Field::new("pair", &Debugged(&pair));
        assert_eq!(field.line(), "\t(i32, &str) pair = (1, \"a\")");
    }

    #[test]
    fn short_type_name_strips_paths_and_generics() {
        assert_eq!(short_type_name("alloc::vec::Vec<u8>"), "Vec");
        assert_eq!(short_type_name("my_crate::net::Packet"), "Packet");
        assert_eq!(short_type_name("u8"), "u8");
    }

    #[test]
    fn from_parts_round_trips_accessors() {
        let field = Field::from_parts("id", "Uuid", ValueKind::Other, Some("42".into()));
        assert_eq!(field.name(), "id");
        assert_eq!(field.type_label(), "Uuid");
        assert_eq!(field.kind(), ValueKind::Other);
        assert_eq!(field.formatted_value(), "42");
    }
}
