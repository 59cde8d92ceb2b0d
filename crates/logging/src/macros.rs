//! crates/logging/src/macros.rs
//! Call-site macros for gated logging and dump support.

/// Writes a formatted line through a [`ComponentLogger`](crate::ComponentLogger)
/// when its category switch is on.
///
/// The enclosing function is recorded as the caller and the message is only
/// formatted once the gate has passed.
///
/// ```
/// use std::sync::Arc;
/// use logging::{CaptureSink, DebugTools, SettingsFile, debug_log};
///
/// let sink = Arc::new(CaptureSink::new());
/// let tools = Arc::new(DebugTools::new(SettingsFile::in_memory(), sink.clone()));
/// let ui = tools.register("ui");
///
/// // Force-off is on by default, so nothing is written.
/// debug_log!(ui, "Layout", "{} widgets", 3);
/// assert!(sink.is_empty());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.log_at($crate::call_site!(), $category, || ::std::format!($($arg)+))
    };
}

/// Like [`debug_log!`], additionally throttled by the pacing clock.
///
/// Without `delay = ...;` the facility's default cooldown applies.
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use logging::{CaptureSink, DebugTools, SettingsFile, paced_log};
///
/// let sink = Arc::new(CaptureSink::new());
/// let tools = Arc::new(DebugTools::new(SettingsFile::in_memory(), sink.clone()));
/// tools.set_force_off(false).unwrap();
/// tools.set_developer_mode(true).unwrap();
/// let ui = tools.register("ui");
///
/// for frame in 0..3 {
///     paced_log!(ui, "Frames", delay = Duration::from_millis(32); "frame {frame}");
///     tools.tick(Duration::from_millis(16));
/// }
/// assert_eq!(sink.len(), 2);
/// ```
#[macro_export]
macro_rules! paced_log {
    ($logger:expr, $category:expr, delay = $delay:expr; $($arg:tt)+) => {
        $logger.paced_log_at(
            $crate::call_site!(),
            $category,
            ::std::option::Option::Some($delay),
            || ::std::format!($($arg)+),
        )
    };
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.paced_log_at(
            $crate::call_site!(),
            $category,
            ::std::option::Option::None,
            || ::std::format!($($arg)+),
        )
    };
}

/// Implements [`Describe`](crate::Describe) by listing fields.
///
/// ```
/// use logging::{Describe, describe, render_dump};
///
/// struct Player {
///     name: String,
///     health: i32,
/// }
///
/// describe!(Player { name, health });
///
/// let player = Player { name: "Ada".into(), health: 90 };
/// assert_eq!(
///     render_dump(&player, "p1"),
///     ["Debugging Player 'p1':", "\tstring name = \"Ada\"", "\ti32 health = 90"]
/// );
/// ```
#[macro_export]
macro_rules! describe {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Describe for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field> {
                ::std::vec![$($crate::Field::new(::std::stringify!($field), &self.$field)),*]
            }
        }
    };
}

/// Lets local types that implement [`Display`](std::fmt::Display) appear as
/// dump fields, labelled with their full type name.
///
/// ```
/// use std::fmt;
/// use logging::{Field, display_field_value};
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// display_field_value!(Celsius);
///
/// let field = Field::new("temp", &Celsius(21.5));
/// assert!(field.line().ends_with("Celsius temp = 21.5C"));
/// ```
#[macro_export]
macro_rules! display_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FieldValue for $ty {
                fn type_label() -> ::std::borrow::Cow<'static, str> {
                    ::std::borrow::Cow::Borrowed(::std::any::type_name::<$ty>())
                }

                fn render(&self) -> ::std::option::Option<::std::string::String> {
                    ::std::option::Option::Some(::std::string::ToString::to_string(self))
                }
            }
        )+
    };
}
