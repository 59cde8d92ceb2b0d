//! crates/logging/src/identity.rs
//! Who issued a log call: the component and the calling function.
//!
//! Identity is resolved where the call is written instead of by inspecting the
//! stack at run time. [`component!`](crate::component) names the calling
//! crate, [`function_name!`](crate::function_name) names the enclosing
//! function and [`call_site!`](crate::call_site) bundles the function with its
//! source location. Entry points that cannot use a macro fall back to
//! [`CallSite::caller`], which reports `file:line` through `#[track_caller]`.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Identifier of a client component; namespaces the component's switches.
///
/// Switch tokens such as `net_client.Sockets` use the first `.` to separate
/// component from category, so dots in a component name are stored as `_`,
/// the same way Cargo turns `-` into `_` for `CARGO_CRATE_NAME`.
///
/// ```
/// use logging::ComponentId;
///
/// assert_eq!(ComponentId::new("net.client").as_str(), "net_client");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(String);

impl ComponentId {
    /// Wraps `name` as a component identifier.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.contains('.') {
            Self(name.replace('.', "_"))
        } else {
            Self(name)
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Where a log call was written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site. An empty `function` means the name is unknown.
    #[must_use]
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Captures the location of the caller without a function name.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new("", location.file(), location.line())
    }

    /// Returns the qualified function name, empty when unknown.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the source file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Label rendered in log prefixes: the function name, or `file:line`.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        if self.function.is_empty() {
            Cow::Owned(format!("{}:{}", self.file, self.line))
        } else {
            Cow::Borrowed(self.function)
        }
    }
}

/// Turns the type name of a marker function into the enclosing function path.
///
/// `function_name!` declares a nested `fn __here() {}` and hands its type name
/// here; the marker segment and any closure segments are removed, leaving
/// `crate::module::Type::method`.
#[doc(hidden)]
#[must_use]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    let mut path = raw.strip_suffix("::__here").unwrap_or(raw);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path
}

/// Expands to the calling crate's name as a [`ComponentId`].
///
/// ```
/// let id = logging::component!();
/// assert!(!id.as_str().is_empty());
/// ```
#[macro_export]
macro_rules! component {
    () => {
        $crate::ComponentId::new(::std::env!("CARGO_CRATE_NAME"))
    };
}

/// Expands to the fully qualified path of the enclosing function.
///
/// ```
/// fn connect() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert!(connect().ends_with("::connect"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::identity::trim_function_path(__type_name_of(__here))
    }};
}

/// Expands to a [`CallSite`] for the enclosing function and current line.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new($crate::function_name!(), ::std::file!(), ::std::line!())
    };
}
