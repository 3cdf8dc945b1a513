//! crates/logging/src/source.rs
//! Call-site metadata captured at the point a log macro is invoked.

/// File, line, and enclosing function of a log call.
///
/// Log macros build one of these through [`call_site!`](crate::call_site)
/// so callers never type the metadata themselves.
///
/// # Examples
///
/// ```
/// use logging::CallSite;
///
/// let site = CallSite::new("/src/app/Main.rs", 42, "do_something");
/// assert_eq!(site.base_name(), "Main.rs");
/// assert_eq!(site.line(), 42);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
    function: &'a str,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from explicit metadata.
    #[must_use]
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Returns the source path as recorded.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the enclosing function name.
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// Returns the final path segment of [`file`](Self::file).
    #[must_use]
    pub fn base_name(&self) -> &'a str {
        base_name(self.file)
    }
}

/// Returns the last segment of `path`.
///
/// An empty path, or one ending in a separator, yields an empty string.
/// Both `/` and `\` separate segments so `file!()` paths from Windows
/// builds reduce the same way. Callers reach this through
/// [`CallSite::base_name`].
#[must_use]
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or_default()
}

/// Name of the marker fn declared by [`function_name!`](crate::function_name).
#[doc(hidden)]
pub const MARKER: &str = "__emolog_marker";

/// Reduces the type path of a marker fn to its enclosing function name.
///
/// `my_crate::module::handler::{{closure}}::__emolog_marker` becomes
/// `handler`. Paths that do not end in the marker are reduced to their
/// last segment.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(type_path: &str) -> &str {
    let mut path = type_path
        .strip_suffix(MARKER)
        .and_then(|rest| rest.strip_suffix("::"))
        .unwrap_or(type_path);

    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }

    path.rsplit("::").next().unwrap_or_default()
}

/// Expands to the name of the enclosing function as a `&'static str`.
///
/// The name is bare: `connect`, never `connect()` or a parameter list.
/// Inside a closure the enclosing named function is reported.
///
/// # Examples
///
/// ```
/// fn handler() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert_eq!(handler(), "handler");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __emolog_marker() {}
        $crate::source::short_function_name(::core::any::type_name_of_val(&__emolog_marker))
    }};
}

/// Expands to a [`CallSite`] describing the macro's own location.
///
/// # Examples
///
/// ```
/// use logging::{call_site, CallSite};
///
/// fn locate() -> CallSite<'static> {
///     call_site!()
/// }
///
/// let site = locate();
/// assert_eq!(site.function(), "locate");
/// assert!(site.base_name().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), $crate::function_name!())
    };
}
