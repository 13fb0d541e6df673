//! Macros for logging and debug assertions. [`paramex_trace!()`] and the
//! `paramex_debug_assert_*!()` macros are compiled out during release builds, so they can be used
//! for asserting additional invariants in debug builds. Check the [`paramex_log!()`] macro for more
//! information on the logger. None of the logging functions are realtime-safe, and you should avoid
//! using them during release builds in any of the functions that may be called from an audio
//! thread.

// NOTE: `#[macro_export]` exports these macros from the crate root. They are also re-exported from
//       this module so they can be imported through the prelude.

/// Write something to the logger. This defaults to STDERR. The logger is installed by
/// [`setup_logger()`][crate::wrapper::util::setup_logger()], and its behavior can be controlled by
/// setting the `PARAMEX_LOG` environment variable to:
///
/// - `stderr`, in which case the log output always gets written to STDERR.
/// - A file path, in which case the output gets appended to the end of that file which will be
///   created if necessary.
#[macro_export]
macro_rules! paramex_log {
    ($($args:tt)*) => (
        $crate::log::info!($($args)*)
    );
}
#[doc(inline)]
pub use paramex_log;

/// Similar to `paramex_log!()`, but less subtle. Used for printing warnings.
#[macro_export]
macro_rules! paramex_warn {
    ($($args:tt)*) => (
        $crate::log::warn!($($args)*)
    );
}
#[doc(inline)]
pub use paramex_warn;

/// Similar to `paramex_log!()`, but more scream-y. Used for printing fatal errors.
#[macro_export]
macro_rules! paramex_error {
    ($($args:tt)*) => (
        $crate::log::error!($($args)*)
    );
}
#[doc(inline)]
pub use paramex_error;

/// The same as `paramex_log!()`, but with source and thread information. Like the
/// `paramex_debug_assert*!()` macros, this is only shown when compiling in debug mode.
#[macro_export]
macro_rules! paramex_trace {
    ($($args:tt)*) => (
        $crate::log::trace!($($args)*)
    );
}
#[doc(inline)]
pub use paramex_trace;

/// A `debug_assert!()` analogue that prints the error with line number information instead of
/// panicking. During tests this is upgraded to a regular panicking `debug_assert!()`.
#[macro_export]
macro_rules! paramex_debug_assert {
    ($cond:expr $(,)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert!($cond);
        } else if cfg!(debug_assertions) && !$cond {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($cond)));
        }
    );
    ($cond:expr, $format:expr $(, $($args:tt)*)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert!($cond, $format, $($($args)*)?);
        } else if cfg!(debug_assertions) && !$cond {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($cond), ", ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use paramex_debug_assert;

/// An unconditional debug assertion failure, for if the condition has already been checked
/// elsewhere. See [`paramex_debug_assert!()`] for more information.
#[macro_export]
macro_rules! paramex_debug_assert_failure {
    () => (
        if cfg!(test) {
           debug_assert!(false, "Debug assertion failed");
        } else if cfg!(debug_assertions) {
            $crate::log::warn!("Debug assertion failed");
        }
    );
    ($format:expr $(, $($args:tt)*)?) => (
        if cfg!(test) {
           debug_assert!(false, concat!("Debug assertion failed: ", $format), $($($args)*)?);
        } else if cfg!(debug_assertions) {
            $crate::log::warn!(concat!("Debug assertion failed: ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use paramex_debug_assert_failure;

/// A `debug_assert_eq!()` analogue that prints the error with line number information instead of
/// panicking. See [`paramex_debug_assert!()`] for more information.
#[macro_export]
macro_rules! paramex_debug_assert_eq {
    ($left:expr, $right:expr $(,)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert_eq!($left, $right);
        } else if cfg!(debug_assertions) && $left != $right {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($left), " != ", stringify!($right)));
        }
    );
    ($left:expr, $right:expr, $format:expr $(, $($args:tt)*)?) => (
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        if cfg!(test) {
           debug_assert_eq!($left, $right, $format, $($($args)*)?);
        } else if cfg!(debug_assertions) && $left != $right {
            $crate::log::warn!(concat!("Debug assertion failed: ", stringify!($left), " != ", stringify!($right), ", ", $format), $($($args)*)?);
        }
    );
}
#[doc(inline)]
pub use paramex_debug_assert_eq;
