//! Logging setup and other helpers shared by the wrappers.

use backtrace::Backtrace;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::sync::Once;

use crate::util::permit_alloc;

#[cfg(debug_assertions)]
pub(crate) mod context_checks;

#[cfg(all(debug_assertions, feature = "assert_process_allocs"))]
#[global_allocator]
static A: assert_no_alloc::AllocDisabler = assert_no_alloc::AllocDisabler;

/// The environment variable that controls where [`setup_logger()`] writes its output.
pub const LOG_ENV_VAR: &str = "PARAMEX_LOG";

static LOGGER_INIT: Once = Once::new();

/// Set up the logger so that the `paramex_*!()` logging and assertion macros log output to a
/// centralized location and panics also get written there. By default this logs to STDERR. The
/// behavior can be controlled by setting the `PARAMEX_LOG` environment variable to:
///
/// - `stderr`, in which case the log output always gets written to STDERR.
/// - A file path, in which case the output gets appended to the end of that file which will be
///   created if necessary.
///
/// Calling this more than once does nothing.
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let log_level = if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        };

        // Always show the module in debug builds, makes it clearer where messages are coming from
        let config = if cfg!(debug_assertions) {
            ConfigBuilder::new()
                .set_target_level(log::LevelFilter::Error)
                .set_thread_level(log::LevelFilter::Off)
                .build()
        } else {
            ConfigBuilder::new()
                .set_target_level(log::LevelFilter::Off)
                .set_thread_level(log::LevelFilter::Off)
                .set_location_level(log::LevelFilter::Off)
                .build()
        };

        let target = std::env::var(LOG_ENV_VAR).ok();
        let logger_set = match target.as_deref() {
            None | Some("") | Some("stderr") => {
                TermLogger::init(log_level, config, TerminalMode::Stderr, ColorChoice::Auto).is_ok()
            }
            Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => WriteLogger::init(log_level, config, file).is_ok(),
                Err(err) => {
                    let logger_set = TermLogger::init(
                        log_level,
                        config,
                        TerminalMode::Stderr,
                        ColorChoice::Auto,
                    )
                    .is_ok();
                    paramex_warn!(
                        "Could not open '{}' for logging, logging to STDERR instead: {}",
                        path,
                        err
                    );

                    logger_set
                }
            },
        };

        if logger_set {
            log_panics();
        }
    });
}

/// This is the same as the `log_panics` crate, with `error!()` replaced by `paramex_error!()` and
/// wrapped in `permit_alloc()`. Otherwise logging panics would trigger `assert_no_alloc` as this
/// also allocates.
fn log_panics() {
    std::panic::set_hook(Box::new(|info| {
        permit_alloc(|| {
            let backtrace = Backtrace::new();

            let thread = std::thread::current();
            let thread = thread.name().unwrap_or("unnamed");

            let msg = match info.payload().downcast_ref::<&'static str>() {
                Some(s) => *s,
                None => match info.payload().downcast_ref::<String>() {
                    Some(s) => &**s,
                    None => "Box<Any>",
                },
            };

            match info.location() {
                Some(location) => {
                    paramex_error!(
                        target: "panic", "thread '{}' panicked at '{}': {}:{}\n{:?}",
                        thread,
                        msg,
                        location.file(),
                        location.line(),
                        backtrace
                    );
                }
                None => {
                    paramex_error!(
                        target: "panic",
                        "thread '{}' panicked at '{}'\n{:?}",
                        thread,
                        msg,
                        backtrace
                    )
                }
            }
        })
    }));
}

/// A wrapper around a plugin's process call. This sets up `assert_no_alloc` if the
/// `assert_process_allocs` feature is enabled, so allocating on the audio thread terminates the
/// program in debug builds.
pub fn process_wrapper<T, F: FnOnce() -> T>(f: F) -> T {
    #[cfg(all(debug_assertions, feature = "assert_process_allocs"))]
    {
        assert_no_alloc::assert_no_alloc(f)
    }

    #[cfg(not(all(debug_assertions, feature = "assert_process_allocs")))]
    {
        f()
    }
}
