//! Parameters with normalizable ranges and unit-aware text conversion, a gain-stage plugin trait
//! built on top of them, a headless knob editor, and an offline standalone host.
//!
//! A plugin declares its parameters once as a [`ParamLayout`][params::ParamLayout] and shares it
//! through an `Arc`. The audio thread reads the values with relaxed atomic loads, and the editor
//! writes them through a [`ParamSetter`][context::gui::ParamSetter]. See
//! `plugins/parameters_example` for a complete plugin.

#[macro_use]
pub mod debug;

/// Everything you'd need to build a plugin on top of paramex. Import this with
/// `use paramex::prelude::*;`.
pub mod prelude;

// These modules have also been re-exported in the prelude.
pub mod formatters;
pub mod util;

pub mod buffer;
pub mod context;
pub mod editor;
pub mod params;
pub mod plugin;
pub mod wrapper;

// The logging macros expand to `$crate::log::*!()`, so the facade needs to be reachable from the
// crate root
#[doc(hidden)]
pub use log;
