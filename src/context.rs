//! Contexts the plugin's editor uses to make callbacks to the host.

pub mod gui;
