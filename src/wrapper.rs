//! Hosts for running a plugin outside of a DAW, and the utilities they share.

pub mod standalone;
pub mod util;
