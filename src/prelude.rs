// Re-export the macros
pub use crate::debug::*;

pub use crate::wrapper::standalone::{
    paramex_export_standalone, paramex_export_standalone_with_args,
};

pub use crate::formatters::{self, Unit};
pub use crate::util;

pub use crate::buffer::Buffer;
pub use crate::context::gui::{GuiContext, ParamSetter};
pub use crate::editor::{KnobEditor, ParamKnob};
pub use crate::params::{
    param_id_from_name, FloatParam, FloatRange, Param, ParamInfo, ParamLayout, ParamMut,
};
pub use crate::plugin::{BufferConfig, BusConfig, Plugin, ProcessStatus};
