//! A context passed to a plugin's editor.

use crate::params::{FloatParam, Param};

/// Callbacks the plugin's editor can make when the user interacts with it, such as updating
/// parameter values. This is passed to the plugin in
/// [`Plugin::editor()`][crate::prelude::Plugin::editor()]. All of these functions assume they're
/// being called from the GUI thread.
///
/// Parameters are addressed by their ID. The host looks the ID up in its own view of the plugin's
/// [`ParamLayout`][crate::params::ParamLayout], and unknown IDs are ignored.
pub trait GuiContext: Send + Sync + 'static {
    /// Inform the host a parameter will be automated. Use [`ParamSetter::begin_set_parameter()`]
    /// instead for a user friendly API.
    fn begin_set_parameter(&self, param_id: &str);

    /// Inform the host a parameter is being automated with an already normalized value. The host
    /// stores the value in the parameter. Use [`ParamSetter::set_parameter()`] instead for a user
    /// friendly API.
    fn set_parameter_normalized(&self, param_id: &str, normalized: f32);

    /// Inform the host a parameter has been automated. Use [`ParamSetter::end_set_parameter()`]
    /// instead for a user friendly API.
    fn end_set_parameter(&self, param_id: &str);
}

/// A convenience helper for setting parameter values. Any changes made here will be broadcasted to
/// the host and reflected in the plugin's [`ParamLayout`][crate::params::ParamLayout]. These
/// functions should only be called from the GUI thread.
pub struct ParamSetter<'a> {
    pub raw_context: &'a dyn GuiContext,
}

impl<'a> ParamSetter<'a> {
    pub fn new(context: &'a dyn GuiContext) -> Self {
        Self {
            raw_context: context,
        }
    }

    /// Inform the host that you will start automating a parameter. This needs to be called before
    /// calling [`set_parameter()`][Self::set_parameter()] for the specified parameter.
    pub fn begin_set_parameter(&self, param: &FloatParam) {
        self.raw_context.begin_set_parameter(param.id());
    }

    /// Set a parameter to the specified plain value. You will need to call
    /// [`begin_set_parameter()`][Self::begin_set_parameter()] before and
    /// [`end_set_parameter()`][Self::end_set_parameter()] after calling this so the host can
    /// properly record automation for the parameter. This can be called multiple times in a row
    /// before calling [`end_set_parameter()`][Self::end_set_parameter()], for instance when
    /// turning a knob.
    pub fn set_parameter(&self, param: &FloatParam, value: f32) {
        let normalized = param.preview_normalized(value);
        self.raw_context
            .set_parameter_normalized(param.id(), normalized);
    }

    /// Set a parameter to an already normalized value. Works exactly the same as
    /// [`set_parameter()`][Self::set_parameter()] and needs to follow the same rules.
    ///
    /// Stepped ranges will snap the value when it gets stored, so `param.normalized_value()` may
    /// differ slightly from `normalized` afterwards.
    pub fn set_parameter_normalized(&self, param: &FloatParam, normalized: f32) {
        self.raw_context
            .set_parameter_normalized(param.id(), normalized);
    }

    /// Inform the host that you are done automating a parameter. This needs to be called after one
    /// or more [`set_parameter()`][Self::set_parameter()] calls for a parameter so the host knows
    /// the automation gesture has finished.
    pub fn end_set_parameter(&self, param: &FloatParam) {
        self.raw_context.end_set_parameter(param.id());
    }
}
