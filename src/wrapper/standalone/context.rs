use std::sync::Arc;

use crate::context::gui::GuiContext;
use crate::params::{ParamLayout, ParamMut};

/// A [`GuiContext`] implementation for the standalone wrapper. This is passed to the plugin in
/// [`Plugin::editor()`][crate::prelude::Plugin::editor()]. There is no automation to record here,
/// so parameter changes are written straight to the plugin's parameter layout.
pub(crate) struct WrapperGuiContext {
    pub(super) params: Arc<ParamLayout>,
    #[cfg(debug_assertions)]
    pub(super) param_gesture_checker:
        parking_lot::Mutex<crate::wrapper::util::context_checks::ParamGestureChecker>,
}

impl WrapperGuiContext {
    pub fn new(params: Arc<ParamLayout>) -> Self {
        Self {
            params,
            #[cfg(debug_assertions)]
            param_gesture_checker: Default::default(),
        }
    }

    fn check_param_id(&self, param_id: &str) -> bool {
        let known = self.params.index_of(param_id).is_some();
        paramex_debug_assert!(known, "Unknown parameter ID '{}'", param_id);

        known
    }
}

impl GuiContext for WrapperGuiContext {
    fn begin_set_parameter(&self, param_id: &str) {
        // Since there's no automation being recorded here, gestures don't mean anything
        if self.check_param_id(param_id) {
            #[cfg(debug_assertions)]
            self.param_gesture_checker
                .lock()
                .begin_set_parameter(param_id);
        }
    }

    fn set_parameter_normalized(&self, param_id: &str, normalized: f32) {
        if let Some(param) = self.params.param(param_id) {
            #[cfg(debug_assertions)]
            self.param_gesture_checker.lock().set_parameter(param_id);

            if param.set_normalized_value(normalized) {
                paramex_trace!("Parameter changed: {:?}", param);
            }
        } else {
            paramex_debug_assert_failure!("Unknown parameter ID '{}'", param_id);
        }
    }

    fn end_set_parameter(&self, param_id: &str) {
        if self.check_param_id(param_id) {
            #[cfg(debug_assertions)]
            self.param_gesture_checker.lock().end_set_parameter(param_id);
        }
    }
}
