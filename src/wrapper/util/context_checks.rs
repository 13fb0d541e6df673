//! Consistency checks for the parameter gestures sent through a
//! [`GuiContext`][crate::context::gui::GuiContext].

use std::collections::HashSet;

/// Makes sure that parameter changes sent from the editor are wrapped in gestures, and that those
/// gestures are balanced: no gesture is opened twice, no value is set outside of a gesture, and
/// every opened gesture gets closed again before the context is dropped.
///
/// Only used in debug builds. Every violation is reported as a debug assertion failure.
#[derive(Debug, Default)]
pub struct ParamGestureChecker {
    /// The IDs of the parameters that currently have an open gesture.
    open_gestures: HashSet<String>,
}

impl Drop for ParamGestureChecker {
    fn drop(&mut self) {
        paramex_debug_assert!(
            self.open_gestures.is_empty(),
            "ParamSetter::end_set_parameter() was never called for {:?}",
            self.open_gestures
        );
    }
}

impl ParamGestureChecker {
    /// Record the start of a gesture for `param_id`.
    pub fn begin_set_parameter(&mut self, param_id: &str) {
        let newly_opened = self.open_gestures.insert(param_id.to_owned());
        paramex_debug_assert!(
            newly_opened,
            "A gesture for '{}' was started while another one was still open",
            param_id
        );
    }

    /// Check that a value change for `param_id` happens inside of a gesture.
    pub fn set_parameter(&self, param_id: &str) {
        paramex_debug_assert!(
            self.open_gestures.contains(param_id),
            "'{}' was changed without calling ParamSetter::begin_set_parameter() first",
            param_id
        );
    }

    /// Record the end of a gesture for `param_id`.
    pub fn end_set_parameter(&mut self, param_id: &str) {
        let was_open = self.open_gestures.remove(param_id);
        paramex_debug_assert!(
            was_open,
            "A gesture for '{}' was ended without having been started",
            param_id
        );
    }

    /// Whether a gesture is currently open for `param_id`.
    pub fn is_active(&self, param_id: &str) -> bool {
        self.open_gestures.contains(param_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_gestures() {
        let mut checker = ParamGestureChecker::default();
        checker.begin_set_parameter("gainwet");
        checker.set_parameter("gainwet");
        assert!(checker.is_active("gainwet"));
        assert!(!checker.is_active("frequency"));

        checker.end_set_parameter("gainwet");
        assert!(!checker.is_active("gainwet"));
    }

    #[test]
    #[should_panic]
    fn set_outside_of_gesture() {
        let checker = ParamGestureChecker::default();
        checker.set_parameter("gainwet");
    }

    #[test]
    #[should_panic]
    fn unbalanced_end() {
        let mut checker = ParamGestureChecker::default();
        checker.end_set_parameter("gainwet");
    }
}
