//! A rotary knob bound to a single parameter.

use std::sync::Arc;

use crate::context::gui::ParamSetter;
use crate::params::{FloatParam, Param, ParamLayout};

/// How far the mouse needs to move vertically, in logical pixels, to sweep a knob over its entire
/// normalized range.
pub const DRAG_DISTANCE_FULL_RANGE: f32 = 250.0;

/// When holding down shift while dragging a knob, the mouse movement will be multiplied by this
/// value so the parameter can be adjusted more precisely.
pub const GRANULAR_DRAG_MULTIPLIER: f32 = 0.1;

/// A rotary knob with a vertical drag behavior, bound to one parameter from a plugin's
/// [`ParamLayout`]. The knob does not render anything on its own. It translates user input into
/// parameter gestures, and it exposes the parameter's normalized position and formatted text so a
/// drawing layer can display it.
///
/// Every value change is wrapped in a begin/set/end gesture sent through a [`ParamSetter`].
pub struct ParamKnob {
    params: Arc<ParamLayout>,
    /// The knob's parameter's position in `params`.
    param_index: usize,

    /// The mouse position and the parameter's normalized value at the start of the current drag,
    /// if a drag is in progress. The anchor is moved when the drag switches between granular and
    /// regular mode so the knob doesn't jump.
    drag_anchor: Option<DragAnchor>,
}

#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    y: f32,
    normalized_value: f32,
    granular: bool,
}

impl ParamKnob {
    /// Bind a knob to the parameter at `param_index`. Returns `None` if the layout doesn't have a
    /// parameter at that position.
    pub fn new(params: Arc<ParamLayout>, param_index: usize) -> Option<Self> {
        if param_index >= params.len() {
            return None;
        }

        Some(Self {
            params,
            param_index,
            drag_anchor: None,
        })
    }

    /// The parameter this knob is bound to.
    pub fn param(&self) -> &FloatParam {
        &self.params.as_slice()[self.param_index]
    }

    /// The knob's label, i.e. the parameter's display name.
    pub fn label(&self) -> &str {
        self.param().name()
    }

    /// The knob's displayed position in `[0, 1]`.
    pub fn normalized_value(&self) -> f32 {
        self.param().normalized_value()
    }

    /// The knob's value as text, including the unit.
    pub fn display_text(&self) -> String {
        self.param().to_string()
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Start dragging the knob at vertical position `y`. This opens a parameter gesture that stays
    /// open until [`end_drag()`][Self::end_drag()] is called. Starting a drag does not change the
    /// value.
    pub fn begin_drag(&mut self, setter: &ParamSetter, y: f32, granular: bool) {
        if self.drag_anchor.is_some() {
            paramex_debug_assert_failure!(
                "A drag was started on '{}' while one was already active",
                self.param().id()
            );
            return;
        }

        setter.begin_set_parameter(self.param());
        self.drag_anchor = Some(DragAnchor {
            y,
            normalized_value: self.normalized_value(),
            granular,
        });
    }

    /// Move the mouse to vertical position `y` during a drag. Moving up increases the value. When
    /// `granular` is set the movement is scaled down by [`GRANULAR_DRAG_MULTIPLIER`].
    pub fn drag_to(&mut self, setter: &ParamSetter, y: f32, granular: bool) {
        let anchor = match self.drag_anchor {
            Some(anchor) if anchor.granular == granular => anchor,
            Some(_) => {
                // Switching modes mid-drag continues from the current value
                let anchor = DragAnchor {
                    y,
                    normalized_value: self.normalized_value(),
                    granular,
                };
                self.drag_anchor = Some(anchor);
                anchor
            }
            None => return,
        };

        let multiplier = if granular {
            GRANULAR_DRAG_MULTIPLIER
        } else {
            1.0
        };
        let delta = (anchor.y - y) / DRAG_DISTANCE_FULL_RANGE * multiplier;
        self.set_normalized_value(setter, anchor.normalized_value + delta);
    }

    /// Finish the current drag and close its gesture.
    pub fn end_drag(&mut self, setter: &ParamSetter) {
        if self.drag_anchor.take().is_some() {
            setter.end_set_parameter(self.param());
        }
    }

    /// Reset the parameter to its default value. This is what a double click or a ctrl+click does.
    pub fn reset_to_default(&self, setter: &ParamSetter) {
        let param = self.param();
        setter.begin_set_parameter(param);
        setter.set_parameter_normalized(param, param.default_normalized_value());
        setter.end_set_parameter(param);
    }

    /// Set the parameter from text typed by the user. The text goes through the parameter's unit
    /// parser, so malformed input results in a best-effort value instead of an error.
    pub fn enter_text(&self, setter: &ParamSetter, text: &str) {
        let param = self.param();
        let normalized_value = param.string_to_normalized_value(text);

        setter.begin_set_parameter(param);
        self.set_normalized_value(setter, normalized_value);
        setter.end_set_parameter(param);
    }

    /// Move the knob a single step up or down, e.g. in response to a scroll wheel event. `finer`
    /// results in a smaller step for continuous ranges.
    pub fn step(&self, setter: &ParamSetter, up: bool, finer: bool) {
        let param = self.param();
        let current_value = param.normalized_value();
        let new_value = if up {
            param.next_normalized_step(current_value, finer)
        } else {
            param.previous_normalized_step(current_value, finer)
        };

        setter.begin_set_parameter(param);
        self.set_normalized_value(setter, new_value);
        setter.end_set_parameter(param);
    }

    /// Set the normalized value for a parameter if that would change the parameter's plain value.
    /// The begin and end set parameter messages need to be sent before calling this function.
    fn set_normalized_value(&self, setter: &ParamSetter, normalized_value: f32) {
        let param = self.param();

        // This snaps to the nearest plain value if the parameter is stepped
        let plain_value = param.preview_plain(normalized_value.clamp(0.0, 1.0));
        if plain_value != param.plain_value() {
            setter.set_parameter(param, plain_value);
        }
    }
}
