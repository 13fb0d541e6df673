//! A headless editor that binds one knob to every parameter of a plugin.

use std::sync::Arc;

use crate::context::gui::{GuiContext, ParamSetter};
use crate::params::ParamLayout;

mod knob;

pub use knob::{ParamKnob, DRAG_DISTANCE_FULL_RANGE, GRANULAR_DRAG_MULTIPLIER};

/// The editor's default size in logical pixels, as a `(width, height)` pair.
pub const DEFAULT_EDITOR_SIZE: (u32, u32) = (800, 600);

/// An editor for a [`Plugin`][crate::prelude::Plugin] with one [`ParamKnob`] per parameter, in
/// the parameter layout's order. The editor holds on to the same [`ParamLayout`] the plugin reads
/// from during processing, and every change made through a knob goes through the [`GuiContext`]
/// so the host knows about it.
///
/// Knobs are addressed by their index, which matches the parameter's index in the layout.
pub struct KnobEditor {
    context: Arc<dyn GuiContext>,
    knobs: Vec<ParamKnob>,
    size: (u32, u32),
}

impl KnobEditor {
    pub fn new(params: Arc<ParamLayout>, context: Arc<dyn GuiContext>) -> Self {
        let knobs = (0..params.len())
            .filter_map(|index| ParamKnob::new(params.clone(), index))
            .collect();

        Self {
            context,
            knobs,
            size: DEFAULT_EDITOR_SIZE,
        }
    }

    /// Change the editor's size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Returns the size of the editor in logical pixels as a `(width, height)` pair.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// The area covered by the knob at `index` as an `(x, y, width, height)` tuple in logical
    /// pixels. The knobs are placed next to each other from left to right, each taking up an equal
    /// share of the editor's width and its full height.
    pub fn knob_bounds(&self, index: usize) -> Option<(u32, u32, u32, u32)> {
        if index >= self.knobs.len() {
            return None;
        }

        let (width, height) = self.size;
        let knob_width = width as f32 / self.knobs.len() as f32;
        let x = (knob_width * index as f32).round() as u32;
        let next_x = (knob_width * (index + 1) as f32).round() as u32;

        Some((x, 0, next_x - x, height))
    }

    /// All knobs, in parameter layout order.
    pub fn knobs(&self) -> &[ParamKnob] {
        &self.knobs
    }

    /// Get the knob at `index`, if there is one.
    pub fn knob(&self, index: usize) -> Option<&ParamKnob> {
        self.knobs.get(index)
    }

    /// Run `f` with the knob at `index` and a [`ParamSetter`] for this editor's context. Returns
    /// `None` if there's no knob at that index.
    pub fn with_knob<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut ParamKnob, &ParamSetter) -> R,
    ) -> Option<R> {
        let setter = ParamSetter::new(self.context.as_ref());
        let knob = self.knobs.get_mut(index)?;

        Some(f(knob, &setter))
    }

    /// See [`ParamKnob::begin_drag()`].
    pub fn begin_drag(&mut self, index: usize, y: f32, granular: bool) {
        self.with_knob(index, |knob, setter| knob.begin_drag(setter, y, granular))
            .unwrap_or_else(|| missing_knob(index))
    }

    /// See [`ParamKnob::drag_to()`].
    pub fn drag_to(&mut self, index: usize, y: f32, granular: bool) {
        self.with_knob(index, |knob, setter| knob.drag_to(setter, y, granular))
            .unwrap_or_else(|| missing_knob(index))
    }

    /// See [`ParamKnob::end_drag()`].
    pub fn end_drag(&mut self, index: usize) {
        self.with_knob(index, |knob, setter| knob.end_drag(setter))
            .unwrap_or_else(|| missing_knob(index))
    }

    /// See [`ParamKnob::reset_to_default()`].
    pub fn reset_to_default(&mut self, index: usize) {
        self.with_knob(index, |knob, setter| knob.reset_to_default(setter))
            .unwrap_or_else(|| missing_knob(index))
    }

    /// See [`ParamKnob::enter_text()`].
    pub fn enter_text(&mut self, index: usize, text: &str) {
        self.with_knob(index, |knob, setter| knob.enter_text(setter, text))
            .unwrap_or_else(|| missing_knob(index))
    }

    /// See [`ParamKnob::step()`].
    pub fn step(&mut self, index: usize, up: bool, finer: bool) {
        self.with_knob(index, |knob, setter| knob.step(setter, up, finer))
            .unwrap_or_else(|| missing_knob(index))
    }
}

fn missing_knob(index: usize) {
    paramex_debug_assert_failure!("The editor does not have a knob at index {}", index);
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
        use crate::formatters::Unit;
    use crate::params::{FloatParam, FloatRange, ParamMut};

    /// Applies changes directly to the layout and records the gestures.
    struct RecordingContext {
        params: Arc<ParamLayout>,
        events: Mutex<Vec<String>>,
    }

    impl GuiContext for RecordingContext {
            fn begin_set_parameter(&self, param_id: &str) {
            self.events.lock().push(format!("begin {param_id}"));
        }

        fn set_parameter_normalized(&self, param_id: &str, normalized: f32) {
            self.events.lock().push(format!("set {param_id}"));
            if let Some(param) = self.params.param(param_id) {
                param.set_normalized_value(normalized);
            }
        }

        fn end_set_parameter(&self, param_id: &str) {
            self.events.lock().push(format!("end {param_id}"));
        }
    }

    fn make_editor() -> (KnobEditor, Arc<ParamLayout>, Arc<RecordingContext>) {
        let params = Arc::new(
            ParamLayout::new(vec![
                FloatParam::new("Gain Wet", 0.0, FloatRange::linear(-12.0, 12.0), Unit::Decibel),
                FloatParam::new(
                    "Frequency",
                    1000.0,
                    FloatRange::with_centre(20.0, 20_000.0, 1000.0),
                    Unit::Hertz,
                ),
            ])
            .expect("Unique IDs"),
        );
        let context = Arc::new(RecordingContext {
            params: params.clone(),
            events: Mutex::new(Vec::new()),
        });

        (
            KnobEditor::new(params.clone(), context.clone()),
            params,
            context,
        )
    }

    fn gain(params: &ParamLayout) -> f32 {
        params.param("gainwet").map(|p| p.value()).unwrap_or(f32::NAN)
    }

    #[test]
    fn one_knob_per_param() {
        let (editor, _, _) = make_editor();
        assert_eq!(editor.size(), (800, 600));

        let labels: Vec<_> = editor.knobs().iter().map(|knob| knob.label()).collect();
        assert_eq!(labels, ["Gain Wet", "Frequency"]);
        assert_eq!(editor.knob(0).map(|k| k.normalized_value()), Some(0.5));
        assert_eq!(
            editor.knob(1).map(|k| k.display_text()).as_deref(),
            Some("1.0 khz")
        );
        assert!(editor.knob(2).is_none());
    }

    #[test]
    fn knob_bounds() {
        let (editor, _, _) = make_editor();
        assert_eq!(editor.knob_bounds(0), Some((0, 0, 400, 600)));
        assert_eq!(editor.knob_bounds(1), Some((400, 0, 400, 600)));
        assert_eq!(editor.knob_bounds(2), None);

        let editor = editor.with_size(301, 100);
        assert_eq!(editor.knob_bounds(0), Some((0, 0, 151, 100)));
        assert_eq!(editor.knob_bounds(1), Some((151, 0, 150, 100)));
    }

    mod dragging {
        use super::*;

        #[test]
        fn full_range_drag() {
            let (mut editor, params, context) = make_editor();
            editor.begin_drag(0, 300.0, false);
            assert_eq!(gain(&params), 0.0);

            editor.drag_to(0, 300.0 - DRAG_DISTANCE_FULL_RANGE / 2.0, false);
            editor.end_drag(0);
            assert_eq!(gain(&params), 12.0);
            assert_eq!(
                *context.events.lock(),
                ["begin gainwet", "set gainwet", "end gainwet"]
            );
        }

        #[test]
        fn downwards_drag_clamps() {
            let (mut editor, params, _) = make_editor();
            editor.begin_drag(0, 0.0, false);
            editor.drag_to(0, 1000.0, false);
            editor.end_drag(0);
            assert_eq!(gain(&params), -12.0);
            assert_eq!(editor.knob(0).map(|k| k.normalized_value()), Some(0.0));
        }

        #[test]
        fn granular_drag() {
            let (mut editor, params, _) = make_editor();
            editor.begin_drag(0, 300.0, true);
            editor.drag_to(0, 300.0 - DRAG_DISTANCE_FULL_RANGE / 2.0, true);
            editor.end_drag(0);

            // 0.5 + 0.05 normalized
            approx::assert_relative_eq!(gain(&params), 1.2, epsilon = 1e-4);
        }

        #[test]
        fn switching_to_granular_mid_drag_does_not_jump() {
            let (mut editor, params, _) = make_editor();
            editor.begin_drag(0, 300.0, false);
            editor.drag_to(0, 250.0, false);
            let before = gain(&params);

            editor.drag_to(0, 250.0, true);
            approx::assert_relative_eq!(gain(&params), before, epsilon = 1e-5);
            editor.end_drag(0);
            assert!(!editor.knob(0).map_or(true, |k| k.is_dragging()));
        }

        #[test]
        fn drag_without_begin_is_ignored() {
            let (mut editor, params, context) = make_editor();
            editor.drag_to(0, 0.0, false);
            editor.end_drag(0);
            assert_eq!(gain(&params), 0.0);
            assert!(context.events.lock().is_empty());
        }
    }

    mod text_entry {
        use super::*;

        #[test]
        fn decibels() {
            let (mut editor, params, context) = make_editor();
            editor.enter_text(0, "-12 dB");
            assert_eq!(gain(&params), -12.0);
            assert_eq!(
                *context.events.lock(),
                ["begin gainwet", "set gainwet", "end gainwet"]
            );
        }

        #[test]
        fn kilohertz() {
            let (mut editor, params, _) = make_editor();
            editor.enter_text(1, "2.0 khz");
            let frequency = params.param("frequency").map(|p| p.value());
            approx::assert_relative_eq!(frequency.unwrap_or(0.0), 2000.0, max_relative = 1e-4);
        }

        #[test]
        fn unchanged_value_still_closes_gesture() {
            let (mut editor, _, context) = make_editor();
            editor.enter_text(0, "0 dB");
            assert_eq!(*context.events.lock(), ["begin gainwet", "end gainwet"]);
        }
    }

    #[test]
    fn reset_to_default() {
        let (mut editor, params, _) = make_editor();
        editor.enter_text(0, "6 dB");
        assert_eq!(gain(&params), 6.0);

        editor.reset_to_default(0);
        assert_eq!(gain(&params), 0.0);
    }

    #[test]
    fn stepping() {
        let (mut editor, params, _) = make_editor();
        editor.step(0, true, false);
        approx::assert_relative_eq!(gain(&params), 0.48, epsilon = 1e-4);

        editor.step(0, false, true);
        approx::assert_relative_eq!(gain(&params), 0.36, epsilon = 1e-4);
    }
}
