use paramex::prelude::*;
use std::sync::Arc;

/// The ID of the wet gain parameter.
pub const GAIN_WET_ID: &str = "gainwet";
/// The ID of the frequency parameter.
pub const FREQUENCY_ID: &str = "frequency";

/// The gain parameter's position in the layout. The audio thread reads it by index so it never has
/// to look up an ID.
const GAIN_WET_INDEX: usize = 0;

/// Applies the wet gain to every channel. The frequency parameter is only exposed to the editor
/// and the host, the audio path does not use it.
pub struct ParametersExample {
    params: Arc<ParamLayout>,
}

impl Default for ParametersExample {
    fn default() -> Self {
        let params = ParamLayout::new(vec![
            FloatParam::new("Gain Wet", 0.0, FloatRange::linear(-12.0, 12.0), Unit::Decibel),
            FloatParam::new(
                "Frequency",
                1000.0,
                FloatRange::with_centre(20.0, 20_000.0, 1000.0),
                Unit::Hertz,
            ),
        ])
        .expect("The parameters have distinct names");
        paramex_debug_assert_eq!(params.index_of(GAIN_WET_ID), Some(GAIN_WET_INDEX));

        Self {
            params: Arc::new(params),
        }
    }
}

impl Plugin for ParametersExample {
    const NAME: &'static str = "Parameters Example";
    const VENDOR: &'static str = "paramex";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    const DEFAULT_NUM_INPUTS: u32 = 2;
    const DEFAULT_NUM_OUTPUTS: u32 = 2;

    fn params(&self) -> Arc<ParamLayout> {
        self.params.clone()
    }

    fn editor(&self, context: Arc<dyn GuiContext>) -> Option<KnobEditor> {
        Some(KnobEditor::new(self.params.clone(), context))
    }

    fn accepts_bus_config(&self, config: &BusConfig) -> bool {
        // Mono or stereo, with as many inputs as outputs
        matches!(config.num_output_channels, 1 | 2)
            && config.num_input_channels == config.num_output_channels
    }

    fn process(&mut self, buffer: &mut Buffer) -> ProcessStatus {
        if buffer.is_empty() {
            return ProcessStatus::Normal;
        }

        let gain_db = self.params.as_slice()[GAIN_WET_INDEX].value();
        buffer.apply_gain(util::db_to_gain(gain_db));

        ProcessStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_block(plugin: &mut ParametersExample, left: &mut [f32], right: &mut [f32]) {
        let mut buffer = Buffer::from_channels(vec![left, right]);
        assert_eq!(plugin.process(&mut buffer), ProcessStatus::Normal);
    }

    #[test]
    fn parameters() {
        let plugin = ParametersExample::default();
        let params = plugin.params();
        let info = params.param_info();

        assert_eq!(info.len(), 2);
        assert_eq!(info[0].id, GAIN_WET_ID);
        assert_eq!(info[0].name, "Gain Wet");
        assert_eq!(info[0].unit, "dB");
        assert_eq!(info[0].default, 0.0);
        assert_eq!(info[1].id, FREQUENCY_ID);
        assert_eq!(info[1].name, "Frequency");
        assert_eq!(info[1].unit, "hz");
        assert_eq!(info[1].default, 1000.0);
        assert_ne!(info[0].id, info[1].id);

        let frequency = params.param(FREQUENCY_ID).map(|p| p.preview_plain(0.5));
        approx::assert_relative_eq!(frequency.unwrap_or(0.0), 1000.0, max_relative = 1e-4);
    }

    #[test]
    fn unity_gain_leaves_audio_unchanged() {
        let mut plugin = ParametersExample::default();
        let mut left = [0.5, -0.25, 1.0, 0.0];
        let mut right = [-1.0, 0.125, 0.0, 0.75];
        process_block(&mut plugin, &mut left, &mut right);

        assert_eq!(left, [0.5, -0.25, 1.0, 0.0]);
        assert_eq!(right, [-1.0, 0.125, 0.0, 0.75]);
    }

    #[test]
    fn minimum_gain() {
        let mut plugin = ParametersExample::default();
        let params = plugin.params();
        let gain = params.param(GAIN_WET_ID).expect("Gain parameter exists");
        gain.set_plain_value(-12.0);

        let mut left = [0.5, -0.25];
        let mut right = [1.0, 0.0];
        process_block(&mut plugin, &mut left, &mut right);

        approx::assert_relative_eq!(left[0], 0.5 * 0.251_188_64, epsilon = 1e-6);
        approx::assert_relative_eq!(left[1], -0.25 * 0.251_188_64, epsilon = 1e-6);
        approx::assert_relative_eq!(right[0], 0.251_188_64, epsilon = 1e-6);
        assert_eq!(right[1], 0.0);
    }

    #[test]
    fn process_does_not_allocate() {
        let mut plugin = ParametersExample::default();
        plugin
            .params()
            .param(GAIN_WET_ID)
            .expect("Gain parameter exists")
            .set_plain_value(6.0);

        let mut left = [0.5; 64];
        let mut right = [-0.5; 64];
        let mut buffer = Buffer::from_channels(vec![&mut left[..], &mut right[..]]);

        // With `assert_process_allocs` enabled this aborts the test binary on any allocation
        let status = paramex::wrapper::util::process_wrapper(|| plugin.process(&mut buffer));
        assert_eq!(status, ProcessStatus::Normal);
        drop(buffer);

        approx::assert_relative_eq!(left[0], 0.5 * 1.995_262_3, epsilon = 1e-5);
        approx::assert_relative_eq!(right[63], -0.5 * 1.995_262_3, epsilon = 1e-5);
    }

    #[test]
    fn empty_block() {
        let mut plugin = ParametersExample::default();
        let mut buffer = Buffer::default();
        assert_eq!(plugin.process(&mut buffer), ProcessStatus::Normal);

        process_block(&mut plugin, &mut [], &mut []);
    }

    #[test]
    fn bus_configs() {
        let plugin = ParametersExample::default();
        let config = |num_input_channels, num_output_channels| BusConfig {
            num_input_channels,
            num_output_channels,
        };

        assert!(plugin.accepts_bus_config(&config(1, 1)));
        assert!(plugin.accepts_bus_config(&config(2, 2)));
        assert!(!plugin.accepts_bus_config(&config(1, 2)));
        assert!(!plugin.accepts_bus_config(&config(0, 0)));
        assert!(!plugin.accepts_bus_config(&config(6, 6)));
    }
}
