use std::fmt::Display;
use std::sync::Arc;

use super::backend::{Backend, RenderReport};
use super::config::WrapperConfig;
use super::context::WrapperGuiContext;
use crate::context::gui::ParamSetter;
use crate::editor::KnobEditor;
use crate::params::{Param, ParamInfo, ParamLayout};
use crate::plugin::{BufferConfig, BusConfig, Plugin, ProcessStatus};
use crate::wrapper::util::process_wrapper;

pub struct Wrapper<P: Plugin, B: Backend> {
    backend: B,

    /// The wrapped plugin instance.
    plugin: P,
    /// The plugin's parameters. These are fetched once during initialization, the plugin reads
    /// from the same layout while processing.
    params: Arc<ParamLayout>,
    /// The context handed to the plugin's editor. Parameter changes made through this context are
    /// written directly to `params`.
    context: Arc<WrapperGuiContext>,
    /// The plugin's editor, if it has one. Parameter values from the command line are entered
    /// through its knobs.
    editor: Option<KnobEditor>,

    config: WrapperConfig,

    /// The bus and buffer configurations are static for the standalone target.
    bus_config: BusConfig,
    buffer_config: BufferConfig,
}

/// Errors that may arise while initializing or running the wrapped plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperError {
    /// The plugin does not accept the IO configuration from the config.
    IncompatibleConfig(BusConfig),
    /// The plugin returned `false` during initialization.
    InitializationFailed,
    /// A parameter ID from the command line does not exist.
    UnknownParameter(String),
    /// The plugin returned an error during processing.
    ProcessingFailed(&'static str),
}

impl Display for WrapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WrapperError::IncompatibleConfig(bus_config) => write!(
                f,
                "The plugin does not support the {} channel input and {} channel output \
                 configuration",
                bus_config.num_input_channels, bus_config.num_output_channels
            ),
            WrapperError::InitializationFailed => write!(f, "The plugin failed to initialize"),
            WrapperError::UnknownParameter(id) => {
                write!(f, "The plugin does not have a parameter with ID '{id}'")
            }
            WrapperError::ProcessingFailed(err) => {
                write!(f, "The plugin returned an error while processing: {err}")
            }
        }
    }
}

impl std::error::Error for WrapperError {}

impl<P: Plugin, B: Backend> Wrapper<P, B> {
    /// Instantiate a new instance of the standalone wrapper. Returns an error if the plugin does
    /// not accept the IO configuration from the wrapper config or if it fails to initialize.
    pub fn new(backend: B, config: WrapperConfig) -> Result<Self, WrapperError> {
        let mut plugin = P::default();
        let params = plugin.params();
        let context = Arc::new(WrapperGuiContext::new(params.clone()));
        let editor = plugin.editor(context.clone());

        let bus_config = config.bus_config::<P>();
        let buffer_config = BufferConfig {
            sample_rate: config.sample_rate,
            max_buffer_size: config.period_size,
        };

        // Right now the IO configuration is fixed in the standalone target, so if the plugin cannot
        // work with this then we cannot initialize the plugin at all
        if !plugin.accepts_bus_config(&bus_config) {
            return Err(WrapperError::IncompatibleConfig(bus_config));
        }
        if !plugin.initialize(&bus_config, &buffer_config) {
            return Err(WrapperError::InitializationFailed);
        }

        paramex_trace!(
            "Initialized '{}' with {:?} and {:?}, editor size: {:?}",
            P::NAME,
            bus_config,
            buffer_config,
            editor.as_ref().map(|editor| editor.size())
        );

        Ok(Self {
            backend,

            plugin,
            params,
            context,
            editor,

            config,

            bus_config,
            buffer_config,
        })
    }

    /// The plugin's parameters, in declaration order.
    pub fn params(&self) -> &Arc<ParamLayout> {
        &self.params
    }

    /// Describe the plugin's parameters and their current values.
    pub fn param_info(&self) -> Vec<ParamInfo> {
        self.params.param_info()
    }

    /// Set the parameters passed through `--param` on the command line. The values are entered
    /// through the plugin's editor if it has one, just like a user typing into a knob's text field.
    /// Plugins without an editor have their parameters set through a [`ParamSetter`] instead.
    pub fn apply_param_overrides(&mut self) -> Result<(), WrapperError> {
        for param_override in &self.config.param_overrides {
            let index = self
                .params
                .index_of(&param_override.id)
                .ok_or_else(|| WrapperError::UnknownParameter(param_override.id.clone()))?;

            match &mut self.editor {
                Some(editor) => editor.enter_text(index, &param_override.text),
                None => {
                    let param = &self.params.as_slice()[index];
                    let setter = ParamSetter::new(self.context.as_ref());
                    setter.begin_set_parameter(param);
                    setter.set_parameter_normalized(
                        param,
                        param.string_to_normalized_value(&param_override.text),
                    );
                    setter.end_set_parameter(param);
                }
            }

            if let Some(param) = self.params.param(&param_override.id) {
                paramex_log!(
                    "'{}' set to {} from '{}'",
                    param.name(),
                    param,
                    param_override.text
                );
            }
        }

        Ok(())
    }

    /// Reset the plugin and render audio through it until the backend runs out of audio. Returns
    /// the measured levels, or an error if the plugin failed during processing.
    pub fn run(&mut self) -> Result<RenderReport, WrapperError> {
        self.plugin.reset();

        let plugin = &mut self.plugin;
        let mut process_error = None;
        let report = self.backend.run(|buffer| match process_wrapper(|| plugin.process(buffer)) {
            ProcessStatus::Error(err) => {
                process_error = Some(err);
                false
            }
            _ => true,
        });

        match process_error {
            Some(err) => Err(WrapperError::ProcessingFailed(err)),
            None => {
                paramex_trace!(
                    "Rendered {} samples at {} Hz through {} channels",
                    report.num_samples,
                    self.buffer_config.sample_rate,
                    self.bus_config.num_output_channels
                );

                Ok(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::super::backend::Offline;
    use super::*;
    use crate::buffer::Buffer;
    use crate::context::gui::GuiContext;
    use crate::formatters::Unit;
    use crate::params::{FloatParam, FloatRange};
    use crate::util;

    struct TestGain {
        params: Arc<ParamLayout>,
        with_editor: bool,
    }

    impl Default for TestGain {
        fn default() -> Self {
            Self {
                params: Arc::new(
                    ParamLayout::new(vec![FloatParam::new(
                        "Gain",
                        0.0,
                        FloatRange::linear(-24.0, 24.0),
                        Unit::Decibel,
                    )])
                    .expect("Unique IDs"),
                ),
                with_editor: true,
            }
        }
    }

    impl Plugin for TestGain {
        const NAME: &'static str = "Test Gain";
        const VENDOR: &'static str = "paramex";
        const VERSION: &'static str = "0.0.1";

        fn params(&self) -> Arc<ParamLayout> {
            self.params.clone()
        }

        fn editor(&self, context: Arc<dyn GuiContext>) -> Option<KnobEditor> {
            self.with_editor
                .then(|| KnobEditor::new(self.params.clone(), context))
        }

        fn process(&mut self, buffer: &mut Buffer) -> ProcessStatus {
            let gain = self.params.as_slice()[0].value();
            buffer.apply_gain(util::db_to_gain(gain));

            ProcessStatus::Normal
        }
    }

    #[derive(Default)]
    struct Broken;

    impl Plugin for Broken {
        const NAME: &'static str = "Broken";
        const VENDOR: &'static str = "paramex";
        const VERSION: &'static str = "0.0.1";

        fn params(&self) -> Arc<ParamLayout> {
            Arc::new(ParamLayout::new(Vec::new()).expect("An empty layout is always valid"))
        }

        fn process(&mut self, _buffer: &mut Buffer) -> ProcessStatus {
            ProcessStatus::Error("oh no")
        }
    }

    fn make_wrapper<P: Plugin>(args: &[&str]) -> Result<Wrapper<P, Offline>, WrapperError> {
        let config =
            WrapperConfig::parse_from(std::iter::once("paramex").chain(args.iter().copied()));
        let backend = Offline::new(config.clone(), config.bus_config::<P>());

        Wrapper::new(backend, config)
    }

    #[test]
    fn renders_with_gain() {
        let mut wrapper =
            make_wrapper::<TestGain>(&["-n", "4", "--param", "gain=-6 dB"]).expect("Valid config");
        wrapper.apply_param_overrides().expect("Known parameter");
        assert_eq!(wrapper.param_info()[0].display, "-6.00 dB");

        let report = wrapper.run().expect("Processing succeeds");
        assert_eq!(report.num_samples, 4 * 512);
        approx::assert_relative_eq!(
            report.output_peak_db - report.input_peak_db,
            -6.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn overrides_without_editor() {
        let mut wrapper =
            make_wrapper::<TestGain>(&["--param", "gain=12"]).expect("Valid config");
        wrapper.editor = None;
        wrapper.apply_param_overrides().expect("Known parameter");
        assert_eq!(wrapper.params().as_slice()[0].value(), 12.0);
    }

    #[test]
    fn unknown_parameter() {
        let mut wrapper =
            make_wrapper::<TestGain>(&["--param", "volume=3"]).expect("Valid config");
        assert_eq!(
            wrapper.apply_param_overrides(),
            Err(WrapperError::UnknownParameter(String::from("volume")))
        );
    }

    #[test]
    fn incompatible_bus_config() {
        let result = make_wrapper::<TestGain>(&["-i", "1", "-o", "2"]);
        assert!(matches!(
            result.err(),
            Some(WrapperError::IncompatibleConfig(BusConfig {
                num_input_channels: 1,
                num_output_channels: 2,
            }))
        ));
    }

    #[test]
    fn processing_error() {
        let mut wrapper = make_wrapper::<Broken>(&["-n", "8"]).expect("Valid config");
        assert_eq!(wrapper.run(), Err(WrapperError::ProcessingFailed("oh no")));
    }
}
