//! Traits and structs describing plugins and their configuration.

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::context::gui::GuiContext;
use crate::editor::KnobEditor;
use crate::params::ParamLayout;

/// Basic functionality that needs to be implemented by a plugin. The host creates the plugin using
/// its `Default` implementation, negotiates a bus layout, initializes it, and then calls
/// [`process()`][Self::process()] once per audio block from its audio thread.
///
/// This crate does not implement any state persistence. Parameter values live in the plugin's
/// [`ParamLayout`] for as long as the plugin exists.
pub trait Plugin: Default + Send + 'static {
    const NAME: &'static str;
    const VENDOR: &'static str;

    /// Semver compatible version string (e.g. `0.0.1`).
    const VERSION: &'static str;

    /// The default number of input channels. The host may try other layouts through
    /// [`accepts_bus_config()`][Self::accepts_bus_config()].
    const DEFAULT_NUM_INPUTS: u32 = 2;
    /// The default number of output channels.
    const DEFAULT_NUM_OUTPUTS: u32 = 2;

    /// The plugin's parameters. The host and the editor will both hold on to a clone of this
    /// `Arc`, and the plugin reads from the same layout during processing.
    fn params(&self) -> Arc<ParamLayout>;

    /// The plugin's editor, if it has one. The editor should share the layout returned from
    /// [`params()`][Self::params()], and it writes parameter values through `context`.
    fn editor(&self, context: Arc<dyn GuiContext>) -> Option<KnobEditor> {
        let _ = context;
        None
    }

    /// Whether the plugin supports a bus config. This only acts as a check, and the plugin shouldn't
    /// do anything beyond returning true or false. By default any symmetrical layout is accepted.
    fn accepts_bus_config(&self, config: &BusConfig) -> bool {
        config.num_input_channels == config.num_output_channels && config.num_output_channels > 0
    }

    /// Initialize the plugin for the given bus and buffer configurations. Expensive allocations
    /// belong here, not in [`process()`][Self::process()]. Returning false will cause the host to
    /// refuse to start processing.
    fn initialize(&mut self, bus_config: &BusConfig, buffer_config: &BufferConfig) -> bool {
        let _ = (bus_config, buffer_config);
        true
    }

    /// Clear internal state such as filters and envelopes. Called before processing starts again
    /// after a pause. This is always called after `initialize()`.
    fn reset(&mut self) {}

    /// Process audio. The host's input buffers have already been copied to the output buffers, and
    /// output channels without a matching input have been cleared.
    ///
    /// This is called from the audio thread. It must not allocate, lock, or block, and it must
    /// treat an empty buffer as a no-op.
    fn process(&mut self, buffer: &mut Buffer) -> ProcessStatus;
}

/// The plugin's IO configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// The number of input channels for the plugin.
    pub num_input_channels: u32,
    /// The number of output channels for the plugin.
    pub num_output_channels: u32,
}

/// Configuration for (the host's) audio buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferConfig {
    /// The current sample rate.
    pub sample_rate: f32,
    /// The maximum buffer size the host will use. The plugin should be able to accept variable
    /// sized buffers up to this size.
    pub max_buffer_size: u32,
}

/// Indicates the current situation after the plugin has processed audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Something went wrong while processing audio.
    Error(&'static str),
    /// The plugin has finished processing audio. Since this plugin has no tail, the host may stop
    /// calling the process function once its input is silent.
    Normal,
}
