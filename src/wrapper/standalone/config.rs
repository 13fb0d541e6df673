use clap::Parser;
use std::str::FromStr;

use crate::plugin::{BusConfig, Plugin};

/// Configuration for a standalone plugin that would normally be provided by the DAW.
#[derive(Debug, Clone, Parser)]
#[clap(about = None, long_about = None)]
pub struct WrapperConfig {
    // These will default to the plugin's default input and output channel count. We could set the
    // default value here to match those, but that would require a custom Args+FromArgMatches
    // implementation and access to the `Plugin` type.
    /// The number of input channels.
    #[clap(value_parser, short = 'i', long)]
    pub input_channels: Option<u32>,
    /// The number of output channels.
    #[clap(value_parser, short = 'o', long)]
    pub output_channels: Option<u32>,
    /// The sample rate used for rendering.
    #[clap(value_parser, short = 'r', long, default_value = "48000")]
    pub sample_rate: f32,
    /// The size of each block passed to the plugin, in samples.
    #[clap(value_parser, short = 'p', long, default_value = "512")]
    pub period_size: u32,
    /// The number of blocks to render.
    #[clap(value_parser, short = 'n', long, default_value = "94")]
    pub num_periods: u32,

    /// The frequency of the sine wave sent to the plugin's inputs, in hertz.
    #[clap(value_parser, long, default_value = "440")]
    pub tone_frequency: f32,
    /// The peak amplitude of the sine wave sent to the plugin's inputs, as a linear gain.
    #[clap(value_parser, long, default_value = "0.5")]
    pub tone_amplitude: f32,

    /// Set a parameter before rendering, e.g. '--param gainwet=-6dB'. The value is parsed the same
    /// way as text typed into the plugin's editor. Can be passed multiple times.
    #[clap(value_parser, long = "param", value_name = "ID=VALUE")]
    pub param_overrides: Vec<ParamOverride>,

    /// Print the plugin's parameters as JSON and exit without rendering anything.
    #[clap(long, action)]
    pub list_params: bool,
}

impl WrapperConfig {
    /// The bus configuration for `P`, using the plugin's default channel counts for anything that
    /// wasn't specified on the command line.
    pub fn bus_config<P: Plugin>(&self) -> BusConfig {
        BusConfig {
            num_input_channels: self.input_channels.unwrap_or(P::DEFAULT_NUM_INPUTS),
            num_output_channels: self.output_channels.unwrap_or(P::DEFAULT_NUM_OUTPUTS),
        }
    }
}

/// A parameter value passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOverride {
    /// The parameter's ID.
    pub id: String,
    /// The value as text, parsed by the parameter's unit.
    pub text: String,
}

impl FromStr for ParamOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((id, text)) if !id.trim().is_empty() => Ok(ParamOverride {
                id: id.trim().to_owned(),
                text: text.to_owned(),
            }),
            _ => Err(format!("'{s}' is not in the form ID=VALUE")),
        }
    }
}
