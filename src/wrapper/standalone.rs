//! An offline standalone host that instantiates a plugin, sets its parameters from text, renders a
//! test tone through it, and reports the result. This is mostly useful for quickly checking a
//! plugin's parameters and audio processing without a DAW.

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches};

use self::backend::Offline;
use self::wrapper::Wrapper;
use super::util::setup_logger;
use crate::plugin::Plugin;

mod backend;
mod config;
mod context;
mod wrapper;

pub use self::backend::RenderReport;
pub use self::config::{ParamOverride, WrapperConfig};
pub use self::wrapper::WrapperError;

/// Run a plugin in the offline standalone host. In order to use this, you will first need to make
/// your plugin's main struct `pub` and expose a `lib` artifact in addition to your plugin's binary:
///
/// ```toml
/// # Cargo.toml
///
/// [lib]
/// crate-type = ["lib"]
/// ```
///
/// You can then create a `src/main.rs` file that calls this function:
///
/// ```ignore
/// // src/main.rs
///
/// use plugin_name::PluginName;
///
/// fn main() {
///     paramex::prelude::paramex_export_standalone::<PluginName>();
/// }
/// ```
///
/// `--help` lists all available options. `--list-params` prints the plugin's parameters as JSON,
/// and `--param id=value` sets a parameter from text before rendering.
///
/// If the wrapped plugin fails to initialize or throws an error during audio processing, then this
/// function will return `false`.
pub fn paramex_export_standalone<P: Plugin>() -> bool {
    paramex_export_standalone_with_args::<P, _>(std::env::args())
}

/// The same as [`paramex_export_standalone()`], but with the arguments taken from an iterator
/// instead of using [`std::env::args()`].
pub fn paramex_export_standalone_with_args<P: Plugin, Args: IntoIterator<Item = String>>(
    args: Args,
) -> bool {
    setup_logger();

    // Instead of parsing this directly, we need to take a bit of a roundabout approach to get the
    // plugin's name and vendor in here since they'd otherwise be taken from paramex's own
    // `Cargo.toml` file.
    let config = WrapperConfig::from_arg_matches(
        &WrapperConfig::command()
            .name(P::NAME)
            .author(P::VENDOR)
            .version(P::VERSION)
            .get_matches_from(args),
    )
    .unwrap_or_else(|err| err.exit());

    match run_wrapper::<P>(config) {
        Ok(()) => true,
        Err(err) => {
            paramex_error!("{:#}", err);
            false
        }
    }
}

fn run_wrapper<P: Plugin>(config: WrapperConfig) -> anyhow::Result<()> {
    let backend = Offline::new(config.clone(), config.bus_config::<P>());
    let mut wrapper = Wrapper::<P, _>::new(backend, config.clone())
        .with_context(|| format!("Could not start '{}'", P::NAME))?;
    wrapper
        .apply_param_overrides()
        .context("Could not apply the parameter values from the command line")?;

    if config.list_params {
        let listing = serde_json::to_string_pretty(&wrapper.param_info())
            .context("Could not serialize the parameter list")?;
        println!("{listing}");

        return Ok(());
    }

    let report = wrapper
        .run()
        .with_context(|| format!("Could not render audio through '{}'", P::NAME))?;
    paramex_log!(
        "Rendered {} samples, input peak: {:.2} dB, output peak: {:.2} dB",
        report.num_samples,
        report.input_peak_db,
        report.output_peak_db
    );

    Ok(())
}
