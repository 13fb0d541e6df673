use std::f32::consts::TAU;

use super::config::WrapperConfig;
use crate::buffer::Buffer;
use crate::plugin::BusConfig;
use crate::util;

/// An audio backend for the standalone wrapper.
pub trait Backend: 'static + Send {
    /// Start processing audio on this thread. The process callback will be called whenever there's
    /// a new block of audio to be processed. The process callback receives the audio buffers for
    /// the wrapped plugin's outputs. Any inputs will have already been copied to this buffer, and
    /// outputs without a matching input are silent. This will block until the backend runs out of
    /// audio or until the process callback returns `false`, after which the measured levels are
    /// returned.
    fn run(&mut self, cb: impl FnMut(&mut Buffer) -> bool) -> RenderReport;
}

/// The levels measured while rendering audio through the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderReport {
    /// The number of samples per channel that have been processed.
    pub num_samples: u64,
    /// The highest absolute sample value sent to the plugin, in decibels.
    pub input_peak_db: f32,
    /// The highest absolute sample value produced by the plugin, in decibels.
    pub output_peak_db: f32,
}

/// Renders a fixed number of blocks of a sine wave through the plugin as fast as possible, without
/// connecting to any audio device. The input and output levels are measured along the way.
pub struct Offline {
    config: WrapperConfig,
    bus_config: BusConfig,

    /// The sine wave's phase in `[0, 1)`, kept between blocks.
    phase: f32,
}

impl Backend for Offline {
    fn run(&mut self, mut cb: impl FnMut(&mut Buffer) -> bool) -> RenderReport {
        let num_inputs = self.bus_config.num_input_channels as usize;
        let num_outputs = self.bus_config.num_output_channels as usize;
        let period_size = self.config.period_size as usize;
        let phase_delta = self.config.tone_frequency / self.config.sample_rate;

        let mut report = RenderReport::default();
        let mut input_peak = util::MINUS_INFINITY_GAIN;
        let mut output_peak = util::MINUS_INFINITY_GAIN;
        // The buffer is set up once and refilled in place for every period
        let mut channels = vec![vec![0.0f32; period_size]; num_outputs];
        let mut buffer =
            Buffer::from_channels(channels.iter_mut().map(|c| c.as_mut_slice()).collect());
        for _ in 0..self.config.num_periods {
            let start_phase = self.phase;
            for (channel_idx, channel) in buffer.as_slice().iter_mut().enumerate() {
                if channel_idx < num_inputs {
                    let mut phase = start_phase;
                    for sample in channel.iter_mut() {
                        *sample = (phase * TAU).sin() * self.config.tone_amplitude;
                        phase = (phase + phase_delta).fract();
                    }

                    self.phase = phase;
                } else {
                    channel.fill(0.0);
                }
            }

            input_peak = input_peak.max(util::peak_gain(buffer.as_slice_immutable()));

            let keep_going = cb(&mut buffer);
            output_peak = output_peak.max(util::peak_gain(buffer.as_slice_immutable()));
            report.num_samples += buffer.samples() as u64;

            if !keep_going {
                break;
            }
        }

        report.input_peak_db = util::gain_to_db(input_peak);
        report.output_peak_db = util::gain_to_db(output_peak);

        report
    }
}

impl Offline {
    pub fn new(config: WrapperConfig, bus_config: BusConfig) -> Self {
        Self {
            config,
            bus_config,

            phase: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn make_backend(args: &[&str], num_inputs: u32, num_outputs: u32) -> Offline {
        let config = WrapperConfig::parse_from(std::iter::once("paramex").chain(args.iter().copied()));
        Offline::new(
            config,
            BusConfig {
                num_input_channels: num_inputs,
                num_output_channels: num_outputs,
            },
        )
    }

    #[test]
    fn renders_all_periods() {
        let mut backend = make_backend(&["-n", "3", "-p", "64"], 2, 2);
        let mut num_calls = 0;
        let report = backend.run(|buffer| {
            assert_eq!(buffer.channels(), 2);
            assert_eq!(buffer.samples(), 64);
            num_calls += 1;
            true
        });

        assert_eq!(num_calls, 3);
        assert_eq!(report.num_samples, 192);
        approx::assert_relative_eq!(report.input_peak_db, report.output_peak_db);
        approx::assert_relative_eq!(
            report.input_peak_db,
            util::gain_to_db(0.5),
            epsilon = 0.01
        );
    }

    #[test]
    fn reuses_the_buffer() {
        let mut backend = make_backend(&["-n", "4", "-p", "32"], 2, 2);
        let mut slice_ptrs = Vec::new();
        backend.run(|buffer| {
            let slices = buffer.as_slice_immutable();
            slice_ptrs.push((slices.as_ptr().cast::<()>(), slices[1].as_ptr()));
            true
        });

        assert_eq!(slice_ptrs.len(), 4);
        assert!(slice_ptrs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn stops_when_asked() {
        let mut backend = make_backend(&["-n", "10"], 1, 1);
        let mut num_calls = 0;
        backend.run(|_| {
            num_calls += 1;
            false
        });

        assert_eq!(num_calls, 1);
    }

    #[test]
    fn outputs_without_inputs_are_silent() {
        let mut backend = make_backend(&["-n", "1"], 1, 2);
        backend.run(|buffer| {
            let channels = buffer.as_slice_immutable();
            assert!(channels[0].iter().any(|sample| *sample != 0.0));
            assert!(channels[1].iter().all(|sample| *sample == 0.0));
            true
        });
    }
}
