//! Audio buffers passed to a plugin's process function.

/// The audio buffers used during processing. This contains the output buffers with the inputs
/// already copied to the outputs, so a plugin processes its audio in place. All channels have the
/// same length.
#[derive(Default)]
pub struct Buffer<'a> {
    /// Contains slices for the plugin's outputs. The host sets these up before every process call.
    output_slices: Vec<&'a mut [f32]>,
}

impl<'a> Buffer<'a> {
    /// Wrap a set of equally sized channel slices. This allocates, so hosts should do this before
    /// entering the process call.
    pub fn from_channels(output_slices: Vec<&'a mut [f32]>) -> Self {
        paramex_debug_assert!(
            output_slices
                .windows(2)
                .all(|pair| pair[0].len() == pair[1].len()),
            "All channels in a buffer need to have the same length"
        );

        Self { output_slices }
    }

    /// Returns the number of samples per channel in this buffer.
    #[inline]
    pub fn samples(&self) -> usize {
        self.output_slices.first().map_or(0, |channel| channel.len())
    }

    /// Returns the number of channels in this buffer.
    #[inline]
    pub fn channels(&self) -> usize {
        self.output_slices.len()
    }

    /// Returns true if this buffer does not contain any samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples() == 0
    }

    /// Obtain the raw audio buffers, one slice per channel.
    #[inline]
    pub fn as_slice(&mut self) -> &mut [&'a mut [f32]] {
        &mut self.output_slices
    }

    /// The same as [`as_slice()`][Self::as_slice()], but for a non-mutable reference.
    #[inline]
    pub fn as_slice_immutable(&self) -> &[&'a mut [f32]] {
        &self.output_slices
    }

    /// Multiply every sample in every channel by `gain`. Does not allocate.
    #[inline]
    pub fn apply_gain(&mut self, gain: f32) {
        for channel in self.output_slices.iter_mut() {
            for sample in channel.iter_mut() {
                *sample *= gain;
            }
        }
    }
}
