//! Lookup table construction.
//!
//! Entry `i` of each channel holds the channel curve sampled at position
//! `i / (N - 1)`, converted by the depth's [`LutEntry::quantize`] rule.
//! Tables are built once per render and shared read-only by every worker.

use crate::{Channel, CurveEvaluator, LutEntry, LutError, LutResult};
use tracing::debug;

/// Samples curves into a [`RgbLut`].
///
/// # Example
///
/// ```rust
/// use rgblut_lut::{ConstantCurves, CurveEvaluator, LutBuilder};
///
/// let flat = ConstantCurves([0.5, 0.5, 0.5]);
/// let lut = LutBuilder::new(Some(&flat as &dyn CurveEvaluator))
///     .unwrap()
///     .build::<u8>();
/// assert_eq!(lut.get(0, 255), 128);
/// ```
#[derive(Clone, Copy)]
pub struct LutBuilder<'a> {
    evaluator: &'a dyn CurveEvaluator,
    time: f64,
}

impl<'a> LutBuilder<'a> {
    /// Creates a builder sampling at time 0.
    ///
    /// Fails with [`LutError::MissingEvaluator`] when the host has no curve
    /// capability.
    pub fn new(evaluator: Option<&'a dyn CurveEvaluator>) -> LutResult<Self> {
        let evaluator = evaluator.ok_or(LutError::MissingEvaluator)?;
        Ok(Self { evaluator, time: 0.0 })
    }

    /// Sets the time the curves are sampled at.
    pub fn at_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Builds a table for component type `T`.
    pub fn build<T: LutEntry>(&self) -> RgbLut<T> {
        let size = T::LUT_SIZE;
        let last = (size - 1) as f64;

        let channels = Channel::ALL.map(|ch| {
            (0..size)
                .map(|i| {
                    let position = i as f64 / last;
                    T::quantize(self.evaluator.evaluate(ch, self.time, position))
                })
                .collect::<Vec<T>>()
        });

        let depth = T::DEPTH;
        debug!(depth = %depth, size, time = self.time, "Built RGB lookup table");
        RgbLut { channels }
    }
}

impl std::fmt::Debug for LutBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LutBuilder").field("time", &self.time).finish_non_exhaustive()
    }
}

/// Three per-channel tables of `T::LUT_SIZE` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbLut<T> {
    channels: [Vec<T>; 3],
}

impl<T: LutEntry> RgbLut<T> {
    /// Entries per channel.
    #[inline]
    pub fn size(&self) -> usize {
        self.channels[0].len()
    }

    /// Entry `index` of channel `channel` (0 = red, 1 = green, 2 = blue).
    ///
    /// # Panics
    ///
    /// Panics if `channel > 2` or `index >= size()`.
    #[inline]
    pub fn get(&self, channel: usize, index: usize) -> T {
        self.channels[channel][index]
    }

    /// Full table for one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &[T] {
        &self.channels[channel.index()]
    }

    /// Table by component index (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn component(&self, component: usize) -> &[T] {
        &self.channels[component]
    }

    /// `true` if every channel equals what identity curves produce.
    pub fn is_identity(&self) -> bool {
        let last = (self.size() - 1) as f64;
        self.channels.iter().all(|table| {
            table
                .iter()
                .enumerate()
                .all(|(i, &v)| v == T::quantize(i as f64 / last))
        })
    }
}
