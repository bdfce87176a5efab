//! The curve evaluation capability.
//!
//! Curves are authored, stored and keyframed by the host. The LUT builder
//! only asks for values: given a channel, a time and a parametric position in
//! `[0, 1]`, the evaluator returns the curve's value there.

use crate::LutError;

/// Color channel a curve applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red curve (component 0)
    Red = 0,
    /// Green curve (component 1)
    Green = 1,
    /// Blue curve (component 2)
    Blue = 2,
}

impl Channel {
    /// All channels in component order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Component index of this channel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Channel {
    type Error = LutError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            _ => Err(LutError::InvalidOption {
                what: "channel",
                value: value.to_string(),
            }),
        }
    }
}

/// Evaluates per-channel parametric curves.
///
/// Implemented for any `Fn(Channel, f64, f64) -> f64 + Sync` closure, so a
/// host can wrap its own curve storage without a dedicated type:
///
/// ```rust
/// use rgblut_lut::{Channel, CurveEvaluator};
///
/// let invert = |_: Channel, _time: f64, p: f64| 1.0 - p;
/// assert_eq!(invert.evaluate(Channel::Green, 0.0, 0.25), 0.75);
/// ```
pub trait CurveEvaluator: Sync {
    /// Value of `channel`'s curve at `time` and parametric `position` in `[0, 1]`.
    fn evaluate(&self, channel: Channel, time: f64, position: f64) -> f64;
}

impl<F> CurveEvaluator for F
where
    F: Fn(Channel, f64, f64) -> f64 + Sync,
{
    #[inline]
    fn evaluate(&self, channel: Channel, time: f64, position: f64) -> f64 {
        self(channel, time, position)
    }
}

/// Identity curves on every channel: value equals position.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCurves;

impl CurveEvaluator for IdentityCurves {
    #[inline]
    fn evaluate(&self, _channel: Channel, _time: f64, position: f64) -> f64 {
        position
    }
}

/// Flat curves: each channel returns its constant regardless of position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantCurves(pub [f64; 3]);

impl CurveEvaluator for ConstantCurves {
    #[inline]
    fn evaluate(&self, channel: Channel, _time: f64, _position: f64) -> f64 {
        self.0[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_index_roundtrip() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
            assert_eq!(Channel::try_from(i).unwrap(), *ch);
        }
        assert!(Channel::try_from(3).is_err());
    }

    #[test]
    fn test_identity_and_constant() {
        assert_eq!(IdentityCurves.evaluate(Channel::Blue, 5.0, 0.3), 0.3);
        let flat = ConstantCurves([0.5, 0.1, 0.9]);
        assert_eq!(flat.evaluate(Channel::Red, 0.0, 0.0), 0.5);
        assert_eq!(flat.evaluate(Channel::Green, 0.0, 1.0), 0.1);
        assert_eq!(flat.evaluate(Channel::Blue, 0.0, 0.5), 0.9);
    }

    #[test]
    fn test_closure_sees_time() {
        let animated = |_: Channel, time: f64, p: f64| p * time;
        assert_eq!(animated.evaluate(Channel::Red, 2.0, 0.25), 0.5);
    }
}
