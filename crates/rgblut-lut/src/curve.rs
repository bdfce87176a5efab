//! Control-point curves.
//!
//! A concrete [`CurveEvaluator`] for hosts (and tests) that do not bring their
//! own curve storage. Each channel is a piecewise-linear curve through a
//! sorted list of control points; the default is the identity curve through
//! (0, 0) and (1, 1).
//!
//! # Example
//!
//! ```rust
//! use rgblut_lut::{Channel, ControlPointCurve, CurveEvaluator, RgbCurves};
//!
//! let mut curves = RgbCurves::default();
//! *curves.channel_mut(Channel::Red) = "0:0.1,1:1".parse::<ControlPointCurve>().unwrap();
//!
//! assert!((curves.evaluate(Channel::Red, 0.0, 0.0) - 0.1).abs() < 1e-12);
//! assert_eq!(curves.evaluate(Channel::Green, 0.0, 0.5), 0.5);
//! ```

use crate::{Channel, CurveEvaluator, LutError};
use std::str::FromStr;

/// A single control point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoint {
    /// Parametric position (input).
    pub position: f64,
    /// Curve value (output).
    pub value: f64,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub const fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }
}

/// Piecewise-linear curve through control points sorted by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointCurve {
    points: Vec<ControlPoint>,
}

impl ControlPointCurve {
    /// Creates a curve from arbitrary points; they are sorted by position.
    pub fn new(mut points: Vec<ControlPoint>) -> Self {
        points.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { points }
    }

    /// Identity curve (value = position).
    pub fn identity() -> Self {
        Self {
            points: vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)],
        }
    }

    /// Control points, sorted by position.
    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all control points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Inserts a control point, keeping the list sorted.
    pub fn add_control_point(&mut self, position: f64, value: f64) {
        let at = self.points.partition_point(|p| p.position <= position);
        self.points.insert(at, ControlPoint::new(position, value));
    }

    /// Value at `position`.
    ///
    /// - no points: identity
    /// - one point: that point's value everywhere
    /// - outside the first/last point: clamped to the end values
    pub fn evaluate(&self, position: f64) -> f64 {
        let pts = &self.points;
        match pts.len() {
            0 => return position,
            1 => return pts[0].value,
            _ => {}
        }

        let first = pts[0];
        let last = pts[pts.len() - 1];
        if position <= first.position {
            return first.value;
        }
        if position >= last.position {
            return last.value;
        }

        // first index whose position is > position; always in 1..len
        let hi = pts.partition_point(|p| p.position <= position);
        let p0 = pts[hi - 1];
        let p1 = pts[hi];
        let span = p1.position - p0.position;
        if span <= 0.0 {
            return p0.value;
        }
        let t = (position - p0.position) / span;
        p0.value + (p1.value - p0.value) * t
    }

    /// Adds a control point halfway between every pair of neighbours.
    ///
    /// New points take the curve's current value at their position, so the
    /// shape is unchanged and the user gets finer handles to drag. A curve
    /// with fewer than two points is reset to the identity curve instead.
    /// Coincident neighbours are skipped.
    pub fn subdivide(&mut self) {
        if self.points.len() <= 1 {
            *self = Self::identity();
            return;
        }

        let mut points = Vec::with_capacity(self.points.len() * 2 - 1);
        for pair in self.points.windows(2) {
            points.push(pair[0]);
            if pair[0] != pair[1] {
                let position = (pair[0].position + pair[1].position) / 2.0;
                points.push(ControlPoint::new(position, self.evaluate(position)));
            }
        }
        points.extend(self.points.last().copied());
        self.points = points;
    }
}

impl Default for ControlPointCurve {
    fn default() -> Self {
        Self::identity()
    }
}

impl FromStr for ControlPointCurve {
    type Err = LutError;

    /// Parses `position:value` pairs separated by commas, e.g. `0:0,0.5:0.7,1:1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LutError::InvalidCurve("no control points".into()));
        }

        let mut points = Vec::new();
        for pair in s.split(',') {
            let (pos, val) = pair
                .split_once(':')
                .ok_or_else(|| LutError::InvalidCurve(format!("expected position:value, got '{pair}'")))?;
            let position: f64 = pos
                .trim()
                .parse()
                .map_err(|_| LutError::InvalidCurve(format!("bad position '{}'", pos.trim())))?;
            let value: f64 = val
                .trim()
                .parse()
                .map_err(|_| LutError::InvalidCurve(format!("bad value '{}'", val.trim())))?;
            if !position.is_finite() || !value.is_finite() {
                return Err(LutError::InvalidCurve(format!("non-finite point '{pair}'")));
            }
            points.push(ControlPoint::new(position, value));
        }

        Ok(Self::new(points))
    }
}

/// One curve per color channel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RgbCurves {
    /// Red curve.
    pub red: ControlPointCurve,
    /// Green curve.
    pub green: ControlPointCurve,
    /// Blue curve.
    pub blue: ControlPointCurve,
}

impl RgbCurves {
    /// Creates a curve set from its three channels.
    pub fn new(red: ControlPointCurve, green: ControlPointCurve, blue: ControlPointCurve) -> Self {
        Self { red, green, blue }
    }

    /// Curve for `channel`.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &ControlPointCurve {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Mutable curve for `channel`.
    #[inline]
    pub fn channel_mut(&mut self, channel: Channel) -> &mut ControlPointCurve {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Subdivides all three curves.
    pub fn subdivide_all(&mut self) {
        for ch in Channel::ALL {
            self.channel_mut(ch).subdivide();
        }
    }
}

impl CurveEvaluator for RgbCurves {
    /// Time is ignored: these curves are not animated.
    #[inline]
    fn evaluate(&self, channel: Channel, _time: f64, position: f64) -> f64 {
        self.channel(channel).evaluate(position)
    }
}
