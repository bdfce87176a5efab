//! Render configuration.
//!
//! # Environment Variables
//!
//! - `RGBLUT_THREADS` - row bands per render (0 = rayon pool size)
//! - `RGBLUT_BLEND` - float interpolation, `linear` or `legacy`
//!
//! Unparsable values are ignored and the default is kept.

use rgblut_lut::Blend;
use std::env;

/// Tunables for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Number of row bands; 0 uses the current rayon pool size.
    pub threads: usize,
    /// Interpolation between float table entries.
    pub blend: Blend,
}

impl RenderOptions {
    /// Default options with environment overrides applied.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(threads) = env_threads() {
            opts.threads = threads;
        }
        if let Some(blend) = env_blend() {
            opts.blend = blend;
        }
        opts
    }

    /// Sets the number of row bands.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the float interpolation mode.
    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

fn env_threads() -> Option<usize> {
    env::var("RGBLUT_THREADS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
}

fn env_blend() -> Option<Blend> {
    env::var("RGBLUT_BLEND")
        .ok()
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = RenderOptions::default().with_threads(3).with_blend(Blend::Legacy);
        assert_eq!(opts.threads, 3);
        assert_eq!(opts.blend, Blend::Legacy);
        assert_eq!(RenderOptions::default().threads, 0);
        assert_eq!(RenderOptions::default().blend, Blend::Linear);
    }

    // Single test touching the process environment, so no other test races it.
    #[test]
    fn test_env_overrides() {
        // SAFETY: no other test in this crate reads or writes these variables.
        unsafe {
            env::set_var("RGBLUT_THREADS", "5");
            env::set_var("RGBLUT_BLEND", "legacy");
        }
        let opts = RenderOptions::from_env();
        assert_eq!(opts.threads, 5);
        assert_eq!(opts.blend, Blend::Legacy);

        unsafe {
            env::set_var("RGBLUT_THREADS", "many");
            env::set_var("RGBLUT_BLEND", "cubic");
        }
        assert_eq!(RenderOptions::from_env(), RenderOptions::default());

        unsafe {
            env::remove_var("RGBLUT_THREADS");
            env::remove_var("RGBLUT_BLEND");
        }
    }
}
