//! Integration tests for rgblut crates.
//!
//! End-to-end checks that curves, tables, kernels and the tiled engine agree
//! with each other through the public render entry point.
