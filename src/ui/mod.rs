//! UI module for tipcalc
//!
//! This module contains the rendering functions for the calculator
//! screen: the input widgets and the full-screen layout.

mod fields;
mod render;

pub use render::draw;
