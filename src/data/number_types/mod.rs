//! # Number types
//!
//! The Big-M method needs numbers that can carry a symbolic, arbitrarily large constant next to
//! their ordinary value. Floats are used for both parts.
pub mod extended;
