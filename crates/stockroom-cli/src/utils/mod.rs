//! Shared CLI utilities.

pub mod input;
