//! Core library components.

pub mod constants;
pub mod props;
pub mod signing;
pub mod variant;
