//! Integer arithmetic helpers for grid coordinates and rotations

/// Floor division, round-half-up division and Euclidean wrapping
pub mod rounding;
