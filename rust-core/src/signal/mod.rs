//! Discrete signal construction and grid alignment

pub mod discrete;
pub mod builder;
pub mod grid;

pub use discrete::DiscreteSignal;
pub use builder::signal_from_pairs;
pub use grid::{align, AlignedGrid};
