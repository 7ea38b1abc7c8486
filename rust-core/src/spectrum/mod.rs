//! Frequency-domain evaluation by direct DTFT summation

pub mod grid;
pub mod dtft;
pub mod analysis;

pub use grid::{default_frequency_grid, normalized_frequency_grid, uniform_grid, DEFAULT_GRID_LEN};
pub use dtft::{tftd_numeric, dtft_at, DtftConfig, DtftEvaluator};
pub use analysis::{Spectrum, unwrap_phase};
