//! dspmini - Discrete-Time Signal Core
//!
//! Sparse-to-dense signal construction, centered rectangular windowing,
//! exact-support linear convolution and numeric DTFT evaluation, with
//! optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod filters;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DspError, DspResult};
pub use signal::{DiscreteSignal, signal_from_pairs};
pub use filters::{Window, rect_centered, apply_window, conv_discrete};
pub use spectrum::{Spectrum, DtftEvaluator, tftd_numeric};
