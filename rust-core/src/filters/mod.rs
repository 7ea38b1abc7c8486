//! Rectangular windowing and linear convolution

pub mod windows;
pub mod convolution;

pub use windows::{Window, rect_centered, apply_window};
pub use convolution::{ConvolutionMethod, conv_discrete, conv_discrete_with, direct_convolve, fft_convolve};
