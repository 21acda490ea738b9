//! Abstract interfaces for the AudioSet container
//!
//! Pure interfaces over the matrices the codec consumes. No concrete
//! storage lives here.

pub mod element;
pub mod matrix;

pub use element::{LabelElement, SampleElement};
pub use matrix::DenseMatrix;
