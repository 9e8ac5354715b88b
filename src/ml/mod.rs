//! CPU inference for the weather classifier.
//!
//! Pure Rust, no framework runtime: the trained network is small enough to
//! evaluate directly from its JSON weights.

pub mod classifier;
pub mod dense;

pub use classifier::{Classifier, HIDDEN_LAYERS};
pub use dense::{Activation, DenseLayer, DenseNetwork};
