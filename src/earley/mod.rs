//! The Earley engine: chart construction, transformation, and extraction.

pub mod recognize;
pub mod transform;
pub mod tree;

pub use recognize::{recognize, Chart, EarleyItem, RecognizerOptions};
pub use transform::{transform, CompletedSpan};
pub use tree::{extract, Child, Tree};
