//! Biased random integers from a path-encoded range expression.
//!
//! A request such as `/random-min-10-average-70&70-max-100` is parsed into a
//! [`RangeSpec`], and [`generate`] draws a [`SampleBatch`] of
//! [`BATCH_SIZE`] integers from it. Each draw picks between a Gaussian
//! centered on the average and a uniform draw over the whole range, with the
//! percentage acting as the weight of the Gaussian side.
//!
//! ```
//! use biasrand::{BATCH_SIZE, generate, parse};
//!
//! let spec = parse("/random-min-10-average-70&70-max-100").unwrap();
//! let batch = generate(&spec);
//!
//! assert_eq!(batch.len(), BATCH_SIZE);
//! assert!(batch.iter().all(|n| (10..=100).contains(n)));
//! ```

mod error;
mod generator;
mod parser;
mod rand;
mod range;
mod thread_random;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::parser::*;
pub use crate::rand::*;
pub use crate::range::*;
pub use crate::thread_random::*;
