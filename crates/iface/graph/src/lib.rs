//! Ancestor discovery over the declared-type inheritance graph.
//!
//! This is the leaf layer of the engine: a depth-first, left-to-right,
//! first-occurrence-deduplicated walk of a subject's inheritance DAG, plus
//! the ordered list utilities (`flatten`, `unique`) the upper layers build
//! their results with. The traversal is the single source of truth for
//! every extends/implements query; no cached registry is consulted.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod ancestry;
mod util;

pub use ancestry::{ancestor_names, ancestors};
pub use util::{first_occurrence, flatten, unique};
