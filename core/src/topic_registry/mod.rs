//! Topic registry for the quiz app
//!
//! This module provides the static topic catalog and lookups over it. Question
//! content lives in the files named by each topic's `data_file` and is loaded
//! elsewhere.

mod catalog;
mod topic_registry;

pub use catalog::TOPICS;
pub use topic_registry::*;
