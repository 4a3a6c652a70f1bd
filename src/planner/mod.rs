//! Planning module: the classification-and-partitioning pipeline
//!
//! Raw issue records flow one way through the stages:
//! 1. Extract phase/priority/component markers from each body (extract)
//! 2. Score each item from its phase and priority (score)
//! 3. Classify each item into a work area (classify)
//! 4. Group by area and keep the top-scoring tracks (partition)
//!
//! Every stage is a pure function of its inputs, so a planning run can be
//! repeated and always reproduces the same plan.

pub mod classify;
pub mod extract;
pub mod partition;
pub mod score;
pub mod types;

pub use classify::{Classifier, FALLBACK_AREA};
pub use partition::partition;
pub use score::Priority;
pub use types::{AreaRule, Track, WorkItem};
