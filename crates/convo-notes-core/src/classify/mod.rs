//! Keyword classifiers for conversation text
//!
//! Both classifiers take their taxonomy at construction and match keywords
//! as plain substrings of the lower-cased text. There is no weighting: one
//! occurrence anywhere is enough.

mod activity;
mod domain;

pub use activity::ActivityClassifier;
pub use domain::DomainClassifier;
