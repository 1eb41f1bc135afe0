//! Convo Notes Core Library
//!
//! Classification, duplicate detection and note assembly for turning AI
//! conversation transcripts into knowledge-base notes.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod index;
pub mod logging;
pub mod metadata;
pub mod note;
pub mod source;
pub mod taxonomy;
pub mod topics;
