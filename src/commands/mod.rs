//! CLI commands for convo-notes

pub mod classify;
pub mod convert;
pub mod dispatch;
pub mod index;
