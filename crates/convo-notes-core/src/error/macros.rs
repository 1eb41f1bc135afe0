//! Error macros for convo-notes

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ConvoError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid configuration errors
#[macro_export]
macro_rules! bail_config {
    ($path:expr, $reason:expr) => {
        return Err($crate::error::ConvoError::invalid_config($path, $reason))
    };
}
