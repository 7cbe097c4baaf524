//! Error macros for netpath

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::NetpathError::UsageError($msg.to_string()))
    };
}
