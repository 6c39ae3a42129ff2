//! Error macros for scalecalc

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ScaleError::UsageError($msg.to_string()))
    };
}
