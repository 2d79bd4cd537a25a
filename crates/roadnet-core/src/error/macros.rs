//! Error macros for roadnet

/// Return early with an invalid value error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RoadnetError::invalid_value($context, $value))
    };
}

/// Return early with an unknown vertex error
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($name:expr) => {
        return Err($crate::error::RoadnetError::unknown_vertex($name))
    };
}
