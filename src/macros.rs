// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

// Run logging. First argument is the sink (`&mut dyn Progress`), the rest is
// a format string. Each line goes to the `log` facade AND the sink.

/// Info-level run logging
#[macro_export]
macro_rules! logf {
    ($sink:expr, $($arg:tt)*) => {
        $crate::progress::emit($sink, ::log::Level::Info, format!($($arg)*))
    };
}

/// Debug-level run logging
#[macro_export]
macro_rules! logd {
    ($sink:expr, $($arg:tt)*) => {
        $crate::progress::emit($sink, ::log::Level::Debug, format!($($arg)*))
    };
}

/// Warning-level run logging
#[macro_export]
macro_rules! logw {
    ($sink:expr, $($arg:tt)*) => {
        $crate::progress::emit($sink, ::log::Level::Warn, format!($($arg)*))
    };
}

/// Error-level run logging
#[macro_export]
macro_rules! loge {
    ($sink:expr, $($arg:tt)*) => {
        $crate::progress::emit($sink, ::log::Level::Error, format!($($arg)*))
    };
}
