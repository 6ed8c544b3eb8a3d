//! Logging shims over the optional `log` dependency.
//!
//! With the `logging` feature the macros forward to `log`; without it the
//! arguments are still type-checked but nothing is emitted.

#[cfg(feature = "logging")]
macro_rules! trace_log {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_log {
    ($($arg:tt)+) => {
        if false {
            ::std::mem::drop(format!($($arg)+));
        }
    };
}

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        log::debug!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        if false {
            ::std::mem::drop(format!($($arg)+));
        }
    };
}
