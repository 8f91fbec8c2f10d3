//! crates/logging/src/macros.rs
//! Variadic logging macros.
//!
//! Every macro accepts an optional leading `tag: <&Tag>,` argument followed by
//! any number of values implementing [`Display`](core::fmt::Display). The
//! values are rendered back to back without separators.

/// Logs through an explicit [`Logger`](crate::Logger).
///
/// ```
/// use taglog::{CaptureBuffer, Flags, Logger, Severity, Tag};
///
/// let buffer = CaptureBuffer::new();
/// let logger = Logger::with_sink(buffer.clone().into());
/// logger.replace_flags(Flags::SEVERITY_PREFIX | Flags::TAG_PREFIX | Flags::END_OF_LINE_SUFFIX);
///
/// let db = Tag::new("db");
/// taglog::log_to!(logger, Severity::Warning, tag: &db, "slow query: ", 250, "ms");
/// taglog::log_to!(logger, Severity::Info, "done");
///
/// assert_eq!(buffer.contents(), "[Warning][db]slow query: 250ms\n[Info][NONE]done\n");
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $severity:expr, tag: $tag:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $severity,
            ::core::option::Option::Some($tag),
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
    ($logger:expr, $severity:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $severity,
            ::core::option::Option::None,
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Logs through the global logger at the given severity.
#[macro_export]
macro_rules! log {
    ($severity:expr $(, $($rest:tt)*)?) => {
        $crate::log_to!($crate::global(), $severity $(, $($rest)*)?)
    };
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace) through the global logger.
#[macro_export]
macro_rules! trace {
    () => {
        $crate::log!($crate::Severity::Trace)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Trace, $($rest)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug) through the global logger.
#[macro_export]
macro_rules! debug {
    () => {
        $crate::log!($crate::Severity::Debug)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($rest)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info) through the global logger.
///
/// ```no_run
/// let net = taglog::Tag::new("net");
/// taglog::info!(tag: &net, "listening on port ", 8080);
/// taglog::info!("ready");
/// ```
#[macro_export]
macro_rules! info {
    () => {
        $crate::log!($crate::Severity::Info)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Info, $($rest)+)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning) through the global logger.
#[macro_export]
macro_rules! warning {
    () => {
        $crate::log!($crate::Severity::Warning)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($rest)+)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error) through the global logger.
#[macro_export]
macro_rules! error {
    () => {
        $crate::log!($crate::Severity::Error)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Error, $($rest)+)
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal) through the global logger.
#[macro_export]
macro_rules! fatal {
    () => {
        $crate::log!($crate::Severity::Fatal)
    };
    ($($rest:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($rest)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CaptureBuffer, Flags, Logger, Severity, Tag};

    fn bare() -> (Logger, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        let logger = Logger::with_sink(buffer.clone().into());
        logger.replace_flags(Flags::TAG_PREFIX | Flags::END_OF_LINE_SUFFIX);
        (logger, buffer)
    }

    #[test]
    fn log_to_without_tag() {
        let (logger, buffer) = bare();
        crate::log_to!(logger, Severity::Info, "a", "b", "c");
        assert_eq!(buffer.contents(), "[NONE]abc\n");
    }

    #[test]
    fn log_to_with_tag_and_trailing_comma() {
        let (logger, buffer) = bare();
        let tag = Tag::new("io");
        crate::log_to!(logger, Severity::Debug, tag: &tag, 1, '+', 2.5,);
        assert_eq!(buffer.contents(), "[io]1+2.5\n");
    }

    #[test]
    fn log_to_with_no_values() {
        let (logger, buffer) = bare();
        crate::log_to!(logger, Severity::Trace);
        let tag = Tag::new("empty");
        crate::log_to!(logger, Severity::Trace, tag: &tag);
        assert_eq!(buffer.contents(), "[NONE]\n[empty]\n");
    }

    #[test]
    fn log_to_accepts_format_args() {
        let (logger, buffer) = bare();
        crate::log_to!(logger, Severity::Info, format_args!("{:>4}", 7));
        assert_eq!(buffer.contents(), "[NONE]   7\n");
    }

    #[test]
    fn variable_named_tag_is_a_value() {
        let (logger, buffer) = bare();
        let tag = "plain";
        crate::log_to!(logger, Severity::Info, tag);
        assert_eq!(buffer.contents(), "[NONE]plain\n");
    }
}
