//! Opt-in log output for the test binaries. A binary pulls the initializer in with
//! [`enable_tracing!`], then `CORECHAIN_TRACE` picks the output format and `RUST_LOG`
//! filters the events.

#![deny(clippy::arithmetic_side_effects)]
#![deny(clippy::cast_possible_truncation)]

use ctor::ctor;
use std::env::var;
use tracing_subscriber::{
    fmt::format,
    EnvFilter,
    FmtSubscriber,
};

/// The name of the variable selecting the output format.
pub const TRACE_VAR: &str = "CORECHAIN_TRACE";

/// The output format of the test subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceFormat {
    Full,
    Compact,
    Pretty,
}

impl TraceFormat {
    /// Parses the value of [`TRACE_VAR`]. Unknown values keep the tests silent.
    pub fn from_var(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "1" | "true" | "on" => Some(Self::Full),
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }

    fn install(self) {
        let builder = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer();
        // Another subscriber may already be set by the test binary.
        let _ = match self {
            Self::Full => builder.try_init(),
            Self::Compact => builder.event_format(format().compact()).try_init(),
            Self::Pretty => builder.event_format(format().pretty()).try_init(),
        };
    }
}

#[ctor]
pub static TRACE: () = {
    if let Some(format) = var(TRACE_VAR)
        .ok()
        .as_deref()
        .and_then(TraceFormat::from_var)
    {
        format.install();
    }
};

/// Pulls the `TRACE` initializer into the calling test binary.
#[macro_export]
macro_rules! enable_tracing {
    () => {
        static _TRACE: &$crate::TRACE<()> = &$crate::TRACE;
    };
}
