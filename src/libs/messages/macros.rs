//! Printing macros for [`Message`](super::Message) values.
//!
//! In normal mode messages go straight to the terminal. When `TODO_DEBUG` or
//! `RUST_LOG` is set, the same messages are routed through `tracing` instead,
//! so they interleave with the structured log lines emitted by the store and
//! the background executor.
//!
//! ```rust,no_run
//! use todolist::{msg_error, msg_success};
//! use todolist::libs::messages::Message;
//!
//! msg_success!(Message::ToDoAdded(3));
//! msg_error!(Message::ToDoNotFound(9));
//! ```

use std::sync::OnceLock;

/// Environment variable that switches printing over to `tracing`.
pub const DEBUG_ENV: &str = "TODO_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_route {
    ($level:ident, $print:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $print:ident, $prefix:literal, $msg:expr, spaced) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $print!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Plain line. Pass `true` as a second argument to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "✅ ", $msg, spaced)
    };
}

/// Goes to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(error, eprintln, "❌ ", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(warn, println, "⚠️ ", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_route!(info, println, "ℹ️ ", $msg, spaced)
    };
}

/// Only emitted in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
