//! Routes panics in worker threads into the log instead of stderr.

use backtrace::Backtrace;
use std::{panic, thread};

/// Installs a process-wide hook that reports panics through `log::error!`,
/// with the panicking thread's name and a captured backtrace.
pub fn log_panics() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::new();

        let current = thread::current();
        let thread = current.name().unwrap_or("unnamed");

        let msg = match info.payload().downcast_ref::<&'static str>() {
            Some(msg) => *msg,
            None => info
                .payload()
                .downcast_ref::<String>()
                .map(String::as_str)
                .unwrap_or("Box<Any>"),
        };

        match info.location() {
            Some(location) => log::error!(
                target: "panic",
                "thread '{}' panicked at '{}': {}:{}\n{:?}",
                thread,
                msg,
                location.file(),
                location.line(),
                backtrace,
            ),
            None => log::error!(
                target: "panic",
                "thread '{}' panicked at '{}'\n{:?}",
                thread,
                msg,
                backtrace,
            ),
        }
    }));
}
