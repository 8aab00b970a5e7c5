// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Debug output for the clock gating engine.
//!
//! A board registers a sink once during initialization:
//!
//! ```rust,ignore
//! static mut CONSOLE: UartWriter = UartWriter::new();
//! unsafe { clock_gate::debug::set_debug_writer(&mut *core::ptr::addr_of_mut!(CONSOLE)) };
//! ```
//!
//! and then `debug!` writes formatted lines to it. Until a sink is
//! registered, messages are discarded.

use core::fmt::{self, Write};
use core::ptr::addr_of_mut;

/// Byte sink for debug output, typically a polled UART.
pub trait IoWrite {
    /// Write `buf` and return how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> usize;
}

static mut DEBUG_WRITER: Option<&'static mut dyn IoWrite> = None;

/// Install the sink used by [`debug!`](crate::debug!).
///
/// # Safety
///
/// Must be called before any other code may print, and not concurrently with
/// [`debug!`](crate::debug!).
pub unsafe fn set_debug_writer(writer: &'static mut dyn IoWrite) {
    unsafe {
        *addr_of_mut!(DEBUG_WRITER) = Some(writer);
    }
}

struct DebugWriter<'a> {
    sink: &'a mut dyn IoWrite,
}

impl Write for DebugWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let written = self.sink.write(bytes);
            if written == 0 {
                return Err(fmt::Error);
            }
            bytes = &bytes[written.min(bytes.len())..];
        }
        Ok(())
    }
}

#[doc(hidden)]
pub fn debug_fmt(args: fmt::Arguments) {
    // Single-threaded: nothing else can hold the writer while we print.
    let sink = unsafe { (*addr_of_mut!(DEBUG_WRITER)).as_deref_mut() };
    if let Some(sink) = sink {
        let mut writer = DebugWriter { sink };
        let _ = writer.write_fmt(args);
        let _ = writer.write_str("\r\n");
    }
}

/// Print a formatted line to the registered debug writer.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::debug::debug_fmt(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ChunkedSink {
        buf: [u8; 32],
        len: usize,
        chunk: usize,
    }

    impl IoWrite for ChunkedSink {
        fn write(&mut self, buf: &[u8]) -> usize {
            let n = buf.len().min(self.chunk);
            self.buf[self.len..self.len + n].copy_from_slice(&buf[..n]);
            self.len += n;
            n
        }
    }

    #[test]
    fn test_partial_writes_are_retried() {
        let mut sink = ChunkedSink {
            buf: [0; 32],
            len: 0,
            chunk: 3,
        };
        let mut writer = DebugWriter { sink: &mut sink };
        write!(writer, "{:#x} -> {:#x}", 1, 0x4000).unwrap();

        assert_eq!(&sink.buf[..sink.len], b"0x1 -> 0x4000");
    }

    #[test]
    fn test_stalled_sink_is_an_error() {
        let mut sink = ChunkedSink {
            buf: [0; 32],
            len: 0,
            chunk: 0,
        };
        let mut writer = DebugWriter { sink: &mut sink };
        assert!(writer.write_str("lost").is_err());
    }
}
