// logging.rs - Browser console output for tracing events
//
// The hydrated client has no stdout. tracing-subscriber formats each event
// and the finished line goes to the console method matching its level.

use tracing::Level;

/// Browser `console` method an event is written with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO => Self::Info,
            _ => Self::Debug,
        }
    }
}

/// One formatted event as a console line, without the trailing newline
pub fn console_line(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let line = text.trim_end_matches(['\r', '\n']);
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(feature = "hydrate")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::{console_line, ConsoleMethod};

    /// Buffers one formatted event and logs it on drop
    pub struct ConsoleWriter {
        method: ConsoleMethod,
        buf: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(method: ConsoleMethod) -> Self {
            Self {
                method,
                buf: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let Some(line) = console_line(&self.buf) else {
                return;
            };
            let line = JsValue::from_str(&line);
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&line),
                ConsoleMethod::Warn => web_sys::console::warn_1(&line),
                ConsoleMethod::Info => web_sys::console::info_1(&line),
                ConsoleMethod::Debug => web_sys::console::debug_1(&line),
            }
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(ConsoleMethod::Info)
        }

        fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
        }
    }

    /// Install the global subscriber for the hydrated client
    pub fn init_console() {
        let installed = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(MakeConsoleWriter)
            .try_init();
        if installed.is_err() {
            web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already set"));
        }
    }
}

#[cfg(feature = "hydrate")]
pub use console::{init_console, ConsoleWriter, MakeConsoleWriter};
