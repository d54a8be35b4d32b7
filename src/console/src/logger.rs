use core::fmt::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A global logger was already installed
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "console already initialized"),
        }
    }
}

/// `log` backend writing to a console device.
///
/// Meant to live in a `static`; it stays silent until [`ConsoleLogger::init`]
/// hands it a sink.
pub struct ConsoleLogger<W> {
    sink: Mutex<Option<W>>,
}

impl<W> ConsoleLogger<W> {
    pub const fn new() -> Self {
        Self {
            sink: Mutex::new(None),
        }
    }
}

impl<W: Write + Send> ConsoleLogger<W> {
    /// Install `self` as the global logger, writing to `sink`.
    pub fn init(&'static self, sink: W, level: LevelFilter) -> Result<(), Error> {
        log::set_logger(self).map_err(|_| Error::AlreadyInitialized)?;
        *self.sink.lock() = Some(sink);
        log::set_max_level(level);
        Ok(())
    }

    /// Run `f` on the sink, if there is one.
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        self.sink.lock().as_mut().map(f)
    }

    /// Like [`ConsoleLogger::with_sink`], but gives up if the console is
    /// held. For panic paths, where the holder may be the panicking code.
    pub fn try_with_sink<R>(&self, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        let mut sink = self.sink.try_lock()?;
        sink.as_mut().map(f)
    }
}

impl<W: Write + Send> Log for ConsoleLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = self.sink.lock().as_mut() {
            // nowhere to report a failing console
            let _ = writeln!(sink, "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

impl<W> Default for ConsoleLogger<W> {
    fn default() -> Self {
        Self::new()
    }
}
