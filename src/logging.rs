use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

static BUFFER: Mutex<Option<Vec<u8>>> = Mutex::new(None);

fn lock_buffer() -> MutexGuard<'static, Option<Vec<u8>>> {
    BUFFER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Activate buffering. While active, log output is stored instead of being
/// written to stderr, so it cannot corrupt the dashboard.
pub fn activate() {
    *lock_buffer() = Some(Vec::new());
}

/// Deactivate buffering and return all collected log lines.
pub fn drain() -> Vec<String> {
    lock_buffer()
        .take()
        .map(|bytes| {
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Log sink that writes to stderr, or to the buffer while it is active.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferedStderr;

pub struct BufferedStderrWriter;

impl Write for BufferedStderrWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = lock_buffer();
        if let Some(buffer) = guard.as_mut() {
            buffer.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            drop(guard);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for BufferedStderr {
    type Writer = BufferedStderrWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferedStderrWriter
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "lead_rank=debug"
    } else {
        "lead_rank=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(BufferedStderr)
        .with_target(false)
        .without_time()
        .try_init();
}
