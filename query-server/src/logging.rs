//! Tracing setup: stdout always, plus a plain-text file when `LOG_FILE` is set.

use std::io::{self, Write};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,query_server=debug,agent_graph=debug";

/// Writer that strips ANSI escape sequences (e.g. `ESC [ 0 m`) so file logs are plain text.
pub struct StripAnsiWriter<W> {
    inner: W,
    /// Incomplete escape sequence: ESC or ESC [ ... (waiting for final letter).
    pending: Vec<u8>,
}

impl<W: Write> StripAnsiWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: Vec::with_capacity(16),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn is_csi_parameter(b: u8) -> bool {
        matches!(b, b'[' | b'?' | b';' | b':' | b'0'..=b'9')
    }

    fn is_csi_final(b: u8) -> bool {
        (0x40..=0x7e).contains(&b)
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}

impl<W: Write> Write for StripAnsiWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while let Some((&b, tail)) = rest.split_first() {
            match self.pending.len() {
                0 => match rest.iter().position(|&b| b == 0x1b) {
                    Some(i) => {
                        self.inner.write_all(&rest[..i])?;
                        self.pending.push(0x1b);
                        rest = &rest[i + 1..];
                        continue;
                    }
                    None => {
                        self.inner.write_all(rest)?;
                        break;
                    }
                },
                1 => {
                    self.pending.push(b);
                    if b != b'[' {
                        self.flush_pending()?;
                    }
                }
                _ => {
                    if Self::is_csi_final(b) {
                        self.pending.clear();
                    } else if Self::is_csi_parameter(b) {
                        self.pending.push(b);
                        if self.pending.len() > 64 {
                            self.flush_pending()?;
                        }
                    } else {
                        self.flush_pending()?;
                        self.inner.write_all(&[b])?;
                    }
                }
            }
            rest = tail;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.flush_pending()?;
        }
        self.inner.flush()
    }
}

/// Initializes tracing: always to stdout; if env `LOG_FILE` is set, also to that file (append).
/// File output is plain text (ANSI stripped).
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(filter.clone());

    let registry = tracing_subscriber::registry().with(stdout_layer);

    match std::env::var("LOG_FILE") {
        Ok(path) if !path.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            let plain_writer = std::sync::Mutex::new(StripAnsiWriter::new(file));
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(plain_writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_filter(filter);
            registry.with(file_layer).try_init()?;
            tracing::info!(path = %path, "logging to file");
        }
        _ => registry.try_init()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(chunks: &[&[u8]]) -> String {
        let mut w = StripAnsiWriter::new(Vec::new());
        for chunk in chunks {
            w.write_all(chunk).unwrap();
        }
        w.flush().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn strips_color_codes() {
        assert_eq!(strip(&[b"\x1b[2m2026\x1b[0m \x1b[32m INFO\x1b[0m ok"]), "2026  INFO ok");
    }

    /// **Scenario**: An escape sequence split across writes is still removed.
    #[test]
    fn strips_sequence_split_across_writes() {
        assert_eq!(strip(&[b"a\x1b", b"[3", b"1mb"]), "ab");
    }

    #[test]
    fn keeps_lone_escape_followed_by_other_byte() {
        assert_eq!(strip(&[b"x\x1bQy"]), "x\x1bQy");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip(&[b"hello ", b"world\n"]), "hello world\n");
    }
}
