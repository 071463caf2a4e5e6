//! Following a log file like `tail -n N -f`.
//!
//! A debounced watcher on the file's directory reports writes, truncation,
//! rotation and creation; the file is only read after it reports something.
//! Only complete lines are emitted; a trailing fragment is held back until
//! its newline arrives.

use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer, DebounceEventResult, Debouncer, RecommendedCache};
use tailtrace_core::prelude::*;

use crate::message::Message;

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Bytes read per step when scanning backwards for the last lines
const TAIL_CHUNK: usize = 8 * 1024;

/// Debounced change events for the directory holding the log file.
struct ChangeWatch {
    _debouncer: Debouncer<RecommendedWatcher, RecommendedCache>,
    events: Receiver<DebounceEventResult>,
}

impl ChangeWatch {
    /// Watch the parent directory so a file that does not exist yet, or is
    /// replaced by rotation, is still reported.
    fn start(path: &Path, debounce: Duration) -> notify::Result<Self> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let (tx, events) = mpsc::channel();
        let mut debouncer = new_debouncer(debounce, None, tx)?;
        debouncer.watch(dir, RecursiveMode::NonRecursive)?;
        info!("Watching: {}", dir.display());

        Ok(Self {
            _debouncer: debouncer,
            events,
        })
    }
}

impl fmt::Debug for ChangeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeWatch").finish_non_exhaustive()
    }
}

/// Incremental reader for one log file.
#[derive(Debug)]
pub struct Tailer {
    path: PathBuf,
    /// Bytes consumed so far, including any held-back fragment
    offset: u64,
    /// Unterminated tail of the last read
    partial: Vec<u8>,
    /// None when the watcher could not be started; every poll then reads
    watch: Option<ChangeWatch>,
    /// Read on the next poll even without a change event
    stale: bool,
}

impl Tailer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_debounce(path, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    /// Create a tailer whose watcher batches events over `debounce`.
    pub fn with_debounce(path: impl Into<PathBuf>, debounce: Duration) -> Self {
        let path = path.into();
        let watch = match ChangeWatch::start(&path, debounce) {
            Ok(watch) => Some(watch),
            Err(e) => {
                warn!(
                    "Failed to watch {}: {}; checking it on every poll instead",
                    path.display(),
                    e
                );
                None
            }
        };

        Self {
            path,
            offset: 0,
            partial: Vec::new(),
            watch,
            stale: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether changes are reported by a file watcher
    pub fn is_watching(&self) -> bool {
        self.watch.is_some()
    }

    /// Return the last `count` complete lines of the file.
    ///
    /// Reads backwards from the end until enough lines are found, so the
    /// cost depends on `count`, not on the file size. Afterwards only data
    /// appended past the current end is reported. A missing file yields no
    /// lines and is followed once it appears.
    pub fn backfill(&mut self, count: usize) -> Result<Vec<String>> {
        self.rewind();
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, waiting for it", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let len = file.metadata()?.len();
        let bytes = read_tail(&mut file, len, count)?;
        self.offset = len;

        let lines = self.split_lines(bytes);
        let skip = lines.len().saturating_sub(count);
        Ok(lines.into_iter().skip(skip).collect())
    }

    /// Check the file for changes.
    ///
    /// Returns the messages to feed into `update`: a `SourceReset` when the
    /// file shrank below the read position, then `LinesAppended` for any
    /// complete lines. Returns nothing until the watcher reports a change.
    pub fn poll(&mut self) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        if !self.take_change() {
            return Ok(messages);
        }

        let len = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(messages),
            Err(e) => return Err(e.into()),
        };

        if len < self.offset {
            info!(
                "{} shrank from {} to {} bytes, following from the start",
                self.path.display(),
                self.offset,
                len
            );
            self.rewind();
            messages.push(Message::SourceReset);
        }

        if len == self.offset {
            return Ok(messages);
        }

        if let Some(bytes) = self.read_new()? {
            let lines = self.split_lines(bytes);
            if !lines.is_empty() {
                messages.push(Message::LinesAppended(lines));
            }
        }

        Ok(messages)
    }

    /// Forget the read position; the next poll starts at byte zero.
    pub fn rewind(&mut self) {
        self.offset = 0;
        self.partial.clear();
        self.stale = true;
    }

    /// Drain queued watcher events. True if the file needs reading.
    fn take_change(&mut self) -> bool {
        let mut changed = std::mem::take(&mut self.stale);
        let Some(watch) = &self.watch else {
            return true;
        };
        let name: Option<&OsStr> = self.path.file_name();

        loop {
            match watch.events.try_recv() {
                Ok(Ok(events)) => {
                    changed |= events
                        .iter()
                        .any(|event| event.paths.iter().any(|p| p.file_name() == name));
                }
                Ok(Err(errors)) => {
                    for error in errors {
                        warn!("File watcher error: {:?}", error);
                    }
                    changed = true;
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    warn!(
                        "Watcher for {} stopped; checking it on every poll instead",
                        self.path.display()
                    );
                    self.watch = None;
                    return true;
                }
            }
        }
    }

    /// Bytes from the current offset to the end, or None if the file is gone.
    fn read_new(&mut self) -> Result<Option<Vec<u8>>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        file.seek(SeekFrom::Start(self.offset))?;
        let mut bytes = Vec::new();
        let read = file.read_to_end(&mut bytes)?;
        self.offset += read as u64;
        Ok(Some(bytes))
    }

    /// Join with the held-back fragment, split on `\n`, keep the new fragment.
    fn split_lines(&mut self, bytes: Vec<u8>) -> Vec<String> {
        let mut data = std::mem::take(&mut self.partial);
        data.extend(bytes);

        let complete = match data.iter().rposition(|&b| b == b'\n') {
            Some(pos) => {
                self.partial = data.split_off(pos + 1);
                data.truncate(pos);
                data
            }
            None => {
                self.partial = data;
                return Vec::new();
            }
        };

        String::from_utf8_lossy(&complete)
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }
}

/// Read backwards from `len` in [`TAIL_CHUNK`] steps until the bytes hold
/// `count` complete lines plus the newline that ends the line before them.
///
/// The result starts at a line boundary and runs to `len`, trailing
/// fragment included.
fn read_tail<R: Read + Seek>(reader: &mut R, len: u64, count: usize) -> Result<Vec<u8>> {
    let mut start = len;
    let mut bytes: Vec<u8> = Vec::new();
    let mut newlines = 0;

    while start > 0 && newlines <= count {
        let step = TAIL_CHUNK.min(start as usize);
        start -= step as u64;

        let mut chunk = vec![0; step];
        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(&mut chunk)?;

        newlines += chunk.iter().filter(|&&b| b == b'\n').count();
        chunk.extend_from_slice(&bytes);
        bytes = chunk;
    }

    if start > 0 {
        // Drop the cut-off line in front of the first boundary
        if let Some(pos) = bytes.iter().position(|&b| b == b'\n') {
            bytes.drain(..=pos);
        }
    }
    Ok(bytes)
}
