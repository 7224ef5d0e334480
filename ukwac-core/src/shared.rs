//! Thread-shared sentence stream
//!
//! Checking for more input and advancing happen under one lock, so several
//! consumers can drain the same stream without seeing a stale lookahead.

use crate::document::ParsedDocument;
use crate::error::Result;
use crate::parser::TreeParser;
use crate::stream::SentenceStream;
use std::io::BufRead;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`SentenceStream`] that can be pulled from several threads
#[derive(Debug)]
pub struct SharedSentenceStream<R, P> {
    inner: Mutex<SentenceStream<R, P>>,
}

impl<R: BufRead, P: TreeParser> SharedSentenceStream<R, P> {
    /// Wrap a stream for shared use
    pub fn new(stream: SentenceStream<R, P>) -> Self {
        Self {
            inner: Mutex::new(stream),
        }
    }

    /// Whether another document was available at the time of the call
    ///
    /// Another consumer may take it before this caller pulls; use
    /// [`try_pull`](Self::try_pull) to check and advance atomically.
    pub fn has_more(&self) -> bool {
        self.lock().has_more()
    }

    /// Take the next document, or `None` once the stream is exhausted
    pub fn try_pull(&self) -> Result<Option<ParsedDocument>> {
        let mut stream = self.lock();
        if !stream.has_more() {
            return Ok(None);
        }
        stream.pull().map(Some)
    }

    /// Iterate by repeated [`try_pull`](Self::try_pull)
    pub fn iter(&self) -> impl Iterator<Item = Result<ParsedDocument>> + '_ {
        std::iter::from_fn(move || self.try_pull().transpose())
    }

    /// Unwrap the inner stream
    pub fn into_inner(self) -> SentenceStream<R, P> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, SentenceStream<R, P>> {
        // A panic mid-pull leaves the lookahead empty, which reads as exhausted.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: BufRead, P: TreeParser> From<SentenceStream<R, P>> for SharedSentenceStream<R, P> {
    fn from(stream: SentenceStream<R, P>) -> Self {
        Self::new(stream)
    }
}
