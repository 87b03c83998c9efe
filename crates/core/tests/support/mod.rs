//! Shared test helpers for `ghostpress-core` integration tests.
//!
//! Scripted publishers and a recording observer so the orchestrator tests
//! can focus on ordering and isolation instead of HTTP.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ghostpress_core::{ConfirmPublish, PostPublisher, PublishObserver};
use ghostpress_domain::{
    BatchSummary, Document, FolderEntry, PostStatus, PublishConfig, PublishErrorKind,
    PublishProgress, PublishResult, UnreadableNote,
};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub fn config() -> PublishConfig {
    PublishConfig::new("https://blog.example.com", "id:abcd")
}

pub fn documents(names: &[&str]) -> Vec<Document> {
    names.iter().map(|name| Document::new(*name, format!("# {name}"))).collect()
}

pub fn entries(names: &[&str]) -> Vec<FolderEntry> {
    documents(names).into_iter().map(FolderEntry::from).collect()
}

pub fn unreadable(name: &str) -> FolderEntry {
    FolderEntry::Unreadable(UnreadableNote {
        identifier: name.to_string(),
        reason: "stream did not contain valid UTF-8".to_string(),
    })
}

/// Publisher that fails for configured identifiers and panics for others.
#[derive(Default)]
pub struct ScriptedPublisher {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, identifier: &str) -> Self {
        self.failing.insert(identifier.to_string());
        self
    }

    pub fn panicking(mut self, identifier: &str) -> Self {
        self.panicking.insert(identifier.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostPublisher for ScriptedPublisher {
    async fn publish_one(&self, document: &Document, _config: &PublishConfig) -> PublishResult {
        self.calls.lock().unwrap().push(document.identifier.clone());

        if self.panicking.contains(&document.identifier) {
            panic!("scripted panic for {}", document.identifier);
        }
        if self.failing.contains(&document.identifier) {
            return PublishResult::failed(
                &document.identifier,
                PublishErrorKind::RemoteRejected,
                "Validation error",
            );
        }
        PublishResult::succeeded(
            &document.identifier,
            Some(document.identifier.clone()),
            Some(PostStatus::Draft),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(usize),
    Progress(PublishProgress),
    Summary(BatchSummary),
}

/// Observer that records every event in order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<PublishProgress> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Progress(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl PublishObserver for RecordingObserver {
    fn on_batch_started(&self, total: usize) {
        self.events.lock().unwrap().push(Event::Started(total));
    }

    fn on_progress(&self, progress: &PublishProgress) {
        self.events.lock().unwrap().push(Event::Progress(progress.clone()));
    }

    fn on_summary(&self, summary: &BatchSummary) {
        self.events.lock().unwrap().push(Event::Summary(summary.clone()));
    }
}

/// Confirmation with a fixed answer that counts how often it was asked.
pub struct FixedConfirm {
    answer: bool,
    asked: Mutex<usize>,
}

impl FixedConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer, asked: Mutex::new(0) }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl ConfirmPublish for FixedConfirm {
    fn confirm(&self, _entries: &[FolderEntry]) -> bool {
        *self.asked.lock().unwrap() += 1;
        self.answer
    }
}

/// In-memory log sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Subscriber writing `directives` (an `EnvFilter` string) into this buffer.
    pub fn subscriber(&self, directives: &str) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(self.clone())
            .with_ansi(false)
            .finish()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Observer that notes how much had been logged when the summary arrived.
pub struct SummaryMark {
    log: LogBuffer,
    mark: Mutex<Option<usize>>,
}

impl SummaryMark {
    pub fn new(log: LogBuffer) -> Arc<Self> {
        Arc::new(Self { log, mark: Mutex::new(None) })
    }

    pub fn mark(&self) -> Option<usize> {
        *self.mark.lock().unwrap()
    }
}

impl PublishObserver for SummaryMark {
    fn on_summary(&self, _summary: &BatchSummary) {
        *self.mark.lock().unwrap() = Some(self.log.contents().len());
    }
}
