//! Task journal contracts and file/in-memory implementations.

use chrono::NaiveDate;
use log::error;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Date format used for `Date Assigned`, e.g. `05 March 2026`.
pub const ASSIGNED_DATE_FORMAT: &str = "%d %B %Y";

pub type JournalResult<T> = Result<T, JournalError>;

/// Journal write failure.
#[derive(Debug)]
pub enum JournalError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task journal write failed: {err}"),
            Self::Encode(err) => write!(f, "task journal record encoding failed: {err}"),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for JournalError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Raw task-creation attempt as entered by the caller.
///
/// Fields are stored verbatim; the task type is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Task Title")]
    pub task_title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Date Assigned")]
    pub date_assigned: String,
    #[serde(rename = "Due Date")]
    pub due_date: String,
    #[serde(rename = "Complete")]
    pub complete: bool,
}

/// Renders a calendar date the way journal records store it.
pub fn format_assigned_date(date: NaiveDate) -> String {
    date.format(ASSIGNED_DATE_FORMAT).to_string()
}

/// Current local calendar date.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Append-only sink for task records.
pub trait TaskJournal {
    fn append(&self, record: &TaskRecord) -> JournalResult<()>;
}

/// File-backed journal; one record per line, each preceded by a newline.
#[derive(Debug, Clone)]
pub struct FileTaskJournal {
    path: PathBuf,
}

impl FileTaskJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskJournal for FileTaskJournal {
    fn append(&self, record: &TaskRecord) -> JournalResult<()> {
        let line = serde_json::to_string(record)?;
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| write!(file, "\n{line}"));

        if let Err(err) = result {
            error!(
                "event=journal_append module=journal status=error path={} error={}",
                self.path.display(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }
}

/// In-process journal that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryTaskJournal {
    records: RefCell<Vec<TaskRecord>>,
}

impl MemoryTaskJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of appended records in write order.
    pub fn records(&self) -> Vec<TaskRecord> {
        self.records.borrow().clone()
    }
}

impl TaskJournal for MemoryTaskJournal {
    fn append(&self, record: &TaskRecord) -> JournalResult<()> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }
}

impl<J: TaskJournal + ?Sized> TaskJournal for &J {
    fn append(&self, record: &TaskRecord) -> JournalResult<()> {
        (**self).append(record)
    }
}
