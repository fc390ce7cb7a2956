pub mod iter;
pub mod json;
pub mod merger;
pub mod terminal;
pub mod views;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::ReportError;
use crate::issue::{Issue, IssueId, Priorities, Severity};

pub use iter::Issues;

/// Provenance value used until `origin` or `reference` is set.
pub const DEFAULT_ID: &str = "-";

/// A provenance string plus whether it was ever set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Provenance {
    pub(crate) value: String,
    pub(crate) explicit: bool,
}

impl Default for Provenance {
    fn default() -> Self {
        Provenance {
            value: DEFAULT_ID.to_string(),
            explicit: false,
        }
    }
}

impl Provenance {
    fn set(&mut self, field: &'static str, value: String) -> Result<(), ReportError> {
        if value.is_empty() {
            return Err(ReportError::InvalidArgument {
                field,
                reason: "value must not be empty".to_string(),
            });
        }
        self.value = value;
        self.explicit = true;
        Ok(())
    }
}

/// Ordered, deduplicating collection of issues.
///
/// Issues keep the order of their first successful `add`. Adding an issue
/// that is value-equal to one already present only bumps the duplicate
/// counter. Lookups and removals go through the issue id.
///
/// Issues are stored behind `Arc`, so copies, filters and groups share the
/// same immutable values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "json::ReportDocument", into = "json::ReportDocument")]
pub struct Report {
    issues: Vec<Arc<Issue>>,
    by_id: HashMap<IssueId, Arc<Issue>>,
    contents: HashSet<Arc<Issue>>,
    duplicates: usize,
    origin: Provenance,
    reference: Provenance,
    info_messages: Vec<String>,
    error_messages: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `issue` unless an equal issue is already present, in which
    /// case only the duplicate counter grows.
    pub fn add(&mut self, issue: impl Into<Arc<Issue>>) -> &mut Self {
        let mut issue = issue.into();
        if self.contents.contains(&issue) {
            self.duplicates += 1;
            debug!(
                "Skipping duplicate issue {} ({} duplicates so far)",
                issue.fingerprint(),
                self.duplicates
            );
            return self;
        }

        if self.by_id.contains_key(&issue.id()) {
            warn!("Issue id {} is already taken, assigning a new one", issue.id());
            issue = Arc::new(issue.with_fresh_id());
        }

        trace!("Indexing issue {}", issue.id());
        self.by_id.insert(issue.id(), Arc::clone(&issue));
        self.contents.insert(Arc::clone(&issue));
        self.issues.push(issue);
        self
    }

    /// Add every issue in order, as repeated calls to [`Report::add`].
    pub fn add_all<I>(&mut self, issues: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<Issue>>,
    {
        for issue in issues {
            self.add(issue);
        }
        self
    }

    /// Remove the issue with the given id. The duplicate counter is kept.
    ///
    /// The id lookup is constant time; closing the gap in the ordered
    /// sequence is linear in the number of issues.
    pub fn remove(&mut self, id: IssueId) -> Result<Arc<Issue>, ReportError> {
        let issue = self
            .by_id
            .remove(&id)
            .ok_or(ReportError::NotFound { id })?;
        self.contents.remove(&issue);
        if let Some(position) = self.issues.iter().position(|i| i.id() == id) {
            self.issues.remove(position);
        }
        Ok(issue)
    }

    pub fn find_by_id(&self, id: IssueId) -> Result<&Issue, ReportError> {
        self.by_id
            .get(&id)
            .map(|issue| issue.as_ref())
            .ok_or(ReportError::NotFound { id })
    }

    /// All issues matching `predicate`.
    pub fn find_by_property<P>(&self, predicate: P) -> HashSet<&Issue>
    where
        P: Fn(&Issue) -> bool,
    {
        self.iter().filter(|issue| predicate(issue)).collect()
    }

    /// Issue at the 0-based `index` of the insertion order.
    pub fn get(&self, index: isize) -> Result<&Issue, ReportError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.issues.get(i))
            .map(|issue| issue.as_ref())
            .ok_or(ReportError::IndexOutOfRange {
                index,
                size: self.issues.len(),
            })
    }

    /// Read-only view over the issues in insertion order.
    pub fn iter(&self) -> Issues<'_> {
        Issues::new(&self.issues)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Number of add attempts rejected because an equal issue was present.
    pub fn duplicates_size(&self) -> usize {
        self.duplicates
    }

    pub fn priorities(&self) -> Priorities {
        Priorities::from_severities(self.iter().map(Issue::severity))
    }

    pub fn has_issues_at_or_above(&self, threshold: Severity) -> bool {
        self.iter().any(|issue| issue.severity() >= threshold)
    }

    pub fn origin(&self) -> &str {
        &self.origin.value
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) -> Result<&mut Self, ReportError> {
        self.origin.set("origin", origin.into())?;
        Ok(self)
    }

    /// Whether the origin was set explicitly rather than left at [`DEFAULT_ID`].
    pub fn has_origin(&self) -> bool {
        self.origin.explicit
    }

    pub fn reference(&self) -> &str {
        &self.reference.value
    }

    pub fn set_reference(
        &mut self,
        reference: impl Into<String>,
    ) -> Result<&mut Self, ReportError> {
        self.reference.set("reference", reference.into())?;
        Ok(self)
    }

    pub fn has_reference(&self) -> bool {
        self.reference.explicit
    }

    /// Append an informational message, e.g.
    /// `report.log_info(format_args!("{} files parsed", 3))`.
    pub fn log_info(&mut self, message: impl std::fmt::Display) -> &mut Self {
        self.info_messages.push(message.to_string());
        self
    }

    pub fn log_error(&mut self, message: impl std::fmt::Display) -> &mut Self {
        self.error_messages.push(message.to_string());
        self
    }

    pub fn info_messages(&self) -> &[String] {
        &self.info_messages
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }
}

impl PartialEq for Report {
    fn eq(&self, other: &Self) -> bool {
        self.origin.value == other.origin.value
            && self.reference.value == other.reference.value
            && self.duplicates == other.duplicates
            && self.info_messages == other.info_messages
            && self.error_messages == other.error_messages
            && self.iter().eq(other.iter())
    }
}

impl Eq for Report {}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} issues (origin: {}, reference: {}, duplicates: {})",
            self.len(),
            self.origin(),
            self.reference(),
            self.duplicates
        )
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Issue;
    type IntoIter = Issues<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Issue> for Report {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}

impl FromIterator<Issue> for Report {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        let mut report = Report::new();
        report.add_all(iter);
        report
    }
}
