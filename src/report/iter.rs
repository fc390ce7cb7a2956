use std::iter::FusedIterator;
use std::sync::Arc;

use crate::issue::Issue;

/// Read-only iterator over the issues of a [`Report`](super::Report), in
/// insertion order.
///
/// The view only hands out shared references, so a report cannot be
/// changed while it is being walked:
///
/// ```compile_fail
/// use tally::{IssueBuilder, Report};
///
/// let mut report = Report::new();
/// report.add(IssueBuilder::new().message("a").build());
/// for issue in report.iter() {
///     report.remove(issue.id()).unwrap();
/// }
/// ```
///
/// Clone the view to walk the remaining issues twice, or call
/// `Report::iter` again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Issues<'a> {
    inner: std::slice::Iter<'a, Arc<Issue>>,
}

impl<'a> Issues<'a> {
    pub(crate) fn new(issues: &'a [Arc<Issue>]) -> Self {
        Issues {
            inner: issues.iter(),
        }
    }
}

impl<'a> Iterator for Issues<'a> {
    type Item = &'a Issue;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|issue| issue.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Issues<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|issue| issue.as_ref())
    }
}

impl ExactSizeIterator for Issues<'_> {}

impl FusedIterator for Issues<'_> {}

#[cfg(test)]
mod tests {
    use crate::issue::{IssueBuilder, Severity};
    use crate::report::Report;

    #[test]
    fn walks_in_insertion_order_from_both_ends() {
        let mut report = Report::new();
        for message in ["a", "b", "c"] {
            report.add(IssueBuilder::new().message(message).build());
        }

        let forward: Vec<_> = report.iter().map(|i| i.message()).collect();
        assert_eq!(forward, ["a", "b", "c"]);

        let backward: Vec<_> = report.iter().rev().map(|i| i.message()).collect();
        assert_eq!(backward, ["c", "b", "a"]);
        assert_eq!(report.iter().len(), 3);
    }

    #[test]
    fn can_be_walked_again() {
        let mut report = Report::new();
        report.add(IssueBuilder::new().severity(Severity::High).build());

        let view = report.iter();
        assert_eq!(view.clone().count(), 1);
        assert_eq!(view.count(), 1);
        assert_eq!((&report).into_iter().count(), 1);
    }
}
