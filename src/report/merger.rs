use std::sync::Arc;

use tracing::debug;

use crate::report::{Provenance, Report};

impl Report {
    /// Merge `other` into this report.
    ///
    /// Issues go through the usual duplicate check, and the duplicates
    /// already counted by `other` carry over. Both logs are appended.
    /// Origin and reference are adopted from the first merged report that
    /// has them set, and only while this report has not set them itself.
    pub fn add_report(&mut self, other: &Report) -> &mut Self {
        let before = self.len();
        self.add_all(other.issues.iter().map(Arc::clone));

        adopt(&mut self.origin, &other.origin, "origin");
        adopt(&mut self.reference, &other.reference, "reference");

        self.info_messages.extend(other.info_messages.iter().cloned());
        self.error_messages.extend(other.error_messages.iter().cloned());
        self.duplicates += other.duplicates;

        debug!(
            "Merged report from {}: {} new issues, {} total",
            other.origin(),
            self.len() - before,
            self.len()
        );
        self
    }

    /// Merge several reports, in order.
    pub fn add_reports<'a, I>(&mut self, reports: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Report>,
    {
        for report in reports {
            self.add_report(report);
        }
        self
    }

    /// A new report built by merging `reports` into an empty one.
    pub fn from_reports<'a, I>(reports: I) -> Report
    where
        I: IntoIterator<Item = &'a Report>,
    {
        let mut merged = Report::new();
        merged.add_reports(reports);
        merged
    }
}

fn adopt(target: &mut Provenance, source: &Provenance, field: &str) {
    if !target.explicit && source.explicit {
        debug!("Adopting {} '{}'", field, source.value);
        *target = source.clone();
    }
}

#[cfg(test)]
mod tests {
    use crate::issue::{IssueBuilder, Severity};
    use crate::report::{Report, DEFAULT_ID};

    fn report_with(origin: Option<&str>, messages: &[&str]) -> Report {
        let mut report = Report::new();
        if let Some(origin) = origin {
            report.set_origin(origin).unwrap();
            report.set_reference(origin).unwrap();
        }
        for message in messages {
            report.add(IssueBuilder::new().message(*message).build());
        }
        report
    }

    #[test]
    fn first_explicit_origin_wins() {
        let x = report_with(Some("X"), &["a"]);
        let y = report_with(Some("Y"), &["b"]);

        let mut merged = Report::new();
        merged.add_reports([&x, &y]);
        assert_eq!(merged.origin(), "X");
        assert_eq!(merged.reference(), "X");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn unset_sources_do_not_claim_provenance() {
        let unset = report_with(None, &["a"]);
        let y = report_with(Some("Y"), &["b"]);

        let mut merged = Report::new();
        merged.add_report(&unset);
        assert_eq!(merged.origin(), DEFAULT_ID);
        assert!(!merged.has_origin());

        merged.add_report(&y);
        assert_eq!(merged.origin(), "Y");
    }

    #[test]
    fn explicit_receiver_keeps_its_origin() {
        let mut receiver = report_with(Some("mine"), &[]);
        receiver.add_report(&report_with(Some("theirs"), &["a"]));
        assert_eq!(receiver.origin(), "mine");
    }

    #[test]
    fn merging_counts_overlap_as_duplicates() {
        let source = report_with(None, &["a", "b"]);
        let mut merged = Report::from_reports([&source]);
        assert_eq!(merged.duplicates_size(), 0);

        merged.add_report(&source);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.duplicates_size(), 2);
    }

    #[test]
    fn carries_over_duplicates_of_the_source() {
        let mut source = report_with(None, &["a", "b"]);
        let again = source.get(0).unwrap().clone();
        source.add(again);
        assert_eq!(source.duplicates_size(), 1);

        let mut merged = Report::from_reports([&source]);
        assert_eq!(merged.duplicates_size(), 1);
        assert_eq!(merged, source);

        merged.add_report(&source);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.duplicates_size(), 4);
    }

    #[test]
    fn appends_logs_in_merge_order() {
        let mut first = report_with(None, &[]);
        first.log_info("1 info").log_error("1 error");
        let mut second = report_with(None, &[]);
        second.log_info("2 info").log_error("2 error");

        let merged = Report::from_reports([&first, &second]);
        assert_eq!(merged.info_messages(), ["1 info", "2 info"]);
        assert_eq!(merged.error_messages(), ["1 error", "2 error"]);
    }

    #[test]
    fn shares_issue_values() {
        let mut source = Report::new();
        source.add(IssueBuilder::new().severity(Severity::High).build());
        let merged = Report::from_reports([&source]);

        let original = source.get(0).unwrap();
        let shared = merged.get(0).unwrap();
        assert!(std::ptr::eq(original, shared));
    }
}
