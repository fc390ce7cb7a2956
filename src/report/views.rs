//! Derived views of a report: filtered and grouped reports, property
//! value sets and counts, and copies.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::ReportError;
use crate::issue::Issue;
use crate::property::Property;
use crate::report::Report;

impl Report {
    /// New report holding the issues that match `predicate`, in their
    /// current order. Provenance, logs and the duplicate counter are carried
    /// over from this report.
    pub fn filter<P>(&self, predicate: P) -> Report
    where
        P: Fn(&Issue) -> bool,
    {
        let mut filtered = self.copy_empty_instance();
        filtered.add_all(
            self.issues
                .iter()
                .filter(|issue| predicate(issue))
                .map(Arc::clone),
        );
        debug!("Filter kept {} of {} issues", filtered.len(), self.len());
        filtered
    }

    /// Distinct values of a property, in order of first appearance.
    pub fn properties<F>(&self, accessor: F) -> Vec<String>
    where
        F: Fn(&Issue) -> &str,
    {
        let mut seen = HashSet::new();
        self.iter()
            .map(|issue| accessor(issue))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    /// Number of issues per distinct property value.
    pub fn property_count<F>(&self, accessor: F) -> HashMap<String, usize>
    where
        F: Fn(&Issue) -> &str,
    {
        let mut counts = HashMap::new();
        for issue in self.iter() {
            *counts.entry(accessor(issue).to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn files(&self) -> Vec<String> {
        self.properties(Issue::file_name)
    }

    pub fn packages(&self) -> Vec<String> {
        self.properties(Issue::package_name)
    }

    pub fn modules(&self) -> Vec<String> {
        self.properties(Issue::module_name)
    }

    pub fn categories(&self) -> Vec<String> {
        self.properties(Issue::category)
    }

    pub fn types(&self) -> Vec<String> {
        self.properties(Issue::issue_type)
    }

    /// Names of the tools that reported the issues.
    pub fn tools(&self) -> Vec<String> {
        self.properties(Issue::origin)
    }

    /// Partition the issues by the property named `property_name`
    /// (for example `"fileName"` or `"severity"`).
    pub fn group_by_property(
        &self,
        property_name: &str,
    ) -> Result<BTreeMap<String, Report>, ReportError> {
        let property = Property::from_name(property_name)?;
        Ok(self.group_by(property))
    }

    /// Partition the issues by `property`. Each group keeps the relative
    /// order of its issues and inherits origin and reference, but starts
    /// with empty logs and no duplicates.
    pub fn group_by(&self, property: Property) -> BTreeMap<String, Report> {
        let mut groups: BTreeMap<String, Report> = BTreeMap::new();
        for issue in &self.issues {
            groups
                .entry(property.value(issue).to_string())
                .or_insert_with(|| self.with_provenance_only())
                .add(Arc::clone(issue));
        }
        debug!("Grouped {} issues into {} groups by {}", self.len(), groups.len(), property);
        groups
    }

    /// Independent copy. Issues are shared, containers are not.
    pub fn copy(&self) -> Report {
        self.clone()
    }

    /// Copy without issues. Provenance, logs and the duplicate counter are
    /// kept.
    pub fn copy_empty_instance(&self) -> Report {
        Report {
            origin: self.origin.clone(),
            reference: self.reference.clone(),
            info_messages: self.info_messages.clone(),
            error_messages: self.error_messages.clone(),
            duplicates: self.duplicates,
            ..Report::default()
        }
    }

    fn with_provenance_only(&self) -> Report {
        Report {
            origin: self.origin.clone(),
            reference: self.reference.clone(),
            ..Report::default()
        }
    }
}
