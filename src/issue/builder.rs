use crate::issue::{Issue, IssueId, Severity};

/// Reusable builder for [`Issue`] values.
///
/// Unset text fields default to an empty string and the severity to
/// [`Severity::Normal`]. Every call to [`IssueBuilder::build`] takes a
/// snapshot with a fresh id, so the builder can be tweaked and reused.
#[derive(Debug, Clone, Default)]
pub struct IssueBuilder {
    file_name: Option<String>,
    package_name: Option<String>,
    module_name: Option<String>,
    category: Option<String>,
    issue_type: Option<String>,
    origin: Option<String>,
    message: Option<String>,
    severity: Option<Severity>,
}

impl IssueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.file_name = Some(value.into());
        self
    }

    pub fn package_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.package_name = Some(value.into());
        self
    }

    pub fn module_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.module_name = Some(value.into());
        self
    }

    pub fn category(&mut self, value: impl Into<String>) -> &mut Self {
        self.category = Some(value.into());
        self
    }

    pub fn issue_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.issue_type = Some(value.into());
        self
    }

    /// Name of the reporting tool.
    pub fn origin(&mut self, value: impl Into<String>) -> &mut Self {
        self.origin = Some(value.into());
        self
    }

    pub fn message(&mut self, value: impl Into<String>) -> &mut Self {
        self.message = Some(value.into());
        self
    }

    pub fn severity(&mut self, value: Severity) -> &mut Self {
        self.severity = Some(value);
        self
    }

    /// Forget every field set so far.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn build(&self) -> Issue {
        Issue {
            id: IssueId::generate(),
            file_name: text(&self.file_name),
            package_name: text(&self.package_name),
            module_name: text(&self.module_name),
            category: text(&self.category),
            issue_type: text(&self.issue_type),
            origin: text(&self.origin),
            message: text(&self.message),
            severity: self.severity.unwrap_or_default(),
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
