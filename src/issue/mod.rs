pub mod builder;
pub mod severity;

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::property::Property;

pub use builder::IssueBuilder;
pub use severity::{Priorities, Severity};

/// Opaque identifier assigned to an issue when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(Uuid);

impl IssueId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        IssueId(Uuid::new_v4())
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IssueId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(IssueId)
    }
}

/// A single analysis finding.
///
/// Equality and hashing cover the descriptive fields and the severity.
/// The `id` is only used for identity based lookups, so two issues built
/// from the same content compare equal even though their ids differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(default = "IssueId::generate")]
    id: IssueId,

    #[serde(default)]
    file_name: String,

    #[serde(default)]
    package_name: String,

    #[serde(default)]
    module_name: String,

    #[serde(default)]
    category: String,

    #[serde(default, rename = "type")]
    issue_type: String,

    /// Name of the tool that reported the issue
    #[serde(default, alias = "toolName")]
    origin: String,

    #[serde(default)]
    message: String,

    #[serde(default, alias = "priority")]
    severity: Severity,
}

impl Issue {
    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Severity rendered the way grouping and filtering see it.
    pub fn severity_name(&self) -> &str {
        self.severity.as_str()
    }

    /// Short content digest. Equal issues share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for value in self.descriptive_fields() {
            hasher.update(value.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update(self.severity.as_str().as_bytes());
        let hex = format!("{:x}", hasher.finalize());
        hex[..12].to_string()
    }

    /// Same content under a new id.
    pub(crate) fn with_fresh_id(&self) -> Issue {
        Issue {
            id: IssueId::generate(),
            ..self.clone()
        }
    }

    fn descriptive_fields(&self) -> [&str; 7] {
        [
            &self.file_name,
            &self.package_name,
            &self.module_name,
            &self.category,
            &self.issue_type,
            &self.origin,
            &self.message,
        ]
    }

    /// Matches issues whose `property` equals `value`.
    pub fn by_property(property: Property, value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        let value = value.into();
        let accessor = property.accessor();
        move |issue| accessor(issue) == value
    }

    pub fn by_file_name(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::FileName, value)
    }

    pub fn by_package_name(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::PackageName, value)
    }

    pub fn by_module_name(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::ModuleName, value)
    }

    pub fn by_category(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::Category, value)
    }

    pub fn by_type(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::Type, value)
    }

    pub fn by_origin(value: impl Into<String>) -> impl Fn(&Issue) -> bool {
        Issue::by_property(Property::Origin, value)
    }

    pub fn by_severity(severity: Severity) -> impl Fn(&Issue) -> bool {
        move |issue| issue.severity == severity
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity && self.descriptive_fields() == other.descriptive_fields()
    }
}

impl Eq for Issue {}

impl Hash for Issue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptive_fields().hash(state);
        self.severity.hash(state);
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.file_name, self.message, self.severity)
    }
}
