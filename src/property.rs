//! Closed vocabulary of issue properties used for grouping, filtering and
//! counting. Each property resolves to a plain accessor function, so the
//! typed and the name-based paths share one extraction.

use std::str::FromStr;

use crate::error::ReportError;
use crate::issue::Issue;

/// Extracts the string value of one property from an issue.
pub type Accessor = fn(&Issue) -> &str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    FileName,
    PackageName,
    ModuleName,
    Category,
    Type,
    Origin,
    Message,
    Severity,
}

/// Name lookup table. These are the only names `from_name` accepts.
const PROPERTIES: [(&str, Property); 8] = [
    ("fileName", Property::FileName),
    ("packageName", Property::PackageName),
    ("moduleName", Property::ModuleName),
    ("category", Property::Category),
    ("type", Property::Type),
    ("origin", Property::Origin),
    ("message", Property::Message),
    ("severity", Property::Severity),
];

impl Property {
    pub const ALL: [Property; 8] = [
        Property::FileName,
        Property::PackageName,
        Property::ModuleName,
        Property::Category,
        Property::Type,
        Property::Origin,
        Property::Message,
        Property::Severity,
    ];

    /// Resolve a property by its name, e.g. `"fileName"`.
    pub fn from_name(name: &str) -> Result<Property, ReportError> {
        PROPERTIES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, property)| *property)
            .ok_or_else(|| ReportError::UnknownProperty {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        PROPERTIES
            .iter()
            .find(|(_, property)| property == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn accessor(&self) -> Accessor {
        match self {
            Property::FileName => Issue::file_name,
            Property::PackageName => Issue::package_name,
            Property::ModuleName => Issue::module_name,
            Property::Category => Issue::category,
            Property::Type => Issue::issue_type,
            Property::Origin => Issue::origin,
            Property::Message => Issue::message,
            Property::Severity => Issue::severity_name,
        }
    }

    pub fn value<'a>(&self, issue: &'a Issue) -> &'a str {
        (self.accessor())(issue)
    }
}

impl FromStr for Property {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::from_name(s)
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
