//! Deduplicating, ordered aggregate of static analysis issues.
//!
//! Producers build [`Issue`] values with an [`IssueBuilder`] and add them to
//! a [`Report`]. The report keeps insertion order, rejects value-equal
//! duplicates, and answers lookups by id, by index, by predicate, and by
//! [`Property`].
//!
//! ```
//! use tally::{IssueBuilder, Report, Severity};
//!
//! let mut builder = IssueBuilder::new();
//! builder.file_name("src/lib.rs").severity(Severity::High);
//!
//! let mut report = Report::new();
//! report.add(builder.message("unused import").build());
//! report.add(builder.message("unused import").build());
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.duplicates_size(), 1);
//! assert_eq!(report.files(), ["src/lib.rs"]);
//! ```

pub mod config;
pub mod error;
pub mod issue;
pub mod property;
pub mod report;

pub use error::ReportError;
pub use issue::{Issue, IssueBuilder, IssueId, Priorities, Severity};
pub use property::{Accessor, Property};
pub use report::{Issues, Report, DEFAULT_ID};
