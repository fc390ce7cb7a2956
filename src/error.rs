use crate::issue::IssueId;

/// Errors raised by report and issue operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("no issue with id {id} found")]
    NotFound { id: IssueId },

    #[error("index {index} is out of range for a report of {size} issues")]
    IndexOutOfRange { index: isize, size: usize },

    #[error("unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("unknown severity '{value}' (expected HIGH, NORMAL or LOW)")]
    UnknownSeverity { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_id() {
        let id = IssueId::generate();
        let err = ReportError::NotFound { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn out_of_range_carries_index() {
        let err = ReportError::IndexOutOfRange { index: -1, size: 3 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn unknown_property_carries_name() {
        let err = ReportError::UnknownProperty {
            name: "bogus".into(),
        };
        assert!(err.to_string().contains("bogus"));
    }
}
