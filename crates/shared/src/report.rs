use crate::models::{IssueReport, IssueType};

/// Editable state of the "Report Issue" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub issue_type: Option<IssueType>,
    pub description: String,
}

/// Required fields that were missing when the form was submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportErrors {
    pub title: bool,
    pub issue_type: bool,
    pub description: bool,
}

impl ReportErrors {
    pub fn is_empty(&self) -> bool {
        !(self.title || self.issue_type || self.description)
    }

    pub fn title_message(&self) -> Option<&'static str> {
        self.title.then_some("Please enter a title.")
    }

    pub fn issue_type_message(&self) -> Option<&'static str> {
        self.issue_type.then_some("Please choose the type of issue.")
    }

    pub fn description_message(&self) -> Option<&'static str> {
        self.description.then_some("Please describe the issue.")
    }
}

impl std::fmt::Display for ReportErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let missing: Vec<&str> = [
            (self.title, "title"),
            (self.issue_type, "type"),
            (self.description, "description"),
        ]
        .into_iter()
        .filter_map(|(missing, field)| missing.then_some(field))
        .collect();
        write!(f, "missing required fields: {}", missing.join(", "))
    }
}

impl std::error::Error for ReportErrors {}

impl ReportDraft {
    /// Check the required fields. Whitespace-only text counts as missing.
    pub fn validate(&self) -> Result<IssueReport, ReportErrors> {
        let errors = ReportErrors {
            title: self.title.trim().is_empty(),
            issue_type: self.issue_type.is_none(),
            description: self.description.trim().is_empty(),
        };

        match self.issue_type {
            Some(issue_type) if errors.is_empty() => Ok(IssueReport {
                title: self.title.trim().to_string(),
                issue_type,
                description: self.description.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Blank every field, as a form reset does.
    pub fn clear(&mut self) {
        self.title.clear();
        self.issue_type = None;
        self.description.clear();
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.issue_type.is_none() && self.description.is_empty()
    }
}
