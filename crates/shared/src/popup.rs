//! Modal panel visibility.
//!
//! At most one panel is open at a time. Opening a panel closes whatever
//! else was open. A freshly opened panel is displayed immediately but only
//! gets its "show" class on a later tick (see [`PopupController::reveal`]),
//! which lets the CSS fade-in transition play.

use crate::models::IssueReport;
use crate::report::{ReportDraft, ReportErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupId {
    Search,
    Report,
    Help,
    MapKey,
}

impl PopupId {
    pub fn element_id(&self) -> &'static str {
        match self {
            PopupId::Search => "popup-search",
            PopupId::Report => "popup-report",
            PopupId::Help => "popup-help",
            PopupId::MapKey => "popup-map-key",
        }
    }
}

/// How a single panel should currently be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    /// `display: block`, transition not yet started.
    Displayed,
    /// `display: block` plus the "show" class.
    Revealed,
}

impl Visibility {
    pub fn is_displayed(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Visibility::Revealed => "show",
            _ => "",
        }
    }

    pub fn display_style(&self) -> &'static str {
        match self {
            Visibility::Hidden => "display: none;",
            _ => "display: block;",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupController {
    active: Option<PopupId>,
    revealed: bool,
    search_query: String,
    // Inline errors of the last rejected report; cleared when the panel closes.
    report_errors: Option<ReportErrors>,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<PopupId> {
        self.active
    }

    #[cfg(test)]
    pub fn is_open(&self, id: PopupId) -> bool {
        self.active == Some(id)
    }

    pub fn visibility(&self, id: PopupId) -> Visibility {
        match self.active {
            Some(active) if active == id && self.revealed => Visibility::Revealed,
            Some(active) if active == id => Visibility::Displayed,
            _ => Visibility::Hidden,
        }
    }

    /// Open `id`, closing any other panel first.
    ///
    /// Returns `true` when the caller should schedule a [`reveal`](Self::reveal)
    /// for `id`. Re-opening the panel that is already open changes nothing.
    pub fn open(&mut self, id: PopupId) -> bool {
        if self.active == Some(id) {
            return !self.revealed;
        }
        if let Some(previous) = self.active {
            tracing::debug!(?previous, "Closing popup before opening another");
        }
        self.close_all();
        self.active = Some(id);
        tracing::debug!(popup = ?id, "Opened popup");
        true
    }

    #[cfg(test)]
    pub fn open_search(&mut self) -> bool {
        self.open(PopupId::Search)
    }

    #[cfg(test)]
    pub fn open_report(&mut self) -> bool {
        self.open(PopupId::Report)
    }

    /// Apply the deferred "show" class. A tick for a panel that has since
    /// been closed or replaced is ignored.
    pub fn reveal(&mut self, id: PopupId) {
        if self.active == Some(id) {
            self.revealed = true;
        }
    }

    /// Hide every panel. Safe to call when nothing is open.
    pub fn close_all(&mut self) {
        self.active = None;
        self.revealed = false;
        self.report_errors = None;
    }

    /// The report panel's own dismiss control. Leaves any other panel alone.
    pub fn close_report_only(&mut self) {
        if self.active == Some(PopupId::Report) {
            self.close_all();
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Errors to show inline on the report form, if it is open.
    pub fn report_errors(&self) -> Option<ReportErrors> {
        match self.active {
            Some(PopupId::Report) => self.report_errors,
            _ => None,
        }
    }

    /// Validate and consume the report form.
    ///
    /// On success every panel is closed, the draft is blanked and the
    /// validated report is handed back. On failure the draft and panels are
    /// left alone and the errors are kept for [`report_errors`](Self::report_errors).
    pub fn submit_report(&mut self, draft: &mut ReportDraft) -> Result<IssueReport, ReportErrors> {
        match draft.validate() {
            Ok(report) => {
                self.close_all();
                draft.clear();
                Ok(report)
            }
            Err(errors) => {
                self.report_errors = Some(errors);
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueType;

    const ALL: [PopupId; 4] = [PopupId::Search, PopupId::Report, PopupId::Help, PopupId::MapKey];

    fn displayed_count(c: &PopupController) -> usize {
        ALL.iter().filter(|id| c.visibility(**id).is_displayed()).count()
    }

    #[test]
    fn test_initial_state_closed() {
        let c = PopupController::new();
        assert_eq!(c.active(), None);
        assert_eq!(c.search_query(), "");
        assert_eq!(displayed_count(&c), 0);
    }

    #[test]
    fn test_open_search_displays_then_reveals() {
        let mut c = PopupController::new();
        assert!(c.open_search());
        assert_eq!(c.visibility(PopupId::Search), Visibility::Displayed);
        c.reveal(PopupId::Search);
        assert_eq!(c.visibility(PopupId::Search), Visibility::Revealed);
        assert_eq!(c.visibility(PopupId::Search).css_class(), "show");
    }

    #[test]
    fn test_open_report_closes_search() {
        let mut c = PopupController::new();
        c.open_search();
        c.reveal(PopupId::Search);
        c.open_report();
        assert_eq!(c.active(), Some(PopupId::Report));
        assert_eq!(c.visibility(PopupId::Search), Visibility::Hidden);
        assert_eq!(c.visibility(PopupId::Report), Visibility::Displayed);
    }

    #[test]
    fn test_open_twice_is_idempotent() {
        let mut c = PopupController::new();
        c.open_report();
        c.reveal(PopupId::Report);
        assert!(!c.open_report());
        assert_eq!(c.visibility(PopupId::Report), Visibility::Revealed);
        assert_eq!(displayed_count(&c), 1);
    }

    #[test]
    fn test_exclusive_over_sequence() {
        let mut c = PopupController::new();
        let sequence = [
            Some(PopupId::Search),
            Some(PopupId::Report),
            Some(PopupId::Report),
            None,
            Some(PopupId::Search),
            Some(PopupId::MapKey),
            None,
            None,
            Some(PopupId::Search),
        ];
        for step in sequence {
            match step {
                Some(id) => {
                    c.open(id);
                    assert!(c.is_open(id));
                }
                None => c.close_all(),
            }
            assert!(displayed_count(&c) <= 1);
        }
        assert_eq!(c.active(), Some(PopupId::Search));
    }

    #[test]
    fn test_redundant_close_is_noop() {
        let mut c = PopupController::new();
        c.close_all();
        c.close_all();
        c.close_report_only();
        assert_eq!(c, PopupController::new());
    }

    #[test]
    fn test_close_report_only_leaves_search_open() {
        let mut c = PopupController::new();
        c.open_search();
        c.close_report_only();
        assert_eq!(c.active(), Some(PopupId::Search));
        c.open_report();
        c.close_report_only();
        assert_eq!(c.active(), None);
    }

    #[test]
    fn test_stale_reveal_ignored() {
        let mut c = PopupController::new();
        c.open_search();
        c.close_all();
        c.reveal(PopupId::Search);
        assert_eq!(c.visibility(PopupId::Search), Visibility::Hidden);

        c.open_search();
        c.open_report();
        c.reveal(PopupId::Search);
        assert_eq!(c.visibility(PopupId::Report), Visibility::Displayed);
    }

    #[test]
    fn test_reopen_after_close_needs_new_reveal() {
        let mut c = PopupController::new();
        c.open_search();
        c.reveal(PopupId::Search);
        c.close_all();
        assert!(c.open_search());
        assert_eq!(c.visibility(PopupId::Search), Visibility::Displayed);
    }

    #[test]
    fn test_search_query_survives_close() {
        let mut c = PopupController::new();
        c.open_search();
        c.set_search_query("war");
        c.close_all();
        c.open_search();
        assert_eq!(c.search_query(), "war");
    }

    #[test]
    fn test_submit_report_resets_and_closes() {
        let mut c = PopupController::new();
        c.open_report();
        let mut draft = ReportDraft {
            title: "Wrong pin".into(),
            issue_type: Some(IssueType::Location),
            description: "Sage Lab is one block east.".into(),
        };
        let report = c.submit_report(&mut draft).unwrap();
        assert_eq!(report.issue_type, IssueType::Location);
        assert_eq!(c.active(), None);
        assert_eq!(draft.title, "");
        assert_eq!(draft.issue_type, None);
        assert_eq!(draft.description, "");
    }

    #[test]
    fn test_invalid_submit_keeps_state() {
        let mut c = PopupController::new();
        c.open_report();
        let mut draft = ReportDraft {
            title: "Half done".into(),
            issue_type: Some(IssueType::Other),
            description: String::new(),
        };
        let errors = c.submit_report(&mut draft).unwrap_err();
        assert!(errors.description);
        assert_eq!(c.active(), Some(PopupId::Report));
        assert_eq!(c.report_errors(), Some(errors));
        assert_eq!(draft.title, "Half done");
    }

    #[test]
    fn test_report_errors_cleared_by_other_panel() {
        let mut c = PopupController::new();
        let mut draft = ReportDraft::default();
        c.open_report();
        assert!(c.submit_report(&mut draft).is_err());
        assert!(c.report_errors().is_some());

        for other in [PopupId::Help, PopupId::MapKey, PopupId::Search] {
            c.open(other);
            assert_eq!(c.report_errors(), None);
            c.open_report();
            assert_eq!(c.report_errors(), None);
            assert!(c.submit_report(&mut draft).is_err());
        }

        c.close_report_only();
        c.open_report();
        assert_eq!(c.report_errors(), None);
    }

    #[test]
    fn test_report_errors_survive_reopening_report() {
        let mut c = PopupController::new();
        let mut draft = ReportDraft::default();
        c.open_report();
        let errors = c.submit_report(&mut draft).unwrap_err();
        c.open_report();
        assert_eq!(c.report_errors(), Some(errors));

        draft.title = "Jammed".into();
        draft.issue_type = Some(IssueType::VendingMachine);
        draft.description = "Coin slot blocked.".into();
        c.submit_report(&mut draft).unwrap();
        c.open_report();
        assert_eq!(c.report_errors(), None);
    }

    #[test]
    fn test_visibility_styles() {
        assert_eq!(Visibility::Hidden.display_style(), "display: none;");
        assert_eq!(Visibility::Displayed.display_style(), "display: block;");
        assert_eq!(Visibility::Displayed.css_class(), "");
    }
}
