use teamfit_types::{AnalysisRequest, InterviewRecord};

use crate::error::{Error, Result};
use crate::selection::SelectionSet;

/// Interview history list with its filter and selection state.
///
/// `visible` is an index projection over `records`; filtering never mutates
/// the record list itself, so relaxing a filter restores hidden rows exactly
/// as they were.
#[derive(Debug, Default)]
pub struct HistoryState {
    records: Vec<InterviewRecord>,
    visible: Vec<usize>,
    search: String,
    status: Option<String>,
    selection: SelectionSet,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh record list, keeping the current filters.
    ///
    /// Selected ids that no longer resolve to a record are dropped so the
    /// selection can never reference rows that are gone.
    pub fn load(&mut self, records: Vec<InterviewRecord>) {
        self.records = records;
        let records = &self.records;
        self.selection
            .retain(|id| records.iter().any(|record| record.agent_id == id));
        self.apply_filter();
    }

    /// Case-insensitive substring match over candidate name and role.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
        self.apply_filter();
    }

    /// `None` shows every status.
    pub fn set_status_filter(&mut self, status: Option<String>) {
        self.status = status;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| Self::matches(record, &self.search, self.status.as_deref()))
            .map(|(index, _)| index)
            .collect();
        self.visible = visible;
    }

    fn matches(record: &InterviewRecord, search: &str, status: Option<&str>) -> bool {
        let matches_search = search.is_empty()
            || record.candidate_name.to_lowercase().contains(search)
            || record.role.to_lowercase().contains(search);
        let matches_status = match status {
            None => true,
            Some(wanted) => record.status.eq_ignore_ascii_case(wanted),
        };
        matches_search && matches_status
    }

    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &InterviewRecord> {
        self.visible.iter().map(|&index| &self.records[index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn get(&self, agent_id: &str) -> Option<&InterviewRecord> {
        self.records
            .iter()
            .find(|record| record.agent_id == agent_id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Flips selection for one record. Unknown ids are rejected, never
    /// inserted.
    pub fn toggle(&mut self, agent_id: &str) -> Result<bool> {
        if self.get(agent_id).is_none() {
            return Err(Error::NotFound(agent_id.to_string()));
        }
        Ok(self.selection.toggle(agent_id))
    }

    /// Selects every currently visible record; hidden rows are untouched.
    pub fn select_all_visible(&mut self) {
        for &index in &self.visible {
            self.selection.insert(&self.records[index].agent_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection_count(&self) -> usize {
        self.selection.count()
    }

    pub fn is_selected(&self, agent_id: &str) -> bool {
        self.selection.contains(agent_id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Hand-off payload for the dashboard: selected rows in history order.
    pub fn selected_requests(&self) -> Vec<AnalysisRequest> {
        self.records
            .iter()
            .filter(|record| self.selection.contains(&record.agent_id))
            .map(AnalysisRequest::from_record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(agent_id: &str, name: &str, role: &str, status: &str) -> InterviewRecord {
        InterviewRecord {
            agent_id: agent_id.to_string(),
            candidate_name: name.to_string(),
            role: role.to_string(),
            status: status.to_string(),
            created_at: None,
            duration: None,
            has_transcript: false,
        }
    }

    fn loaded() -> HistoryState {
        let mut state = HistoryState::new();
        state.load(vec![
            record("agent_001", "Alice Chen", "Platform Engineer", "completed"),
            record("agent_002", "Bob Engel", "Designer", "completed"),
            record("agent_003", "Carol Diaz", "Product Manager", "in-progress"),
        ]);
        state
    }

    #[test]
    fn test_toggle_is_self_inverse_on_records() {
        let mut state = loaded();
        assert!(state.toggle("agent_001").unwrap());
        assert!(state.is_selected("agent_001"));
        assert!(!state.toggle("agent_001").unwrap());
        assert!(!state.is_selected("agent_001"));
    }

    #[test]
    fn test_toggle_unknown_id_is_rejected() {
        let mut state = loaded();
        let err = state.toggle("agent_999").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_select_all_then_clear() {
        let mut state = loaded();
        state.select_all_visible();
        assert_eq!(state.selection_count(), state.visible_len());
        state.clear_selection();
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_select_all_never_selects_hidden_rows() {
        let mut state = loaded();
        state.set_search("eng");
        // Matches Alice (role) and Bob (name), never Carol.
        assert_eq!(state.visible_len(), 2);
        state.select_all_visible();
        assert!(state.is_selected("agent_001"));
        assert!(state.is_selected("agent_002"));
        assert!(!state.is_selected("agent_003"));
    }

    #[test]
    fn test_search_matches_name_or_role_case_insensitively() {
        let mut state = loaded();
        state.set_search("ALICE");
        assert_eq!(state.visible_len(), 1);
        state.set_search("product");
        assert_eq!(state.visible_len(), 1);
        state.set_search("");
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn test_status_filter_is_exact_and_all_restores() {
        let mut state = loaded();
        state.set_status_filter(Some("completed".to_string()));
        assert_eq!(state.visible_len(), 2);
        state.set_status_filter(Some("in-progress".to_string()));
        assert_eq!(state.visible_len(), 1);
        state.set_status_filter(None);
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn test_search_and_status_combine_as_conjunction() {
        let mut state = loaded();
        state.set_search("eng");
        state.set_status_filter(Some("completed".to_string()));
        assert_eq!(state.visible_len(), 2);
        state.set_status_filter(Some("in-progress".to_string()));
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn test_reload_drops_selection_for_missing_ids() {
        let mut state = loaded();
        state.toggle("agent_001").unwrap();
        state.toggle("agent_002").unwrap();
        state.load(vec![
            record("agent_002", "Bob Engel", "Designer", "completed"),
            record("agent_004", "Dana Wu", "Data Scientist", "completed"),
        ]);
        assert!(!state.is_selected("agent_001"));
        assert!(state.is_selected("agent_002"));
        assert_eq!(state.selection_count(), 1);
    }

    #[test]
    fn test_selected_requests_follow_history_order() {
        let mut state = loaded();
        state.toggle("agent_003").unwrap();
        state.toggle("agent_001").unwrap();
        let requests = state.selected_requests();
        let ids: Vec<&str> = requests.iter().map(|r| r.agent_id.as_str()).collect();
        assert_eq!(ids, vec!["agent_001", "agent_003"]);
        assert_eq!(requests[0].candidate_name, "Alice Chen");
        assert_eq!(requests[1].role, "Product Manager");
    }
}
