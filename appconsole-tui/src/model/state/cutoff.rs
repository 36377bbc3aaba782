//! Cutoff times page state

use appconsole_core::panels::DocumentController;
use appconsole_core::types::{CutoffConfig, CutoffTime};

#[derive(Debug, Default)]
pub struct CutoffState {
    pub document: DocumentController<CutoffConfig>,
    /// Cursor over the draft's times.
    pub selected: usize,
    pub mounted: bool,
}

impl CutoffState {
    pub fn times(&self) -> &[CutoffTime] {
        &self.document.draft().times
    }

    pub fn selected_time(&self) -> Option<&CutoffTime> {
        self.times().get(self.selected)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.times().len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.times().len().saturating_sub(1);
    }

    /// Add or replace a time in the draft and put the cursor on it.
    pub fn put_time(&mut self, index: Option<usize>, time: CutoffTime) {
        let mut at = 0;
        self.document.edit(|config| match index {
            Some(i) if i < config.times.len() => {
                config.times[i] = time;
                at = i;
            }
            _ => {
                config.times.push(time);
                at = config.times.len() - 1;
            }
        });
        self.selected = at;
    }

    pub fn remove_time(&mut self, index: usize) {
        self.document.edit(|config| {
            if index < config.times.len() {
                config.times.remove(index);
            }
        });
        let len = self.times().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn toggle_enabled(&mut self) {
        self.document.edit(|config| config.enabled = !config.enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(label: &str, at: &str) -> CutoffTime {
        CutoffTime {
            label: label.into(),
            time: at.into(),
        }
    }

    #[test]
    fn put_appends_or_replaces() {
        let mut state = CutoffState::default();
        state.put_time(None, time("Pagi", "09:00"));
        state.put_time(None, time("Sore", "15:00"));
        assert_eq!(state.selected, 1);
        state.put_time(Some(0), time("Pagi", "10:00"));
        assert_eq!(state.selected, 0);
        assert_eq!(state.times()[0].time, "10:00");
        assert_eq!(state.times().len(), 2);
        assert!(state.document.is_dirty());
    }

    #[test]
    fn removing_the_last_row_moves_the_cursor() {
        let mut state = CutoffState::default();
        state.put_time(None, time("Pagi", "09:00"));
        state.put_time(None, time("Sore", "15:00"));
        state.remove_time(1);
        assert_eq!(state.selected, 0);
        state.remove_time(7);
        assert_eq!(state.times().len(), 1);
    }
}
