use crate::leads::ScoredLead;
use crate::ranking::{summarize, LeadFilter, Summary};
use crate::tui::theme::ThemeColors;
use std::path::PathBuf;
use std::time::Instant;

/// Step applied by the +/- keys to the minimum score
pub const MIN_SCORE_STEP: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    LocationInput,
    Help,
}

pub struct App {
    /// Full ranking, never filtered
    pub ranked: Vec<ScoredLead>,
    /// Ranking after the current filter
    pub visible: Vec<ScoredLead>,
    pub summary: Summary,
    pub filter: LeadFilter,
    pub table_state: ratatui::widgets::TableState,
    pub input_mode: InputMode,
    pub location_input: String,
    pub flash_message: Option<(String, Instant)>,
    pub export_path: PathBuf,
    pub colors: ThemeColors,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        ranked: Vec<ScoredLead>,
        filter: LeadFilter,
        export_path: PathBuf,
        colors: ThemeColors,
    ) -> Self {
        let summary = summarize(&ranked);
        let visible = filter.apply(&ranked);
        let mut table_state = ratatui::widgets::TableState::default();
        if !visible.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            ranked,
            visible,
            summary,
            filter,
            table_state,
            input_mode: InputMode::Normal,
            location_input: String::new(),
            flash_message: None,
            export_path,
            colors,
            should_quit: false,
        }
    }

    pub fn next_row(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= self.visible.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.visible.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_lead(&self) -> Option<&ScoredLead> {
        self.table_state
            .selected()
            .and_then(|i| self.visible.get(i))
    }

    /// Re-apply the filter, keeping the same lead selected when it is still visible
    fn refilter(&mut self) {
        let selected_index = self.selected_lead().map(|s| s.input_index);
        self.visible = self.filter.apply(&self.ranked);

        if self.visible.is_empty() {
            self.table_state.select(None);
            return;
        }
        let position = selected_index
            .and_then(|idx| self.visible.iter().position(|s| s.input_index == idx))
            .unwrap_or(0);
        self.table_state.select(Some(position));
    }

    pub fn raise_min_score(&mut self) {
        self.filter.min_score = self.filter.min_score.saturating_add(MIN_SCORE_STEP).min(100);
        self.refilter();
    }

    pub fn lower_min_score(&mut self) {
        self.filter.min_score = self.filter.min_score.saturating_sub(MIN_SCORE_STEP);
        self.refilter();
    }

    /// Start location search input, prefilled with the current query
    pub fn start_location_input(&mut self) {
        self.input_mode = InputMode::LocationInput;
        self.location_input = self.filter.location.clone().unwrap_or_default();
    }

    pub fn confirm_location_input(&mut self) {
        let query = self.location_input.trim().to_string();
        self.filter.location = if query.is_empty() { None } else { Some(query) };
        self.input_mode = InputMode::Normal;
        self.location_input.clear();
        self.refilter();
    }

    pub fn cancel_location_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.location_input.clear();
    }

    pub fn clear_location(&mut self) {
        if self.filter.location.take().is_some() {
            self.refilter();
            self.show_flash("Location filter cleared".to_string());
        }
    }

    /// Open the selected lead's LinkedIn profile in the browser
    pub fn open_selected(&mut self) {
        let Some(scored) = self.selected_lead() else {
            return;
        };
        let name = scored.lead.name.clone();
        match crate::browser::open_profile(&scored.lead.linkedin) {
            Ok(_) => self.show_flash(format!("Opened: {}", name)),
            Err(e) => self.show_flash(format!("Failed to open profile: {}", e)),
        }
    }

    /// Export the visible ranking as CSV
    pub fn export_visible(&mut self) {
        match crate::export::write_csv(&self.export_path, &self.visible) {
            Ok(()) => self.show_flash(format!(
                "Exported {} leads to {}",
                self.visible.len(),
                self.export_path.display()
            )),
            Err(e) => self.show_flash(format!("Failed to export: {}", e)),
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}
