//! Centralized theme module for TUI color constants and styles

use crate::ranking::Tier;
use ratatui::prelude::*;
use serde::{Deserialize, Serialize};

/// Palette selection from the config file
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Tier colors (traffic light pattern, high priority is green)
    pub tier_high: Color,
    pub tier_medium: Color,
    pub tier_low: Color,

    pub bar_empty: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub index_color: Color,
    pub header_style: Style,
    pub row_selected: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup and pane borders
    pub popup_border: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            tier_high: Color::Green,
            tier_medium: Color::Yellow,
            tier_low: Color::Red,
            bar_empty: Color::DarkGray,
            row_alt_bg: Color::Indexed(235),
            index_color: Color::DarkGray,
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
        }
    }

    pub fn light() -> Self {
        Self {
            tier_high: Color::Indexed(28),
            tier_medium: Color::Indexed(130),
            tier_low: Color::Indexed(160),
            bar_empty: Color::Indexed(250),
            row_alt_bg: Color::Indexed(254),
            index_color: Color::Indexed(244),
            header_style: Style::new().bold(),
            row_selected: Style::new().reversed(),
            muted: Color::Indexed(240),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Indexed(28),
            flash_error: Color::Indexed(160),
            popup_border: Color::Blue,
        }
    }

    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::High => self.tier_high,
            Tier::Medium => self.tier_medium,
            Tier::Low => self.tier_low,
        }
    }

    /// Color for a 0-100 propensity score
    pub fn score_color(&self, score: u8) -> Color {
        self.tier_color(Tier::from_score(score))
    }
}

/// Pick the palette. `Auto` asks the terminal for its background luma and
/// falls back to dark when the terminal does not answer.
pub fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
        Theme::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            _ => ThemeColors::dark(),
        },
    }
}
