use egui::{Color32, Stroke};

use crate::state::settings::AppSettings;

fn color32(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

/// Colors the chart switches between on hover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub primary: Color32,
    pub dark: Color32,
}

impl ChartTheme {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            primary: color32(settings.primary),
            dark: color32(settings.dark),
        }
    }

    pub fn line_color(&self, hovered: bool) -> Color32 {
        if hovered {
            self.primary
        } else {
            self.dark
        }
    }

    pub fn show_grid(&self, hovered: bool) -> bool {
        hovered
    }

    pub fn border(&self, hovered: bool) -> Stroke {
        if hovered {
            Stroke::new(1.0, self.primary)
        } else {
            Stroke::new(1.0, Color32::from_black_alpha(38))
        }
    }

    pub fn plot_bg(&self) -> Color32 {
        Color32::WHITE
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_selects_primary_color_and_grid() {
        let theme = ChartTheme::default();
        assert_eq!(theme.line_color(true), Color32::from_rgb(2, 158, 116));
        assert_eq!(theme.line_color(false), theme.dark);
        assert!(theme.show_grid(true));
        assert!(!theme.show_grid(false));
        assert_eq!(theme.border(true).color, theme.primary);
    }
}
