//! Terminal color handling
//!
//! Every colored string goes through [`Painter`], which returns plain text
//! when color is disabled. Padding is applied before painting so escape
//! codes never count toward column widths.

use colored::{Color, Colorize};
use parcelrisk_domain::service::DashboardTier;
use parcelrisk_types::ColorMode;
use std::io::IsTerminal;

/// Headings and separators
pub const ACCENT: Color = Color::Magenta;
/// Interactive prompts
pub const PROMPT: Color = Color::Cyan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Painter that never emits escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Resolve a color mode for the stream the painted text is written to.
    pub fn for_stream<S: IsTerminal>(mode: ColorMode, stream: &S) -> Self {
        Self::resolve(
            mode,
            stream.is_terminal(),
            std::env::var_os("NO_COLOR").is_some(),
        )
    }

    /// Resolve a color mode against terminal state and `NO_COLOR`.
    ///
    /// An enabled painter pins the `colored` global override on, so its own
    /// environment detection cannot strip colors decided here. Disabled
    /// painters never touch `colored`.
    pub fn resolve(mode: ColorMode, is_terminal: bool, no_color: bool) -> Self {
        let enabled = color_enabled(mode, is_terminal, no_color);
        if enabled {
            colored::control::set_override(true);
        }
        Self::new(enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tier(&self, text: &str, tier: DashboardTier) -> String {
        self.paint(text, tier_color(tier))
    }
}

fn color_enabled(mode: ColorMode, is_terminal: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !no_color,
    }
}

pub fn tier_color(tier: DashboardTier) -> Color {
    match tier {
        DashboardTier::High => Color::Red,
        DashboardTier::Moderate => Color::Yellow,
        DashboardTier::Low => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_painter_passes_text_through() {
        let painter = Painter::plain();
        assert!(!painter.is_enabled());
        assert_eq!(painter.paint("Risk", Color::Red), "Risk");
        assert_eq!(painter.tier("120.00", DashboardTier::High), "120.00");
    }

    #[test]
    fn test_enabled_painter_wraps_in_ansi() {
        colored::control::set_override(true);
        let painted = Painter::new(true).paint("x", Color::Red);
        assert_eq!(painted, "\u{1b}[31mx\u{1b}[0m");
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(color_enabled(ColorMode::Always, false, true));
        assert!(!color_enabled(ColorMode::Never, true, false));
        assert!(color_enabled(ColorMode::Auto, true, false));
        assert!(!color_enabled(ColorMode::Auto, false, false));
        assert!(!color_enabled(ColorMode::Auto, true, true));
    }

    #[test]
    fn test_resolve_per_stream_state() {
        assert!(Painter::resolve(ColorMode::Auto, true, false).is_enabled());
        assert!(!Painter::resolve(ColorMode::Auto, false, false).is_enabled());
        assert!(!Painter::resolve(ColorMode::Never, true, false).is_enabled());
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(tier_color(DashboardTier::High), Color::Red);
        assert_eq!(tier_color(DashboardTier::Moderate), Color::Yellow);
        assert_eq!(tier_color(DashboardTier::Low), Color::Green);
    }
}
