//! Color palettes for the two resolved schemes.
//!
//! # Examples
//!
//! ```
//! use folio::{Palette, ResolvedTheme};
//!
//! let dark = Palette::for_scheme(ResolvedTheme::Dark);
//! println!("Dark background: {:?}", dark.background);
//! ```

use egui::Color32;

use crate::preference::ResolvedTheme;

/// Colors every section of the page draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Surfaces
    pub background: Color32,
    pub card: Color32,
    pub extreme_background: Color32,

    // Text
    pub text: Color32,
    pub text_muted: Color32,

    // Accents
    pub primary: Color32,
    pub accent: Color32,
    pub border: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
}

impl Palette {
    /// Returns the palette for a resolved scheme.
    pub fn for_scheme(scheme: ResolvedTheme) -> Self {
        match scheme {
            ResolvedTheme::Light => light_palette(),
            ResolvedTheme::Dark => dark_palette(),
        }
    }

    /// Writes this palette into egui visuals.
    pub fn apply_to(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.extreme_background;
        visuals.faint_bg_color = self.hover;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke.color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.card;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_fill = self.hover;
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.active.bg_fill = self.selection;

        visuals.hyperlink_color = self.primary;
        visuals.error_fg_color = self.error;
        visuals.warn_fg_color = self.warning;
    }
}

// slate/white
fn light_palette() -> Palette {
    Palette {
        background: hex_to_color32("#ffffff"),
        card: hex_to_color32("#f8fafc"),
        extreme_background: hex_to_color32("#f1f5f9"),

        text: hex_to_color32("#0f172a"),
        text_muted: hex_to_color32("#64748b"),

        primary: hex_to_color32("#0891b2"),
        accent: hex_to_color32("#7c3aed"),
        border: hex_to_color32("#cbd5e1"),
        selection: hex_to_color32("#bae6fd"),
        hover: hex_to_color32("#e2e8f0"),
        success: hex_to_color32("#16a34a"),
        error: hex_to_color32("#dc2626"),
        warning: hex_to_color32("#ea580c"),
    }
}

// slate-900 surfaces
fn dark_palette() -> Palette {
    Palette {
        background: hex_to_color32("#0f172a"),
        card: hex_to_color32("#1e293b"),
        extreme_background: hex_to_color32("#020617"),

        text: hex_to_color32("#f8fafc"),
        text_muted: hex_to_color32("#94a3b8"),

        primary: hex_to_color32("#22d3ee"),
        accent: hex_to_color32("#a78bfa"),
        border: hex_to_color32("#334155"),
        selection: hex_to_color32("#164e63"),
        hover: hex_to_color32("#334155"),
        success: hex_to_color32("#4ade80"),
        error: hex_to_color32("#f87171"),
        warning: hex_to_color32("#fb923c"),
    }
}

/// Parses `#rrggbb` (leading `#` optional). Anything else is black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::BLACK;
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#0f172a"), Color32::from_rgb(15, 23, 42));
        assert_eq!(hex_to_color32("ffffff"), Color32::from_rgb(255, 255, 255));
        assert_eq!(hex_to_color32("#fff"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_to_color32_non_ascii_is_black() {
        // Six bytes, but slicing at byte 2 or 4 would split a character.
        assert_eq!("ééé".len(), 6);
        assert_eq!(hex_to_color32("#ééé"), Color32::BLACK);
        assert_eq!(hex_to_color32("aé€"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palettes_differ_per_scheme() {
        let light = Palette::for_scheme(ResolvedTheme::Light);
        let dark = Palette::for_scheme(ResolvedTheme::Dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_apply_to_visuals() {
        let palette = Palette::for_scheme(ResolvedTheme::Dark);
        let mut visuals = egui::Visuals::dark();
        palette.apply_to(&mut visuals);
        assert_eq!(visuals.panel_fill, palette.background);
        assert_eq!(visuals.override_text_color, Some(palette.text));
    }
}
