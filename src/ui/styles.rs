//! Color palette for the board's panels
//!
//! Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    /// Panel border
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(70, 70, 75);

    /// Game over text
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Check warning
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Tertiary text (less important, hints)
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);
}

/// Panel frame used by the mode picker
pub fn overlay_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(UiColors::BG_OVERLAY)
        .corner_radius(10.0)
        .inner_margin(20.0)
        .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
}
