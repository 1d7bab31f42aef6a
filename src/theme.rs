use eframe::egui::{self, Color32, Stroke};

/// Canvas colors for the dark map style
pub mod palette {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 17, 22);
    pub const BUILDING_FILL: Color32 = Color32::from_rgb(30, 33, 41);
    pub const BUILDING_OUTLINE: Color32 = Color32::from_rgb(45, 49, 60);

    pub const ROAD_MOTORWAY: Color32 = Color32::from_rgb(138, 146, 162);
    pub const ROAD_PRIMARY: Color32 = Color32::from_rgb(118, 126, 142);
    pub const ROAD_SECONDARY: Color32 = Color32::from_rgb(98, 106, 120);
    pub const ROAD_TERTIARY: Color32 = Color32::from_rgb(82, 89, 102);
    pub const ROAD_RESIDENTIAL: Color32 = Color32::from_rgb(66, 72, 84);
    pub const ROAD_MINOR: Color32 = Color32::from_rgb(52, 57, 68);

    pub const MARKER: Color32 = Color32::from_rgb(245, 184, 66);
    pub const MARKER_RING: Color32 = Color32::from_rgb(255, 214, 130);
    pub const LABEL: Color32 = Color32::from_rgb(205, 210, 220);
    pub const WARNING: Color32 = Color32::from_rgb(235, 110, 100);
}

/// Apply the dark theme to the whole UI
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(21, 24, 31);
    visuals.window_fill = Color32::from_rgb(21, 24, 31);
    visuals.window_stroke = Stroke::new(1.0, palette::BUILDING_OUTLINE);
    visuals.selection.bg_fill = Color32::from_rgb(96, 72, 28);
    visuals.hyperlink_color = palette::MARKER;
    ctx.set_visuals(visuals);
}
