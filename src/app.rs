use crate::config::Settings;
use crate::domain::{DISTRICTS, District, DistrictGeometry, PointOfInterest};
use crate::fetch::{FetchController, FetchState};
use crate::geometry::Viewport;
use crate::layers::{self, RoadStyles, Scene};
use crate::theme::{self, palette};
use eframe::egui::{
    self, Align, Align2, ComboBox, Context, CursorIcon, Frame, Grid, Layout, RichText, Sense,
    SidePanel, Ui, Window, vec2,
};
use log::debug;

/// Pixel padding between the district bounds and the canvas edge
const CANVAS_PADDING: f32 = 24.0;

/// Single-slot selection plus the panel's open state
///
/// Closing the panel keeps the last-active point so its marker stays
/// highlighted; only clicking another point moves the slot, and only a
/// district switch clears it.
#[derive(Debug, Default, PartialEq)]
pub struct Selection {
    active: Option<usize>,
    panel_open: bool,
}

impl Selection {
    /// Activate a point and open the panel
    pub fn click(&mut self, index: usize) {
        self.active = Some(index);
        self.panel_open = true;
    }

    /// Hide the panel, keeping the active point
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Forget the selection entirely
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open && self.active.is_some()
    }
}

/// The district map application
pub struct DistrictMapApp {
    settings: Settings,
    district: &'static District,
    fetch: FetchController,
    scene: Scene,
    selection: Selection,
    show_labels: bool,
    road_styles: RoadStyles,
}

impl DistrictMapApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        district: &'static District,
        settings: Settings,
    ) -> Self {
        theme::apply(&cc.egui_ctx);

        let mut fetch = FetchController::new();
        fetch.start(district.bbox, settings.overpass.clone(), &cc.egui_ctx);

        let scene = layers::build_scene(
            &DistrictGeometry::default(),
            district,
            settings.simplify_buildings,
        );
        let show_labels = settings.show_labels;

        Self {
            settings,
            district,
            fetch,
            scene,
            selection: Selection::default(),
            show_labels,
            road_styles: RoadStyles::default(),
        }
    }

    fn switch_district(&mut self, district: &'static District, ctx: &Context) {
        if district.id == self.district.id {
            return;
        }
        debug!("switching district to {}", district.id);

        self.district = district;
        self.selection.reset();
        // The old geometry belongs to the old bounding box; start blank
        self.scene = layers::build_scene(
            &DistrictGeometry::default(),
            district,
            self.settings.simplify_buildings,
        );
        self.fetch
            .start(district.bbox, self.settings.overpass.clone(), ctx);
    }

    fn reload(&mut self, ctx: &Context) {
        self.fetch
            .start(self.district.bbox, self.settings.overpass.clone(), ctx);
    }

    fn active_poi(&self) -> Option<&'static PointOfInterest> {
        self.selection.active().map(|i| &self.district.pois[i])
    }

    fn show_detail_panel(&mut self, ctx: &Context) {
        let open = self.selection.panel_open();

        SidePanel::right("detail_panel")
            .resizable(false)
            .default_width(300.0)
            .show_animated(ctx, open, |ui| {
                let Some(poi) = self.active_poi() else {
                    return;
                };

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.heading(poi.name);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            self.selection.close_panel();
                        }
                    });
                });
                ui.label(RichText::new(poi.category).small().weak());
                ui.separator();
                ui.label(poi.detail);
                ui.add_space(8.0);

                Grid::new("poi_position")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Latitude").weak());
                        ui.label(format!("{:.4}", poi.lat));
                        ui.end_row();
                        ui.label(RichText::new("Longitude").weak());
                        ui.label(format!("{:.4}", poi.lon));
                        ui.end_row();
                    });
            });
    }

    fn show_canvas(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(Frame::NONE.fill(palette::BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
                let viewport = Viewport::fit(&self.scene.bounds, response.rect, CANVAS_PADDING);

                layers::paint_buildings(&painter, &viewport, &self.scene.buildings);
                layers::paint_roads(&painter, &viewport, &self.scene.roads, &self.road_styles);

                let positions = layers::marker_positions(&viewport, &self.scene.markers);

                if let Some(pointer) = response.hover_pos()
                    && layers::hit_test(&positions, pointer).is_some()
                {
                    ctx.output_mut(|o| o.cursor_icon = CursorIcon::PointingHand);
                }

                if response.clicked()
                    && let Some(pointer) = response.interact_pointer_pos()
                    && let Some(index) = layers::hit_test(&positions, pointer)
                {
                    debug!("selected {}", self.district.pois[index].id);
                    self.selection.click(index);
                }

                layers::paint_markers(
                    &painter,
                    &positions,
                    &self.scene.markers,
                    self.selection.active(),
                    self.show_labels,
                );
            });
    }

    fn show_controls(&mut self, ctx: &Context) {
        Window::new("controls")
            .anchor(Align2::LEFT_TOP, vec2(12.0, 12.0))
            .title_bar(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mut picked: Option<&'static District> = None;
                    ComboBox::from_id_salt("district")
                        .selected_text(self.district.name)
                        .show_ui(ui, |ui| {
                            for district in &DISTRICTS {
                                let current = district.id == self.district.id;
                                if ui.selectable_label(current, district.name).clicked() {
                                    picked = Some(district);
                                }
                            }
                        });
                    if let Some(district) = picked {
                        self.switch_district(district, ctx);
                    }

                    ui.toggle_value(&mut self.show_labels, "Labels");

                    if ui.button("Reload").clicked() {
                        self.reload(ctx);
                    }
                });

                ui.separator();
                self.show_status(ui);
            });
    }

    fn show_status(&self, ui: &mut Ui) {
        match self.fetch.state() {
            FetchState::Idle | FetchState::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching district geometry...");
                });
            }
            FetchState::Ready => {
                ui.label(format!(
                    "{} roads, {} buildings",
                    self.scene.roads.len(),
                    self.scene.buildings.len()
                ));
            }
            FetchState::Failed(message) => {
                ui.label(RichText::new(message).color(palette::WARNING));
            }
        }
    }
}

impl eframe::App for DistrictMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // A failed or stale fetch leaves the current scene untouched
        if let Some(geometry) = self.fetch.poll() {
            self.scene = layers::build_scene(
                &geometry,
                self.district,
                self.settings.simplify_buildings,
            );
        }

        self.show_detail_panel(ctx);
        self.show_canvas(ctx);
        self.show_controls(ctx);
    }
}
