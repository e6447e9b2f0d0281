//! koji-rs - Koji mascot renderer
//!
//! Draws the Koji mascot: a green blob body (a diamond with rounded corners
//! and inward-bowed sides) with a single eye on top.
//!
//! The body outline is pure geometry (`shapes::build_blob_path`); the
//! canvas widget in `render` is the surface that fills it. The side panel
//! tweaks the body box and shape controls, and the choices are persisted
//! between runs.

use eframe::egui;

mod render;
mod settings;
mod shapes;

use render::MascotCanvas;
use settings::AppSettings;
use shapes::BlobParams;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting koji-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Koji"),
        ..Default::default()
    };

    eframe::run_native(
        "koji-rs",
        options,
        Box::new(|cc| Ok(Box::new(MascotApp::new(cc)))),
    )
}

/// Largest corner radius ratio offered in the UI
///
/// Past √2/4 the corner offsets of a square body cross and the fan fill
/// in the canvas no longer matches the outline.
const MAX_CORNER_RADIUS_RATIO: f32 = 0.35;

/// Main application state
pub struct MascotApp {
    pub params: BlobParams,
    pub canvas: MascotCanvas,
    pub show_settings: bool,

    /// Settings changed since the last save
    settings_dirty: bool,
}

impl MascotApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(&AppSettings::load())
    }

    pub fn with_settings(settings: &AppSettings) -> Self {
        let mut app = Self {
            params: BlobParams::default(),
            canvas: MascotCanvas::new(),
            show_settings: true,
            settings_dirty: false,
        };
        settings.apply(&mut app);
        app
    }

    /// Persist once the user lets go of whatever they were dragging
    fn save_if_idle(&mut self, ctx: &egui::Context) {
        if self.settings_dirty && !ctx.input(|i| i.pointer.any_down()) {
            AppSettings::from_app(self).save();
            self.settings_dirty = false;
        }
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.heading("Body");
        ui.separator();

        changed |= ui
            .add(egui::Slider::new(&mut self.params.width, 50.0..=800.0).text("Width"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.height, 50.0..=800.0).text("Height"))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.params.corner_radius_ratio, 0.0..=MAX_CORNER_RADIUS_RATIO)
                    .text("Corner radius"),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.params.concavity, 0.0..=1.0).text("Concavity"))
            .changed();

        if ui.button("Reset shape").clicked() {
            self.params = BlobParams::default();
            changed = true;
        }

        ui.separator();

        let display = &mut self.canvas.settings;
        ui.collapsing("Display", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut display.zoom, 0.1..=2.0).text("Zoom"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut display.curve_segments, 1..=64).text("Curve segments"))
                .changed();
            changed |= ui.checkbox(&mut display.show_outline, "Show outlines").changed();
            changed |= ui
                .checkbox(&mut display.show_construction, "Show construction points")
                .changed();
        });

        ui.separator();

        ui.collapsing("Color", |ui| {
            for (label, color) in [
                ("Body", &mut display.body_color),
                ("Eye", &mut display.eye_white_color),
                ("Pupil", &mut display.pupil_color),
                ("Background", &mut display.background),
            ] {
                ui.horizontal(|ui| {
                    changed |= ui.color_edit_button_srgba(color).changed();
                    ui.label(label);
                });
            }
        });

        if changed {
            self.settings_dirty = true;
        }
    }
}

impl eframe::App for MascotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Koji");
                ui.separator();
                if ui.toggle_value(&mut self.show_settings, "⚙ Settings").changed() {
                    self.settings_dirty = true;
                }
            });
        });

        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.settings_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &self.params, None);
        });

        self.save_if_idle(ctx);
    }
}
