//! Mascot canvas widget
//!
//! The canvas is the rendering surface for the geometry in `shapes`:
//! it fits the model space (the body's bounding box) into the available
//! area, fills the blob body and draws the eye on top.
//!
//! ## Filling the body
//!
//! egui only fills convex paths correctly, and the blob's sides bow
//! inward. The flattened outline is filled as a triangle fan from the
//! center instead. That is exact while the blob is star-shaped around its
//! center, which holds as long as the corner offsets of neighbouring
//! vertices don't pass each other: a corner radius ratio up to about
//! 0.35 (√2/4 for a square box, more for oblong ones).

use eframe::egui::{self, Color32, Mesh, Pos2, Rect, Rounding, Stroke, Vec2};

use crate::shapes::{
    shape_to_points, BlobError, BlobGeometry, BlobParams, BlobPathCache, EyeLayout,
    PathCommand, Point, Shape,
};

/// Theme and display options for the canvas
#[derive(Clone, Debug)]
pub struct CanvasSettings {
    pub body_color: Color32,
    pub eye_white_color: Color32,
    pub pupil_color: Color32,
    pub background: Color32,

    /// Straight pieces per quadratic curve when flattening the body
    pub curve_segments: usize,

    /// Scale on top of fit-to-area (1.0 = body fills the shorter side)
    pub zoom: f32,

    /// Trace the outlines of every shape
    pub show_outline: bool,

    /// Mark diamond vertices, corner offsets and edge control points
    pub show_construction: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            body_color: Color32::from_rgb(0x28, 0xcc, 0x56),
            eye_white_color: Color32::WHITE,
            pupil_color: Color32::BLACK,
            background: Color32::from_rgb(0xfe, 0xf7, 0xff),
            curve_segments: 16,
            zoom: 0.9,
            show_outline: false,
            show_construction: false,
        }
    }
}

/// Maps model units to screen points
#[derive(Clone, Copy, Debug)]
struct ModelToScreen {
    origin: Pos2,
    scale: f32,
}

impl ModelToScreen {
    /// Fit a `width` x `height` model box, centered, into `rect`
    fn fit(rect: Rect, width: f32, height: f32, zoom: f32) -> Self {
        let scale = (rect.width() / width).min(rect.height() / height) * zoom;
        let origin = rect.center() - Vec2::new(width, height) * (scale / 2.0);
        Self { origin, scale }
    }

    fn pos(&self, p: Point) -> Pos2 {
        self.origin + Vec2::new(p.x, p.y) * self.scale
    }

    fn rect(&self, min: Point, max: Point) -> Rect {
        Rect::from_min_max(self.pos(min), self.pos(max))
    }
}

/// Widget that draws the mascot
pub struct MascotCanvas {
    pub settings: CanvasSettings,

    /// Body path from the previous frame
    cache: BlobPathCache,

    /// Last reported build failure, so it is logged once
    last_error: Option<BlobError>,
}

impl Default for MascotCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MascotCanvas {
    pub fn new() -> Self {
        Self::with_settings(CanvasSettings::default())
    }

    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self {
            settings,
            cache: BlobPathCache::new(),
            last_error: None,
        }
    }

    /// Draw the mascot for `params`
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `params` - Body box size and shape controls, in model units
    /// * `size` - Desired widget size (or None for available space)
    pub fn show(&mut self, ui: &mut egui::Ui, params: &BlobParams, size: Option<Vec2>) -> egui::Response {
        let size = size.unwrap_or_else(|| ui.available_size());
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, self.settings.background);

        if let Err(err) = params.validate() {
            self.report(err);
            return response;
        }

        let to_screen = ModelToScreen::fit(rect, params.width, params.height, self.settings.zoom);
        let center = Point::new(params.width / 2.0, params.height / 2.0);
        let eye = EyeLayout::centered_at(center);

        let (body, hull) = match self.cache.get_or_build(params) {
            Ok(path) => {
                let hull = if self.settings.show_construction {
                    control_hull(path.commands())
                } else {
                    Vec::new()
                };
                (path.flatten(self.settings.curve_segments), hull)
            }
            Err(err) => {
                self.report(err);
                return response;
            }
        };
        self.last_error = None;

        painter.add(egui::Shape::mesh(fan_mesh(
            body.points(),
            center,
            &to_screen,
            self.settings.body_color,
        )));
        self.draw_eye(&painter, &eye, &to_screen);

        if self.settings.show_outline {
            let shapes: [&dyn Shape; 3] = [&body, &eye.white, &eye.pupil];
            draw_outlines(&painter, &shapes, &to_screen);
        }

        if self.settings.show_construction {
            if let Ok(geometry) = BlobGeometry::compute(params) {
                draw_construction(&painter, &geometry, &hull, &to_screen);
            }
        }

        response
    }

    fn draw_eye(&self, painter: &egui::Painter, eye: &EyeLayout, to_screen: &ModelToScreen) {
        let radii = eye.white.clamped_radii();
        let s = to_screen.scale;
        let rounding = Rounding {
            nw: radii.top_left * s,
            ne: radii.top_right * s,
            sw: radii.bottom_left * s,
            se: radii.bottom_right * s,
        };
        painter.rect_filled(
            to_screen.rect(eye.white.rect.min(), eye.white.rect.max()),
            rounding,
            self.settings.eye_white_color,
        );

        painter.rect_filled(
            to_screen.rect(eye.pupil.min(), eye.pupil.max()),
            0.0,
            self.settings.pupil_color,
        );
    }

    fn report(&mut self, err: BlobError) {
        if self.last_error.as_ref() != Some(&err) {
            log::error!("Cannot draw mascot body: {}", err);
            self.last_error = Some(err);
        }
    }

    /// Drop the cached body path
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

/// Triangle fan from `hub` over a closed outline
fn fan_mesh(outline: &[Point], hub: Point, to_screen: &ModelToScreen, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    if outline.len() < 3 {
        return mesh;
    }

    mesh.colored_vertex(to_screen.pos(hub), color);
    for &p in outline {
        mesh.colored_vertex(to_screen.pos(p), color);
    }

    let n = outline.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}

fn draw_outlines(painter: &egui::Painter, shapes: &[&dyn Shape], to_screen: &ModelToScreen) {
    let stroke = Stroke::new(1.5, Color32::from_rgb(220, 40, 120));

    for shape in shapes {
        // Roughly one point per 4 model units
        let count = ((shape.length() / 4.0) as usize).clamp(16, 512);
        let points: Vec<Pos2> = shape_to_points(*shape, count)
            .into_iter()
            .map(|p| to_screen.pos(p))
            .collect();

        if shape.is_closed() {
            painter.add(egui::Shape::closed_line(points, stroke));
        } else {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}

/// Straight lines from each curve's start to its control point and on to its end
fn control_hull(commands: &[PathCommand]) -> Vec<[Point; 2]> {
    let mut lines = Vec::with_capacity(commands.len() * 2);
    let mut current = Point::ZERO;
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => current = p,
            PathCommand::QuadTo { control, end } => {
                lines.push([current, control]);
                lines.push([control, end]);
                current = end;
            }
            PathCommand::Close => {}
        }
    }
    lines
}

fn draw_construction(
    painter: &egui::Painter,
    geometry: &BlobGeometry,
    hull: &[[Point; 2]],
    to_screen: &ModelToScreen,
) {
    let guide = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 60, 60, 140));
    let vertex_color = Color32::from_rgb(60, 60, 60);
    let offset_color = Color32::from_rgb(40, 110, 230);
    let control_color = Color32::from_rgb(230, 120, 30);

    for &[from, to] in hull {
        painter.line_segment([to_screen.pos(from), to_screen.pos(to)], guide);
    }

    for i in 0..geometry.vertices.len() {
        painter.circle_filled(to_screen.pos(geometry.vertices[i]), 4.0, vertex_color);
        painter.circle_filled(to_screen.pos(geometry.p_in[i]), 3.0, offset_color);
        painter.circle_filled(to_screen.pos(geometry.p_out[i]), 3.0, offset_color);

        painter.circle_filled(to_screen.pos(geometry.edge_control(i)), 3.0, control_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::build_blob_path;

    #[test]
    fn test_fit_centers_and_scales() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 400.0));
        let map = ModelToScreen::fit(rect, 400.0, 400.0, 1.0);
        assert!((map.scale - 1.0).abs() < 1e-6);
        assert_eq!(map.pos(Point::new(0.0, 0.0)), Pos2::new(200.0, 0.0));
        assert_eq!(map.pos(Point::new(200.0, 200.0)), rect.center());
    }

    #[test]
    fn test_fan_mesh_covers_outline() {
        let body = build_blob_path(&BlobParams::default()).unwrap().flatten(8);
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0));
        let map = ModelToScreen::fit(rect, 400.0, 400.0, 1.0);
        let mesh = fan_mesh(body.points(), Point::new(200.0, 200.0), &map, Color32::RED);

        assert_eq!(mesh.vertices.len(), body.points().len() + 1);
        assert_eq!(mesh.indices.len(), body.points().len() * 3);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_control_hull_follows_commands() {
        let path = build_blob_path(&BlobParams::new(100.0, 100.0)).unwrap();
        let hull = control_hull(path.commands());

        assert_eq!(hull.len(), 16);
        assert_eq!(hull[0][0], path.start());
        assert_eq!(hull[15][1], path.end_point());
        for pair in hull.windows(2) {
            assert_eq!(pair[0][1], pair[1][0]);
        }

        // Corner curves hinge on the raw diamond vertex
        assert_eq!(hull[2][1], Point::new(100.0, 50.0));
    }

    #[test]
    fn test_fan_mesh_needs_three_points() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0));
        let map = ModelToScreen::fit(rect, 10.0, 10.0, 1.0);
        let mesh = fan_mesh(&[Point::ZERO, Point::new(1.0, 1.0)], Point::ZERO, &map, Color32::RED);
        assert!(mesh.is_empty());
    }
}
