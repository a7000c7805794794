//! Map plugins drawing the overlays.
//!
//! Both overlays render through the walkers plugin hook: geographic
//! coordinates are projected to screen space each frame and drawn with the
//! egui painter. The earthquake plugin also owns click hit-testing and the
//! popup for the selected event.

use super::{Earthquake, EarthquakeLayer, FaultLineLayer, FaultLineStyle, StylePreset};
use super::MARKER_FILL_ALPHA;
use eframe::egui::{self, Color32, FontId, Painter, Pos2, Response, Stroke, Ui};
use walkers::{lon_lat, MapMemory, Plugin, Projector};

/// Markers with a non-positive computed radius are drawn at this size so
/// zero- and negative-magnitude events remain visible and clickable.
const MIN_MARKER_RADIUS: f32 = 1.5;

/// Extra slop around tiny markers for click hit-testing.
const HIT_SLOP: f32 = 3.0;

const POPUP_BACKGROUND: Color32 = Color32::from_rgb(40, 40, 55);
const POPUP_TITLE: Color32 = Color32::from_rgb(230, 230, 240);
const POPUP_DETAIL: Color32 = Color32::from_rgb(160, 160, 180);
const POPUP_PADDING: f32 = 8.0;

/// Draws earthquake circle markers sized by magnitude and colored by depth,
/// and the popup for the currently selected event.
pub struct EarthquakePlugin<'a> {
    pub layer: &'a EarthquakeLayer,
    pub preset: StylePreset,
    /// Index of the selected event, persisted across frames in app state.
    pub selected: &'a mut Option<usize>,
}

impl EarthquakePlugin<'_> {
    fn screen_radius(&self, quake: &Earthquake) -> f32 {
        (self.preset.marker_radius(quake.magnitude) as f32).max(MIN_MARKER_RADIUS)
    }

    /// Returns the event under the pointer, preferring the closest center.
    fn hit_test(&self, projector: &Projector, click: Pos2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;

        for (idx, quake) in self.layer.events.iter().enumerate() {
            let projected = projector.project(lon_lat(quake.position.x, quake.position.y));
            let center = egui::pos2(projected.x, projected.y);
            let distance = center.distance(click);

            if distance <= self.screen_radius(quake) + HIT_SLOP {
                match best {
                    Some((_, best_distance)) if best_distance <= distance => {}
                    _ => best = Some((idx, distance)),
                }
            }
        }

        best.map(|(idx, _)| idx)
    }
}

impl Plugin for EarthquakePlugin<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        if response.clicked() {
            if let Some(click) = response.interact_pointer_pos() {
                *self.selected = self.hit_test(projector, click);
            }
        }

        let painter = ui.painter();

        for quake in &self.layer.events {
            let projected = projector.project(lon_lat(quake.position.x, quake.position.y));
            let center = egui::pos2(projected.x, projected.y);
            let radius = self.screen_radius(quake);

            if !response.rect.expand(radius).contains(center) {
                continue;
            }

            let color = self.preset.depth_color(quake.depth_km);
            let fill =
                Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), MARKER_FILL_ALPHA);

            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, Stroke::new(1.0, color));
        }

        if let Some(quake) = self.selected.and_then(|idx| self.layer.events.get(idx)) {
            let projected = projector.project(lon_lat(quake.position.x, quake.position.y));
            let anchor = egui::pos2(projected.x, projected.y);
            draw_popup(painter, anchor, self.screen_radius(quake), quake);
        }
    }
}

/// Draws fault-line polylines with one static style.
pub struct FaultLinePlugin<'a> {
    pub layer: &'a FaultLineLayer,
    pub style: FaultLineStyle,
}

impl Plugin for FaultLinePlugin<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let stroke = Stroke::new(self.style.width, self.style.color);
        let visible = response.rect.expand(50.0);

        for line in &self.layer.lines {
            let screen_points: Vec<Pos2> = line
                .iter()
                .map(|c| {
                    let p = projector.project(lon_lat(c.x, c.y));
                    egui::pos2(p.x, p.y)
                })
                .collect();

            for window in screen_points.windows(2) {
                if let [p1, p2] = window {
                    if !visible.contains(*p1) && !visible.contains(*p2) {
                        continue;
                    }
                    // Skip sub-pixel segments
                    let dist_sq = (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2);
                    if dist_sq > 0.5 {
                        painter.line_segment([*p1, *p2], stroke);
                    }
                }
            }
        }
    }
}

/// Popup showing the place name and event time, anchored above the marker.
fn draw_popup(painter: &Painter, anchor: Pos2, marker_radius: f32, quake: &Earthquake) {
    let title = painter.layout_no_wrap(
        quake.place.clone(),
        FontId::proportional(13.0),
        POPUP_TITLE,
    );
    let time = painter.layout_no_wrap(
        format_event_time(quake.time_ms),
        FontId::proportional(11.0),
        POPUP_DETAIL,
    );
    let detail = painter.layout_no_wrap(
        format!("M {:.1}, depth {:.1} km", quake.magnitude, quake.depth_km),
        FontId::proportional(11.0),
        POPUP_DETAIL,
    );

    let width = title
        .size()
        .x
        .max(time.size().x)
        .max(detail.size().x)
        + 2.0 * POPUP_PADDING;
    let height =
        title.size().y + time.size().y + detail.size().y + 2.0 * POPUP_PADDING + 2.0 * 2.0;

    let rect = egui::Rect::from_min_size(
        egui::pos2(
            anchor.x - width / 2.0,
            anchor.y - marker_radius - height - 6.0,
        ),
        egui::vec2(width, height),
    );

    painter.rect_filled(rect, 4.0, POPUP_BACKGROUND);

    let mut cursor = rect.min + egui::vec2(POPUP_PADDING, POPUP_PADDING);
    let title_height = title.size().y;
    painter.galley(cursor, title, POPUP_TITLE);
    cursor.y += title_height + 2.0;
    let time_height = time.size().y;
    painter.galley(cursor, time, POPUP_DETAIL);
    cursor.y += time_height + 2.0;
    painter.galley(cursor, detail, POPUP_DETAIL);
}

/// Formats an epoch-millis event time for display.
fn format_event_time(time_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(time_ms) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} ms", time_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_event_time() {
        // 2014-01-01T23:51:36.020Z
        assert_eq!(
            format_event_time(1388620296020),
            "2014-01-01 23:51:36 UTC"
        );
    }

    #[test]
    fn test_format_event_time_out_of_range() {
        assert_eq!(format_event_time(i64::MAX), format!("{} ms", i64::MAX));
    }
}
