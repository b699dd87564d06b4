//! Video modal for `PortfolioApp`.
//!
//! A dimmed backdrop covers the page; the player frame sits centred on top.
//! Clicking the backdrop or the close button are the only ways out.

use eframe::egui;
use egui::{vec2, RichText};

use showreel::net::embed::{thumbnail_url, EmbedSession};

use super::PortfolioApp;
use crate::ui;

/// Player frame bounds, as a fraction of the screen.
const MAX_FRAME_WIDTH: f32 = 0.9;
const MAX_FRAME_HEIGHT: f32 = 0.8;

/// Largest size with `aspect` (width / height) that fits inside `bounds`.
fn fit_aspect(aspect: f32, bounds: egui::Vec2) -> egui::Vec2 {
    let width = bounds.x.min(bounds.y * aspect);
    vec2(width, width / aspect)
}

impl PortfolioApp {
    pub fn draw_video_modal(&mut self, ctx: &egui::Context, session: &EmbedSession) {
        let screen = ctx.screen_rect();

        let backdrop = egui::Area::new(egui::Id::new("video_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, 0.0, egui::Color32::from_black_alpha(242));
                response
            })
            .inner;

        let bounds = vec2(screen.width() * MAX_FRAME_WIDTH, screen.height() * MAX_FRAME_HEIGHT);
        let frame_size = fit_aspect(session.aspect_ratio(), bounds);

        let mut close = false;
        egui::Area::new(egui::Id::new("video_player"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_width(frame_size.x);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let icon = RichText::new("\u{2715}")
                        .size(22.0)
                        .color(egui::Color32::WHITE);
                    let button = egui::Button::new(icon).frame(false);
                    if ui.add(button).clicked() {
                        close = true;
                    }
                });

                let (rect, response) = ui.allocate_exact_size(frame_size, egui::Sense::click());
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 16.0, egui::Color32::BLACK);
                let texture = thumbnail_url(&session.video_id)
                    .ok()
                    .and_then(|url| self.thumbnails.get(url.as_str()));
                if let Some(tex) = texture {
                    let size = tex.size_vec2();
                    let scale = (rect.width() / size.x).min(rect.height() / size.y);
                    let image = egui::Rect::from_center_size(rect.center(), size * scale);
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(tex.id(), image, uv, egui::Color32::from_white_alpha(160));
                }
                painter.circle_filled(rect.center(), 36.0, ui::ACCENT_STRONG);
                painter.text(
                    rect.center() + vec2(3.0, 0.0),
                    egui::Align2::CENTER_CENTER,
                    "\u{25B6}",
                    egui::FontId::proportional(28.0),
                    egui::Color32::WHITE,
                );
                let play = response.clicked();
                response
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .on_hover_text("Play on YouTube");
                if play {
                    ui::open_link(ctx, session.url.as_str());
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new(&session.title)
                        .size(18.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
            });

        if close || backdrop.clicked() {
            self.view.close_modal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_fills_width() {
        let size = fit_aspect(16.0 / 9.0, vec2(1600.0, 1600.0));
        assert_eq!(size.x, 1600.0);
        assert!((size.y - 900.0).abs() < 1e-3);
    }

    #[test]
    fn portrait_limited_by_height() {
        let size = fit_aspect(9.0 / 16.0, vec2(1600.0, 800.0));
        assert!((size.y - 800.0).abs() < 1e-3);
        assert!((size.x - 450.0).abs() < 1e-3);
    }
}
