//! Navigation bar rendering for `PortfolioApp`.
//!
//! Draws the brand, the section links (inline or behind a hamburger) and the
//! "Let's talk" button. The bar turns solid once the page has scrolled past
//! the configured threshold.

use eframe::egui;
use showreel::data::PROFILE;
use showreel::view::Section;

use super::PortfolioApp;
use crate::ui;

/// Panel frame for the bar; transparent at the top of the page.
pub fn bar_frame(scrolled: bool) -> egui::Frame {
    if scrolled {
        egui::Frame::none()
            .fill(ui::BG.gamma_multiply(0.92))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(12)))
            .inner_margin(egui::Margin::symmetric(24.0, 12.0))
    } else {
        egui::Frame::none()
            .fill(ui::BG)
            .inner_margin(egui::Margin::symmetric(24.0, 24.0))
    }
}

impl PortfolioApp {
    /// Render the top navigation strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, _ctx: &egui::Context, overlay_nav: bool) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(PROFILE.brand)
                    .size(22.0)
                    .strong()
                    .color(ui::ACCENT),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if overlay_nav {
                    let icon = if self.view.is_nav_menu_open() { "\u{2715}" } else { "\u{2630}" };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(icon).size(20.0)).frame(false))
                        .clicked()
                    {
                        self.view.toggle_nav_menu();
                    }
                    return;
                }

                let talk = egui::Button::new(
                    egui::RichText::new("LET'S TALK")
                        .strong()
                        .color(ui::BG),
                )
                .fill(egui::Color32::WHITE)
                .rounding(16.0)
                .min_size(egui::vec2(110.0, 32.0));
                if ui.add(talk).clicked() {
                    self.view.navigate_to(Section::Contact);
                }

                ui.add_space(24.0);
                // right-to-left: add in reverse so they read left to right
                for section in Section::NAV_LINKS.iter().rev() {
                    let link = ui.add(
                        egui::Label::new(
                            egui::RichText::new(section.label().to_uppercase())
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if link.clicked() {
                        self.view.navigate_to(*section);
                    }
                    link.on_hover_cursor(egui::CursorIcon::PointingHand);
                    ui.add_space(16.0);
                }
            });
        });
    }
}
