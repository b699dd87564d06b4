//! In-page navigation for `PortfolioApp`.
//!
//! Anchor jumps are requested through `ViewState::navigate_to`, handed to the
//! frame as `jump`, and applied by `anchor` when the matching section is laid
//! out. The overlay menu is the narrow-window alternative to inline links.

use eframe::egui;
use showreel::view::Section;

use super::PortfolioApp;
use crate::ui;

/// Lay out one section and scroll it to the top if it is the jump target.
pub fn anchor<R>(
    ui: &mut egui::Ui,
    jump: Option<Section>,
    section: Section,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let inner = ui.push_id(section.anchor(), add_contents);
    if jump == Some(section) {
        log::debug!("jump to #{}", section.anchor());
        ui.scroll_to_rect(inner.response.rect, Some(egui::Align::TOP));
    }
    inner.inner
}

impl PortfolioApp {
    /// Full-screen menu shown while the hamburger is open.
    pub fn draw_nav_menu(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("nav_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, 0.0, ui::BG.gamma_multiply(0.97));

                ui.allocate_ui_at_rect(rect.shrink(32.0), |ui| {
                    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                        ui.add_space(72.0);
                        let links = Section::NAV_LINKS
                            .iter()
                            .chain(std::iter::once(&Section::Contact));
                        for section in links {
                            let link = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(section.label().to_uppercase())
                                        .size(28.0)
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if link.clicked() {
                                self.view.navigate_to(*section);
                            }
                            ui.add_space(24.0);
                        }
                        ui.add_space(24.0);
                        let icon = egui::RichText::new("\u{2715}").size(24.0);
                        let close = egui::Button::new(icon).frame(false);
                        if ui.add(close).clicked() {
                            self.view.close_nav_menu();
                        }
                    });
                });
            });
    }
}
