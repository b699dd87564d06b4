//! egui helpers shared by every page section.
//!
//! Palette constants, the reveal wrapper that turns a `Reveal` into opacity
//! and offset, and small text utilities.

use eframe::egui;
use showreel::reveal::RevealRegistry;

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const BG: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
pub const BG_RAISED: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(192, 132, 252);
pub const ACCENT_STRONG: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const PINK: egui::Color32 = egui::Color32::from_rgb(236, 72, 153);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const FAINT: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const AVAILABLE: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);

// ─── Reveal wrapper ───────────────────────────────────────────────────────────

/// Frame-wide inputs to every reveal: the clock and what is on screen.
#[derive(Debug, Clone, Copy)]
pub struct RevealEnv {
    pub now: f64,
    pub viewport: egui::Rect,
}

/// Draw `add_contents` as a reveal region.
///
/// The contents lay out at their resting place from the first frame, so the
/// region never changes size. Before the first reveal what they paint is
/// transparent and shifted down by `REVEAL_OFFSET`; afterwards it eases into
/// place.
pub fn reveal<R>(
    ui: &mut egui::Ui,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    id: egui::Id,
    delay: f64,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let style = reveals.region(id, delay).style(env.now);
    let layer = ui.layer_id();
    let start = ui.ctx().graphics_mut(|g| g.entry(layer).next_idx());
    let inner = ui.scope(|ui| {
        ui.set_opacity(style.opacity);
        add_contents(ui)
    });
    if style.offset_y > 0.0 {
        let shift = egui::emath::TSTransform::from_translation(egui::vec2(0.0, style.offset_y));
        ui.ctx().graphics_mut(|g| {
            let shapes = g.entry(layer);
            let end = shapes.next_idx();
            shapes.transform_range(start, end, shift);
        });
    }
    reveals
        .region(id, delay)
        .observe(inner.response.rect, env.viewport, env.now);
    inner.inner
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// Section heading: a plain word followed by an accented word.
pub fn heading(ui: &mut egui::Ui, plain: &str, accent: &str, size: f32) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(plain).size(size).strong().color(egui::Color32::WHITE));
        ui.label(egui::RichText::new(accent).size(size).strong().color(ACCENT));
    });
}

/// Pill-shaped label used for badges and category tags.
pub fn pill(ui: &mut egui::Ui, text: &str, fg: egui::Color32, bg: egui::Color32) {
    egui::Frame::none()
        .fill(bg)
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).strong().color(fg));
        });
}

pub fn open_link(ctx: &egui::Context, url: &str) {
    log::info!("opening {url}");
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

#[cfg(test)]
mod tests {
    use super::*;

    use showreel::reveal::REVEAL_OFFSET;

    struct Frame {
        height: f32,
        slot: egui::Rect,
        painted_top: Option<f32>,
    }

    /// One frame with a single 10x30 block inside a reveal region.
    fn run_frame(ctx: &egui::Context, reveals: &mut RevealRegistry, now: f64) -> Frame {
        let mut height = 0.0;
        let mut slot = egui::Rect::NOTHING;
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                reveals.begin_frame();
                let env = RevealEnv {
                    now,
                    viewport: ui.clip_rect(),
                };
                let top = ui.cursor().min.y;
                slot = reveal(ui, reveals, env, egui::Id::new("block"), 0.0, |ui| {
                    let size = egui::vec2(10.0, 30.0);
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.painter().rect_filled(rect, 0.0, egui::Color32::RED);
                    rect
                });
                height = ui.cursor().min.y - top;
                reveals.end_frame();
            });
        });
        let painted_top = output.shapes.iter().find_map(|clipped| match &clipped.shape {
            egui::Shape::Rect(r) if (r.rect.size() - egui::vec2(10.0, 30.0)).length() < 1e-3 => {
                Some(r.rect.min.y)
            }
            _ => None,
        });
        Frame {
            height,
            slot,
            painted_top,
        }
    }

    #[test]
    fn region_takes_no_extra_layout_space() {
        let ctx = egui::Context::default();
        let mut reveals = RevealRegistry::new(0.1);
        let suppressed = run_frame(&ctx, &mut reveals, 0.0);
        let shown = run_frame(&ctx, &mut reveals, 10.0);
        assert!((suppressed.height - shown.height).abs() < 1e-3);
        assert!(shown.height < 30.0 + REVEAL_OFFSET - 1.0);
        assert!((suppressed.slot.min.y - shown.slot.min.y).abs() < 1e-3);
    }

    #[test]
    fn offset_moves_paint_not_layout() {
        let ctx = egui::Context::default();
        let mut reveals = RevealRegistry::new(0.1);
        run_frame(&ctx, &mut reveals, 0.0);

        // Halfway through: ease-out cubic at 0.5 leaves 1/8 of the offset.
        let mid = run_frame(&ctx, &mut reveals, 0.5);
        let top = mid.painted_top.unwrap();
        assert!((top - mid.slot.min.y - REVEAL_OFFSET / 8.0).abs() < 1e-3);

        let done = run_frame(&ctx, &mut reveals, 5.0);
        assert!((done.painted_top.unwrap() - done.slot.min.y).abs() < 1e-3);
    }

    #[test]
    fn truncate_short_is_unchanged() {
        assert_eq!(truncate_str("NGLS", 10), "NGLS");
    }

    #[test]
    fn truncate_long_adds_ellipsis() {
        assert_eq!(truncate_str("Playtika Caesar Slots VIP", 10), "Playtik...");
    }
}
