//! Page sections for `PortfolioApp`.
//!
//! Every section is a plain function of the view state and the static
//! tables; each block of content is wrapped in `ui::reveal` so it fades in
//! the first time it scrolls into view.

use std::collections::HashMap;

use chrono::Datelike;
use eframe::egui;
use egui::{pos2, vec2, Id, Rect, RichText};

use showreel::data::{
    Category, Project, Skill, COMPANIES, CONTACT, EXPERIENCES, PROFILE, PROJECTS, SKILLS,
};
use showreel::net::embed::thumbnail_url;
use showreel::reveal::{stagger, RevealRegistry};
use showreel::view::{Section, ViewState};

use super::navigation::anchor;
use super::PortfolioApp;
use crate::ui::{self, RevealEnv};

const MAX_CONTENT_WIDTH: f32 = 1100.0;
const SECTION_GAP: f32 = 96.0;
/// Seconds for the company strip to scroll by its own width.
const MARQUEE_PERIOD: f64 = 40.0;

type Thumbnails = HashMap<String, egui::TextureHandle>;

fn grid_columns(width: f32) -> usize {
    if width >= 1024.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

impl PortfolioApp {
    /// Draw all sections into the page scroll area.
    pub fn draw_content(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        env: RevealEnv,
        jump: Option<Section>,
    ) {
        let Self {
            config,
            view,
            reveals,
            thumbnails,
            cv_url,
            portrait_url,
            ..
        } = self;
        let thumbnails: &Thumbnails = thumbnails;
        let assets = HeroAssets {
            cv_url: cv_url.as_deref(),
            photo: portrait_url.as_deref().and_then(|url| thumbnails.get(url)),
        };
        let step = config.stagger;
        let margin = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(24.0);

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(margin, 0.0))
            .show(ui, |ui| {
                anchor(ui, jump, Section::About, |ui| {
                    hero(ui, ctx, reveals, env, view, assets, step.hero)
                });
                ui.add_space(SECTION_GAP);
                anchor(ui, jump, Section::Portfolio, |ui| {
                    gallery(ui, reveals, env, view, thumbnails, step.gallery)
                });
                ui.add_space(SECTION_GAP);
                skills(ui, reveals, env, step.skills);
                ui.add_space(SECTION_GAP);
                anchor(ui, jump, Section::Experience, |ui| {
                    experience(ui, reveals, env, view, step.experience)
                });
                ui.add_space(SECTION_GAP / 1.5);
                companies(ui, env);
                ui.add_space(SECTION_GAP / 1.5);
                anchor(ui, jump, Section::Contact, |ui| contact(ui, ctx, reveals, env));
                ui.add_space(48.0);
            });
    }
}

// ─── Hero ─────────────────────────────────────────────────────────────────────

/// Deployed assets the hero links to or shows.
#[derive(Clone, Copy)]
struct HeroAssets<'a> {
    cv_url: Option<&'a str>,
    photo: Option<&'a egui::TextureHandle>,
}

fn hero(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    view: &mut ViewState<'static>,
    assets: HeroAssets<'_>,
    step: f64,
) {
    ui.add_space(48.0);
    if ui.available_width() >= 900.0 {
        ui.columns(2, |cols| {
            hero_text(&mut cols[0], ctx, reveals, env, view, assets.cv_url, step);
            portrait(&mut cols[1], reveals, env, assets.photo, step);
        });
    } else {
        portrait(ui, reveals, env, assets.photo, step);
        hero_text(ui, ctx, reveals, env, view, assets.cv_url, step);
    }
}

fn hero_text(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    view: &mut ViewState<'static>,
    cv_url: Option<&str>,
    step: f64,
) {
    ui::reveal(ui, reveals, env, Id::new("hero-badge"), stagger(1, step), |ui| {
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(vec2(8.0, 8.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, ui::AVAILABLE);
            ui::pill(ui, &PROFILE.availability.to_uppercase(), ui::ACCENT, ui::BG_CARD);
        });
    });

    ui::reveal(ui, reveals, env, Id::new("hero-headline"), stagger(2, step), |ui| {
        for (i, line) in PROFILE.headline.iter().enumerate() {
            let color = if i == PROFILE.accent_line {
                ui::ACCENT
            } else {
                egui::Color32::WHITE
            };
            ui.label(RichText::new(*line).size(56.0).strong().color(color));
        }
    });

    ui::reveal(ui, reveals, env, Id::new("hero-intro"), stagger(3, step), |ui| {
        ui.label(RichText::new(PROFILE.intro).size(19.0).color(ui::MUTED));
    });

    ui::reveal(ui, reveals, env, Id::new("hero-actions"), stagger(4, step), |ui| {
        ui.horizontal_wrapped(|ui| {
            let projects = egui::Button::new(RichText::new("VIEW PROJECTS  \u{203A}").strong())
                .fill(ui::ACCENT_STRONG)
                .min_size(vec2(180.0, 48.0));
            if ui.add(projects).clicked() {
                view.navigate_to(Section::Portfolio);
            }
            ui.add_space(12.0);
            let cv = egui::Button::new(RichText::new("DOWNLOAD CV  \u{2B07}").strong())
                .stroke(egui::Stroke::new(1.0, ui::FAINT))
                .fill(egui::Color32::TRANSPARENT)
                .min_size(vec2(180.0, 48.0));
            let response = ui.add_enabled(cv_url.is_some(), cv);
            if response.clicked() {
                if let Some(url) = cv_url {
                    ui::open_link(ctx, url);
                }
            }
        });
    });
}

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).collect()
}

/// Round portrait with a gradient ring. Shows initials until the photo loads,
/// and for good if it never does.
fn portrait(
    ui: &mut egui::Ui,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    photo: Option<&egui::TextureHandle>,
    step: f64,
) {
    ui::reveal(ui, reveals, env, Id::new("hero-portrait"), stagger(3, step), |ui| {
        ui.vertical_centered(|ui| {
            let side = ui.available_width().min(420.0);
            let (rect, _) = ui.allocate_exact_size(vec2(side, side), egui::Sense::hover());
            let painter = ui.painter();
            let r = side / 2.0 - 8.0;
            painter.circle_filled(rect.center(), r + 8.0, ui::ACCENT_STRONG.gamma_multiply(0.6));
            painter.circle_filled(rect.center(), r + 4.0, ui::PINK.gamma_multiply(0.5));
            painter.circle_filled(rect.center(), r, ui::BG_RAISED);

            let face = Rect::from_center_size(rect.center(), vec2(2.0 * r, 2.0 * r));
            match photo {
                Some(tex) => {
                    egui::Image::new(egui::load::SizedTexture::from_handle(tex))
                        .uv(cover_uv(tex.size_vec2(), face.size()))
                        .rounding(r)
                        .paint_at(ui, face);
                }
                None => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        initials(CONTACT.owner),
                        egui::FontId::proportional(r * 0.6),
                        egui::Color32::WHITE,
                    );
                }
            }
        });
    });
}

// ─── Gallery ──────────────────────────────────────────────────────────────────

fn gallery(
    ui: &mut egui::Ui,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    view: &mut ViewState<'static>,
    thumbnails: &Thumbnails,
    step: f64,
) {
    ui::reveal(ui, reveals, env, Id::new("gallery-head"), 0.0, |ui| {
        ui.vertical_centered(|ui| {
            ui::heading(ui, "SELECTED", "WORKS", 44.0);
            ui.add_space(24.0);
            ui.horizontal_wrapped(|ui| {
                for category in Category::ALL {
                    let active = view.active_category() == category;
                    let text = RichText::new(category.label().to_uppercase()).strong().size(14.0);
                    if ui.add(egui::SelectableLabel::new(active, text)).clicked() {
                        view.set_active_category(category);
                    }
                    ui.add_space(8.0);
                }
            });
        });
    });
    ui.add_space(32.0);

    let projects = view.filtered_projects(PROJECTS);
    let cols = grid_columns(ui.available_width());
    for (row_idx, row) in projects.chunks(cols).enumerate() {
        ui.columns(cols, |columns| {
            for (j, project) in row.iter().enumerate() {
                let index = row_idx * cols + j;
                let id = Id::new(("card", project.video_id));
                let delay = stagger(index, step);
                let clicked = ui::reveal(&mut columns[j], reveals, env, id, delay, |ui| {
                    card(ui, project, thumbnails)
                });
                if clicked {
                    view.select_project(Some(*project));
                }
            }
        });
        ui.add_space(8.0);
    }
}

/// UV rect that crops `tex` to fill `target` without distortion.
fn cover_uv(tex: egui::Vec2, target: egui::Vec2) -> Rect {
    let scale = (target.x / tex.x).max(target.y / tex.y);
    let visible = target / scale;
    let min = vec2((tex.x - visible.x) / 2.0 / tex.x, (tex.y - visible.y) / 2.0 / tex.y);
    Rect::from_min_max(pos2(min.x, min.y), pos2(1.0 - min.x, 1.0 - min.y))
}

/// Gallery card. Returns `true` when clicked.
fn card(ui: &mut egui::Ui, project: &Project, thumbnails: &Thumbnails) -> bool {
    let width = ui.available_width();
    let image_h = width * 9.0 / 16.0;
    let (rect, response) =
        ui.allocate_exact_size(vec2(width, image_h + 56.0), egui::Sense::click());
    let hovered = response.hovered();
    let clicked = response.clicked();
    response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 12.0, ui::BG);
    let image_rect = Rect::from_min_size(rect.min, vec2(width, image_h));

    let texture = thumbnail_url(project.video_id)
        .ok()
        .and_then(|url| thumbnails.get(url.as_str()));
    match texture {
        Some(tex) if project.is_vertical => {
            painter.rect_filled(image_rect, 0.0, egui::Color32::BLACK);
            let size = tex.size_vec2();
            let scale = (image_rect.width() / size.x).min(image_rect.height() / size.y);
            let fitted = Rect::from_center_size(image_rect.center(), size * scale);
            let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(tex.id(), fitted, full, egui::Color32::WHITE);
        }
        Some(tex) => {
            let uv = cover_uv(tex.size_vec2(), image_rect.size());
            painter.image(tex.id(), image_rect, uv, egui::Color32::WHITE);
        }
        None => {
            painter.rect_filled(image_rect, 0.0, ui::BG_CARD);
            painter.text(
                image_rect.center(),
                egui::Align2::CENTER_CENTER,
                "\u{25B6}",
                egui::FontId::proportional(28.0),
                ui::FAINT,
            );
        }
    }

    let mut x = image_rect.min.x + 12.0;
    for category in project.categories {
        let galley = painter.layout_no_wrap(
            category.label().to_uppercase(),
            egui::FontId::proportional(9.0),
            egui::Color32::WHITE,
        );
        let badge = Rect::from_min_size(
            pos2(x, image_rect.min.y + 12.0),
            galley.size() + vec2(12.0, 6.0),
        );
        painter.rect_filled(badge, 4.0, egui::Color32::from_black_alpha(160));
        x = badge.max.x + 6.0;
        painter.galley(badge.min + vec2(6.0, 3.0), galley, egui::Color32::WHITE);
    }

    if hovered {
        painter.rect_filled(image_rect, 0.0, egui::Color32::from_black_alpha(100));
        painter.circle_filled(image_rect.center(), 28.0, egui::Color32::WHITE);
        painter.text(
            image_rect.center() + vec2(2.0, 0.0),
            egui::Align2::CENTER_CENTER,
            "\u{25B6}",
            egui::FontId::proportional(20.0),
            egui::Color32::BLACK,
        );
    }

    let title_color = if hovered { ui::ACCENT } else { egui::Color32::WHITE };
    let max_chars = ((width - 32.0) / 9.0).max(8.0) as usize;
    painter.text(
        pos2(rect.min.x + 16.0, image_rect.max.y + 28.0),
        egui::Align2::LEFT_CENTER,
        ui::truncate_str(project.title, max_chars),
        egui::FontId::proportional(17.0),
        title_color,
    );

    clicked
}

// ─── Expertise & tools ────────────────────────────────────────────────────────

fn skills(ui: &mut egui::Ui, reveals: &mut RevealRegistry, env: RevealEnv, step: f64) {
    ui::reveal(ui, reveals, env, Id::new("skills-head"), 0.0, |ui| {
        ui.vertical_centered(|ui| ui::heading(ui, "EXPERTISE &", "TOOLS", 36.0));
    });
    ui.add_space(24.0);

    let cols = grid_columns(ui.available_width());
    for (row_idx, row) in SKILLS.chunks(cols).enumerate() {
        ui.columns(cols, |columns| {
            for (j, skill) in row.iter().enumerate() {
                let index = row_idx * cols + j;
                ui::reveal(
                    &mut columns[j],
                    reveals,
                    env,
                    Id::new(("skill", index)),
                    stagger(index, step),
                    |ui| skill_bar(ui, skill),
                );
            }
        });
    }
}

fn skill_bar(ui: &mut egui::Ui, skill: &Skill) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(skill.name.to_uppercase())
                .size(17.0)
                .strong()
                .color(egui::Color32::WHITE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(skill.level.label().to_uppercase())
                    .size(10.0)
                    .strong()
                    .color(ui::FAINT),
            );
        });
    });
    let (track, _) = ui.allocate_exact_size(vec2(ui.available_width(), 4.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(track, 2.0, egui::Color32::from_white_alpha(12));
    let filled = vec2(track.width() * skill.fraction(), track.height());
    let fill = Rect::from_min_size(track.min, filled);
    painter.rect_filled(fill, 2.0, ui::ACCENT);
}

// ─── Career accordion ─────────────────────────────────────────────────────────

fn experience(
    ui: &mut egui::Ui,
    reveals: &mut RevealRegistry,
    env: RevealEnv,
    view: &mut ViewState<'static>,
    step: f64,
) {
    ui::reveal(ui, reveals, env, Id::new("experience-head"), 0.0, |ui| {
        ui::heading(ui, "CAREER", "JOURNEY", 44.0);
        let blurb = "A professional timeline of my experience in motion graphics \
                     and creative production.";
        ui.label(RichText::new(blurb).size(17.0).color(ui::MUTED));
    });
    ui.add_space(24.0);

    let last = EXPERIENCES.len().saturating_sub(1);
    for (index, entry) in EXPERIENCES.iter().enumerate() {
        let id = Id::new(("experience", index));
        ui::reveal(ui, reveals, env, id, stagger(index, step), |ui| {
            let open = view.is_experience_open(index);
            let header = ui
                .horizontal(|ui| {
                    let (sign, color) = if open {
                        ("\u{2212}", ui::ACCENT)
                    } else {
                        ("+", ui::FAINT)
                    };
                    ui.label(RichText::new(sign).size(22.0).strong().color(color));
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                RichText::new(entry.role.to_uppercase())
                                    .size(24.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                RichText::new(entry.period)
                                    .size(18.0)
                                    .strong()
                                    .color(ui::ACCENT),
                            );
                        });
                        let company = entry.company.to_uppercase();
                        let place = format!("{company}  \u{2022}  {}", entry.location);
                        ui.label(RichText::new(place).color(ui::MUTED));
                    });
                })
                .response;
            let toggle_id = Id::new(("experience-toggle", index));
            let header = ui.interact(header.rect, toggle_id, egui::Sense::click());
            if header.clicked() {
                view.toggle_experience(index);
            }
            header.on_hover_cursor(egui::CursorIcon::PointingHand);

            let t = ui
                .ctx()
                .animate_bool(Id::new(("experience-open", index)), view.is_experience_open(index));
            if t > 0.0 {
                ui.scope(|ui| {
                    ui.set_opacity(t);
                    ui.add_space(16.0 * t);
                    for bullet in entry.bullets {
                        ui.horizontal_wrapped(|ui| {
                            ui.add_space(44.0);
                            ui.label(RichText::new("\u{2714}").color(ui::ACCENT_STRONG));
                            ui.label(RichText::new(*bullet).size(15.0).color(ui::MUTED));
                        });
                        ui.add_space(6.0);
                    }
                });
            }
            ui.add_space(16.0);
            if index != last {
                ui.separator();
            }
        });
    }
}

// ─── Companies marquee ────────────────────────────────────────────────────────

fn companies(ui: &mut egui::Ui, env: RevealEnv) {
    let text = COMPANIES
        .iter()
        .map(|c| c.to_uppercase())
        .collect::<Vec<_>>()
        .join("      ");
    let color = egui::Color32::from_white_alpha(26);
    let galley = ui
        .painter()
        .layout_no_wrap(format!("{text}      "), egui::FontId::proportional(26.0), color);
    let strip = galley.size().x.max(1.0);

    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 80.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let shift = ((env.now / MARQUEE_PERIOD).fract() as f32) * strip;
    let y = rect.center().y - galley.size().y / 2.0;
    let mut x = rect.min.x - shift;
    while x < rect.max.x {
        painter.galley(pos2(x, y), galley.clone(), color);
        x += strip;
    }
}

// ─── Contact ──────────────────────────────────────────────────────────────────

fn contact(ui: &mut egui::Ui, ctx: &egui::Context, reveals: &mut RevealRegistry, env: RevealEnv) {
    ui::reveal(ui, reveals, env, Id::new("contact"), 0.0, |ui| {
        egui::Frame::none()
            .fill(egui::Color32::from_white_alpha(8))
            .rounding(32.0)
            .inner_margin(egui::Margin::same(48.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui::heading(ui, "READY TO", "CREATE?", 44.0);
                    ui.add_space(16.0);
                    let phone = format!("\u{260E}  {}", CONTACT.phone);
                    let location = format!("\u{1F4CD}  {}", CONTACT.location);
                    ui.label(RichText::new(phone).strong().color(ui::MUTED));
                    ui.label(RichText::new(location).strong().color(ui::MUTED));
                    ui.add_space(24.0);
                    ui.horizontal_wrapped(|ui| {
                        let label = RichText::new("\u{2709}  SEND EMAIL").strong().color(ui::BG);
                        let email = egui::Button::new(label)
                            .fill(egui::Color32::WHITE)
                            .min_size(vec2(180.0, 48.0));
                        if ui.add(email).clicked() {
                            ui::open_link(ctx, &CONTACT.mailto());
                        }
                        ui.add_space(12.0);
                        let linkedin = egui::Button::new(RichText::new("LINKEDIN").strong())
                            .fill(ui::BG_CARD)
                            .min_size(vec2(180.0, 48.0));
                        if ui.add(linkedin).clicked() {
                            ui::open_link(ctx, CONTACT.linkedin);
                        }
                    });
                });
            });
    });

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        let year = chrono::Local::now().year();
        let line = format!("\u{A9} {year} {}  \u{2022}  {}", CONTACT.owner, CONTACT.made_in);
        ui.label(
            RichText::new(line.to_uppercase())
                .size(11.0)
                .strong()
                .color(ui::FAINT),
        );
    });
}
