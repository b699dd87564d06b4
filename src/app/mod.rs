//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct and the per-frame driver.
//! Drawing is split across the sibling sub-modules:
//!
//! - `toolbar`: navigation bar (inline links or hamburger)
//! - `navigation`: anchor jumps and the overlay menu
//! - `content`: page sections inside the scroll area
//! - `modal`: the video overlay

pub mod content;
pub mod modal;
pub mod navigation;
pub mod toolbar;

use std::collections::HashMap;

use eframe::egui;

use showreel::assets::absolute_asset_url;
use showreel::config::PageConfig;
use showreel::data::{EXPERIENCES, PROFILE};
use showreel::net::embed::EmbedSlot;
use showreel::reveal::RevealRegistry;
use showreel::view::ViewState;

use crate::ui::{self, RevealEnv};

pub struct PortfolioApp {
    pub config: PageConfig,
    pub view: ViewState<'static>,
    pub reveals: RevealRegistry,
    pub embed: EmbedSlot,
    /// Absolute CV link, if the site URL resolves.
    pub cv_url: Option<String>,
    /// Absolute hero portrait URL; also the key of its texture.
    pub portrait_url: Option<String>,
    /// Uploaded thumbnails and the portrait, keyed by image URL.
    pub thumbnails: HashMap<String, egui::TextureHandle>,
    #[cfg(feature = "thumbnails")]
    pub image_loader: showreel::net::image::ImageLoader,
}

impl PortfolioApp {
    pub fn new(config: PageConfig) -> Self {
        let cv_url = asset_link(&config, PROFILE.cv_file);
        let portrait_url = asset_link(&config, PROFILE.portrait_file);

        Self {
            view: ViewState::new(&config, EXPERIENCES.len()),
            reveals: RevealRegistry::new(config.reveal_threshold),
            embed: EmbedSlot::new(),
            #[cfg(feature = "thumbnails")]
            image_loader: start_image_loader(&preload_urls(portrait_url.as_deref())),
            cv_url,
            portrait_url,
            thumbnails: HashMap::new(),
            config,
        }
    }

    /// Upload finished downloads as textures.
    #[cfg(feature = "thumbnails")]
    fn upload_thumbnails(&mut self, ctx: &egui::Context) {
        if self.image_loader.poll() == 0 {
            return;
        }
        for url in self.image_loader.loaded_urls() {
            if let Some(data) = self.image_loader.take(&url) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let tex = ctx.load_texture(
                    format!("thumb_{}", url),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                self.thumbnails.insert(url, tex);
            }
        }
    }

    #[cfg(not(feature = "thumbnails"))]
    fn upload_thumbnails(&mut self, _ctx: &egui::Context) {}
}

/// Absolute URL of a deployed asset, or `None` (logged) if it cannot resolve.
fn asset_link(config: &PageConfig, file: &str) -> Option<String> {
    match absolute_asset_url(&config.site_url, &config.repo_name, file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("{file} disabled: {e}");
            None
        }
    }
}

/// Every image the page shows: the portrait first, then gallery thumbnails.
#[cfg(feature = "thumbnails")]
fn preload_urls(portrait: Option<&str>) -> Vec<String> {
    let thumbnails = showreel::data::PROJECTS
        .iter()
        .filter_map(|p| showreel::net::embed::thumbnail_url(p.video_id).ok())
        .map(String::from);
    portrait.map(str::to_string).into_iter().chain(thumbnails).collect()
}

/// Queue `urls`; they arrive over the first few frames.
#[cfg(feature = "thumbnails")]
fn start_image_loader(urls: &[String]) -> showreel::net::image::ImageLoader {
    let mut loader = showreel::net::image::ImageLoader::new();
    for url in urls {
        loader.request(url);
    }
    loader
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.upload_thumbnails(ctx);

        let now = ctx.input(|i| i.time);
        let overlay_nav = self
            .view
            .sync_nav_layout(&self.config, ctx.screen_rect().width());
        let jump = self.view.take_pending_anchor();

        egui::TopBottomPanel::top("nav")
            .frame(toolbar::bar_frame(self.view.is_past_scroll_threshold()))
            .show(ctx, |ui| {
                self.draw_toolbar(ui, ctx, overlay_nav);
            });

        self.reveals.begin_frame();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::BG))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .enable_scrolling(!self.view.scroll_locked())
                    .show(ui, |ui| {
                        let env = RevealEnv {
                            now,
                            viewport: ui.clip_rect(),
                        };
                        self.draw_content(ui, ctx, env, jump);
                    });
                self.view
                    .update_scroll_state(output.state.offset.y, self.config.scroll_threshold);
            });
        self.reveals.end_frame();

        if overlay_nav && self.view.is_nav_menu_open() {
            self.draw_nav_menu(ctx);
        }

        if let Some(session) = self.embed.sync(self.view.selected_project()) {
            let session = session.clone();
            self.draw_video_modal(ctx, &session);
        }

        if self.reveals.any_animating(now) || self.view.pending_anchor().is_some() {
            ctx.request_repaint();
        } else if !self.view.overlay_open() {
            // Companies marquee keeps moving while the page is visible.
            ctx.request_repaint_after(std::time::Duration::from_millis(33));
        }
    }
}
