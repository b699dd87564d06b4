//! Ephemeral page state and the values derived from it.
//!
//! `ViewState` is the only place UI state changes. Every transition is a
//! synchronous, total function of the current state; the renderer reads the
//! state back each frame.

pub mod scroll_lock;

use crate::config::PageConfig;
use crate::data::{Category, Project};

pub use scroll_lock::{LockChange, ScrollLock};

/// In-page anchor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Portfolio,
    Experience,
    Contact,
}

impl Section {
    /// Links shown in the navigation bar, in order. Contact has its own button.
    pub const NAV_LINKS: [Section; 3] = [Section::About, Section::Portfolio, Section::Experience];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// Projects visible under `active`, in their original order.
///
/// The wildcard returns every project; any other category returns exactly the
/// projects whose category set contains it.
pub fn derive_filtered_projects(all: &[Project], active: Category) -> Vec<&Project> {
    if active.is_wildcard() {
        return all.iter().collect();
    }
    all.iter().filter(|p| p.has_category(active)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<'a> {
    active_category: Category,
    selected_project: Option<&'a Project>,
    open_experience: Option<usize>,
    experience_len: usize,
    past_scroll_threshold: bool,
    nav_menu_open: bool,
    pending_anchor: Option<Section>,
    scroll_lock: ScrollLock,
}

impl<'a> ViewState<'a> {
    /// Initial state for a timeline of `experience_len` entries.
    pub fn new(config: &PageConfig, experience_len: usize) -> Self {
        let open_experience = config
            .default_open_experience
            .filter(|&i| i < experience_len);
        Self {
            active_category: config.default_category,
            selected_project: None,
            open_experience,
            experience_len,
            past_scroll_threshold: false,
            nav_menu_open: false,
            pending_anchor: None,
            scroll_lock: ScrollLock::new(),
        }
    }

    // ─── Gallery filter ──────────────────────────────────────────────────

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn set_active_category(&mut self, category: Category) {
        if self.active_category != category {
            log::debug!("filter: {} -> {}", self.active_category, category);
        }
        self.active_category = category;
    }

    pub fn filtered_projects<'p>(&self, all: &'p [Project]) -> Vec<&'p Project> {
        derive_filtered_projects(all, self.active_category)
    }

    // ─── Video modal ─────────────────────────────────────────────────────

    pub fn selected_project(&self) -> Option<&'a Project> {
        self.selected_project
    }

    /// Open the modal for `project`, or close it with `None`.
    ///
    /// Selecting a different project while open replaces the selection.
    pub fn select_project(&mut self, project: Option<&'a Project>) {
        match project {
            Some(p) => log::info!("modal open: {} ({})", p.title, p.video_id),
            None if self.selected_project.is_some() => log::info!("modal closed"),
            None => {}
        }
        self.selected_project = project;
        self.sync_scroll_lock();
    }

    pub fn close_modal(&mut self) {
        self.select_project(None);
    }

    // ─── Career accordion ────────────────────────────────────────────────

    pub fn open_experience(&self) -> Option<usize> {
        self.open_experience
    }

    pub fn is_experience_open(&self, index: usize) -> bool {
        self.open_experience() == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it and collapse the rest.
    pub fn toggle_experience(&mut self, index: usize) {
        debug_assert!(index < self.experience_len, "experience index out of range");
        if index >= self.experience_len {
            log::warn!("ignoring toggle of experience {index}");
            return;
        }
        self.open_experience = if self.open_experience == Some(index) {
            None
        } else {
            Some(index)
        };
        log::debug!("accordion: open = {:?}", self.open_experience);
    }

    // ─── Scroll ──────────────────────────────────────────────────────────

    pub fn is_past_scroll_threshold(&self) -> bool {
        self.past_scroll_threshold
    }

    /// Recompute the threshold flag. Strictly greater-than; not sticky.
    pub fn update_scroll_state(&mut self, offset: f32, threshold: f32) {
        self.past_scroll_threshold = offset > threshold;
    }

    // ─── Navigation ──────────────────────────────────────────────────────

    pub fn is_nav_menu_open(&self) -> bool {
        self.nav_menu_open
    }

    pub fn toggle_nav_menu(&mut self) {
        self.nav_menu_open = !self.nav_menu_open;
        self.sync_scroll_lock();
    }

    pub fn close_nav_menu(&mut self) {
        self.nav_menu_open = false;
        self.sync_scroll_lock();
    }

    /// Match the menu to the window: returns whether the overlay layout is in
    /// use at `width`, closing an open menu when it is not.
    pub fn sync_nav_layout(&mut self, config: &PageConfig, width: f32) -> bool {
        let overlay = config.nav_uses_overlay(width);
        if !overlay && self.nav_menu_open {
            log::debug!("nav menu closed: {width} is past the breakpoint");
            self.close_nav_menu();
        }
        overlay
    }

    /// Request a jump to `section`. Closes the menu before anything scrolls.
    pub fn navigate_to(&mut self, section: Section) {
        self.close_nav_menu();
        self.pending_anchor = Some(section);
    }

    pub fn pending_anchor(&self) -> Option<Section> {
        self.pending_anchor
    }

    /// The requested jump, handed out once.
    pub fn take_pending_anchor(&mut self) -> Option<Section> {
        self.pending_anchor.take()
    }

    // ─── Overlays ────────────────────────────────────────────────────────

    pub fn overlay_open(&self) -> bool {
        self.selected_project.is_some() || self.nav_menu_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    fn sync_scroll_lock(&mut self) {
        self.scroll_lock
            .reconcile(self.selected_project.is_some(), self.nav_menu_open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category::{Ads, Gaming};
    use crate::data::{EXPERIENCES, PROJECTS};

    static SAMPLE: [Project; 3] = [
        Project { title: "p1", video_id: "p1", is_vertical: false, categories: &[Gaming] },
        Project { title: "p2", video_id: "p2", is_vertical: false, categories: &[Ads] },
        Project { title: "p3", video_id: "p3", is_vertical: true, categories: &[Gaming, Ads] },
    ];

    fn ids(list: &[&Project]) -> Vec<&'static str> {
        list.iter().map(|p| p.video_id).collect()
    }

    fn state() -> ViewState<'static> {
        ViewState::new(&PageConfig::default(), EXPERIENCES.len())
    }

    #[test]
    fn filter_by_category_keeps_order() {
        assert_eq!(ids(&derive_filtered_projects(&SAMPLE, Gaming)), ["p1", "p3"]);
        assert_eq!(ids(&derive_filtered_projects(&SAMPLE, Ads)), ["p2", "p3"]);
    }

    #[test]
    fn wildcard_returns_everything_once() {
        assert_eq!(
            ids(&derive_filtered_projects(&SAMPLE, Category::All)),
            ["p1", "p2", "p3"]
        );
    }

    #[test]
    fn filter_membership_matches_categories() {
        for c in Category::ALL.iter().copied().filter(|c| !c.is_wildcard()) {
            let result = derive_filtered_projects(PROJECTS, c);
            for p in PROJECTS {
                let present = result.iter().any(|r| r.video_id == p.video_id);
                assert_eq!(present, p.has_category(c), "{} under {}", p.title, c);
            }
            let mut seen = ids(&result);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), result.len());
        }
        assert_eq!(derive_filtered_projects(PROJECTS, Category::All).len(), PROJECTS.len());
    }

    #[test]
    fn set_category_is_idempotent() {
        let mut once = state();
        once.set_active_category(Ads);
        let mut twice = state();
        twice.set_active_category(Ads);
        twice.set_active_category(Ads);
        assert_eq!(ids(&once.filtered_projects(&SAMPLE)), ids(&twice.filtered_projects(&SAMPLE)));
        assert_eq!(once, twice);
    }

    #[test]
    fn initial_state_uses_config_defaults() {
        let s = state();
        assert_eq!(s.active_category(), Gaming);
        assert!(s.is_experience_open(0));
        assert!(s.selected_project().is_none());
        assert!(!s.is_nav_menu_open());
        assert!(!s.scroll_locked());
    }

    #[test]
    fn default_open_out_of_range_starts_collapsed() {
        let cfg = PageConfig {
            default_open_experience: Some(9),
            ..PageConfig::default()
        };
        let s: ViewState<'static> = ViewState::new(&cfg, 4);
        assert_eq!(s.open_experience(), None);
    }

    #[test]
    fn accordion_mutual_exclusion() {
        let mut s = state();
        s.toggle_experience(2);
        let open: Vec<usize> = (0..EXPERIENCES.len())
            .filter(|&i| s.is_experience_open(i))
            .collect();
        assert_eq!(open, [2]);
        s.toggle_experience(2);
        assert!((0..EXPERIENCES.len()).all(|i| !s.is_experience_open(i)));
        assert_eq!(s.open_experience(), None);
    }

    #[test]
    fn accordion_collapse_default() {
        let mut s = state();
        s.toggle_experience(0);
        assert_eq!(s.open_experience(), None);
        s.toggle_experience(1);
        s.toggle_experience(3);
        assert_eq!(s.open_experience(), Some(3));
    }

    #[test]
    fn modal_round_trip() {
        let fresh = state();
        let mut s = state();
        s.select_project(Some(&SAMPLE[0]));
        assert!(s.scroll_locked());
        assert!(s.overlay_open());
        s.select_project(None);
        assert_eq!(s, fresh);
        assert!(!s.scroll_locked());
    }

    #[test]
    fn reselect_replaces_project() {
        let mut s = state();
        s.select_project(Some(&SAMPLE[0]));
        s.select_project(Some(&SAMPLE[2]));
        assert_eq!(s.selected_project().map(|p| p.video_id), Some("p3"));
        assert!(s.scroll_locked());
        s.close_modal();
        assert!(s.selected_project().is_none());
    }

    #[test]
    fn scroll_threshold_is_strict() {
        let mut s = state();
        s.update_scroll_state(50.0, 50.0);
        assert!(!s.is_past_scroll_threshold());
        s.update_scroll_state(51.0, 50.0);
        assert!(s.is_past_scroll_threshold());
        s.update_scroll_state(0.0, 50.0);
        assert!(!s.is_past_scroll_threshold());
    }

    #[test]
    fn navigation_closes_menu_first() {
        let mut s = state();
        s.toggle_nav_menu();
        assert!(s.is_nav_menu_open());
        assert!(s.scroll_locked());
        s.navigate_to(Section::Experience);
        assert!(!s.is_nav_menu_open());
        assert!(!s.scroll_locked());
        assert_eq!(s.take_pending_anchor(), Some(Section::Experience));
        assert_eq!(s.take_pending_anchor(), None);
    }

    #[test]
    fn overlays_toggled_quickly_never_stick() {
        let mut s = state();
        s.toggle_nav_menu();
        s.select_project(Some(&SAMPLE[1]));
        s.toggle_nav_menu();
        assert!(s.scroll_locked());
        s.close_modal();
        assert!(!s.scroll_locked());
        s.toggle_nav_menu();
        s.close_nav_menu();
        s.close_nav_menu();
        assert!(!s.scroll_locked());
    }

    #[test]
    fn widening_past_breakpoint_closes_menu() {
        let cfg = PageConfig::responsive();
        let mut s = state();
        assert!(s.sync_nav_layout(&cfg, 400.0));
        s.toggle_nav_menu();
        assert!(s.sync_nav_layout(&cfg, 500.0));
        assert!(s.is_nav_menu_open());
        assert!(s.scroll_locked());

        assert!(!s.sync_nav_layout(&cfg, 1024.0));
        assert!(!s.is_nav_menu_open());
        assert!(!s.scroll_locked());
    }

    #[test]
    fn inline_layout_never_keeps_menu_open() {
        let cfg = PageConfig::desktop();
        let mut s = state();
        s.toggle_nav_menu();
        assert!(!s.sync_nav_layout(&cfg, 320.0));
        assert!(!s.is_nav_menu_open());
    }

    #[test]
    fn section_anchors() {
        assert_eq!(Section::Portfolio.anchor(), "portfolio");
        assert_eq!(Section::NAV_LINKS.len(), 3);
        assert!(!Section::NAV_LINKS.contains(&Section::Contact));
    }
}
