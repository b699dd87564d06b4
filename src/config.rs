//! Compile-time page configuration.
//!
//! The defaults below are presentation choices, not derived from data:
//! change them here rather than in the view code.

use crate::data::Category;

/// Filter selected when the page opens.
pub const DEFAULT_CATEGORY: Category = Category::Gaming;

/// Career entry expanded when the page opens (`None` = all collapsed).
pub const DEFAULT_OPEN_EXPERIENCE: Option<usize> = Some(0);

/// Scroll offset (points) past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Fraction of a region that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Viewport width below which the responsive layout uses the overlay menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// How the navigation links are presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavLayout {
    /// Links always inline in the bar.
    Inline,
    /// Hamburger + full-screen overlay menu below `breakpoint` width.
    Overlay { breakpoint: f32 },
}

/// Per-list reveal stagger steps, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub hero: f64,
    pub gallery: f64,
    pub skills: f64,
    pub experience: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            hero: 0.1,
            gallery: 0.1,
            skills: 0.05,
            experience: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub default_category: Category,
    pub default_open_experience: Option<usize>,
    pub scroll_threshold: f32,
    pub reveal_threshold: f32,
    pub stagger: Stagger,
    pub nav: NavLayout,
    /// Public URL the page is hosted at; decides how asset paths resolve.
    pub site_url: String,
    /// Repository name used as the path prefix on sub-path hosting.
    pub repo_name: String,
    pub dark_mode: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::responsive()
    }
}

impl PageConfig {
    /// Overlay menu on narrow windows, inline links otherwise.
    pub fn responsive() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY,
            default_open_experience: DEFAULT_OPEN_EXPERIENCE,
            scroll_threshold: SCROLL_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
            stagger: Stagger::default(),
            nav: NavLayout::Overlay {
                breakpoint: MOBILE_BREAKPOINT,
            },
            site_url: String::from("https://eyalmosko.github.io/eyal-portfolio/"),
            repo_name: String::from("eyal-portfolio"),
            dark_mode: true,
        }
    }

    /// Inline links at every width, no overlay menu.
    pub fn desktop() -> Self {
        Self {
            nav: NavLayout::Inline,
            ..Self::responsive()
        }
    }

    /// The layout this build ships with. The `inline-nav` feature selects
    /// `desktop()`; otherwise `responsive()`.
    pub fn for_build() -> Self {
        if cfg!(feature = "inline-nav") {
            Self::desktop()
        } else {
            Self::responsive()
        }
    }

    /// Whether the overlay menu replaces inline links at this width.
    pub fn nav_uses_overlay(&self, width: f32) -> bool {
        match self.nav {
            NavLayout::Inline => false,
            NavLayout::Overlay { breakpoint } => width < breakpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_explicit() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.default_category, Category::Gaming);
        assert_eq!(cfg.default_open_experience, Some(0));
        assert!((cfg.scroll_threshold - 50.0).abs() < 1e-6);
        assert!((cfg.reveal_threshold - 0.1).abs() < 1e-6);
    }

    #[test]
    fn overlay_below_breakpoint_only() {
        let cfg = PageConfig::responsive();
        assert!(cfg.nav_uses_overlay(400.0));
        assert!(!cfg.nav_uses_overlay(768.0));
        assert!(!cfg.nav_uses_overlay(1280.0));
    }

    #[test]
    fn desktop_never_uses_overlay() {
        let cfg = PageConfig::desktop();
        assert!(!cfg.nav_uses_overlay(320.0));
        assert_eq!(cfg.default_category, PageConfig::responsive().default_category);
    }

    #[test]
    fn build_layout_follows_feature() {
        let cfg = PageConfig::for_build();
        assert_eq!(cfg.nav == NavLayout::Inline, cfg!(feature = "inline-nav"));
        assert_eq!(cfg.site_url, PageConfig::responsive().site_url);
    }
}
