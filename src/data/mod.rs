//! Static portfolio content.
//!
//! Everything here is read-only: the page state only ever borrows these
//! tables. The tables themselves live in `tables`.

mod tables;

pub use tables::{COMPANIES, CONTACT, EXPERIENCES, PROFILE, PROJECTS, SKILLS};

/// Gallery filter category.
///
/// `All` is the wildcard: it is a valid filter selection but is never stored
/// on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Gaming,
    MotionDesign,
    Ads,
    Explainer,
}

impl Category {
    /// Every selectable category, in chip display order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Gaming,
        Category::MotionDesign,
        Category::Ads,
        Category::Explainer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Gaming => "Gaming",
            Category::MotionDesign => "Motion Design",
            Category::Ads => "Ads",
            Category::Explainer => "Explainer",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Category::All
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A video in the gallery. Identity is `video_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub video_id: &'static str,
    /// Portrait (9:16) video; letterboxed in the grid.
    pub is_vertical: bool,
    pub categories: &'static [Category],
}

impl Project {
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// One position on the career timeline. Identity is its index.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    /// Bar fill, 1..=100.
    pub percent: u8,
}

impl Skill {
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub owner: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub made_in: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Hero section copy and downloadable assets.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub brand: &'static str,
    pub availability: &'static str,
    /// Headline lines; the line at `accent_line` is drawn in the accent color.
    pub headline: &'static [&'static str],
    pub accent_line: usize,
    pub intro: &'static str,
    pub cv_file: &'static str,
    pub portrait_file: &'static str,
}
