//! Video embed URLs and the modal's player session.
//!
//! The player itself is external; the page only decides which video it shows
//! and makes sure a session never outlives, or lags behind, the selection.

use url::Url;

use crate::data::Project;

fn with_path(base: &str, segments: &[&str]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .clear()
        .extend(segments);
    Ok(url)
}

/// Embeddable player URL, optionally asking it to start playing.
pub fn embed_url(video_id: &str, autoplay: bool) -> Result<Url, url::ParseError> {
    let mut url = with_path("https://www.youtube.com/", &["embed", video_id])?;
    if autoplay {
        url.query_pairs_mut().append_pair("autoplay", "1");
    }
    Ok(url)
}

/// Largest still frame for the video.
pub fn thumbnail_url(video_id: &str) -> Result<Url, url::ParseError> {
    with_path("https://img.youtube.com/", &["vi", video_id, "maxresdefault.jpg"])
}

/// A player instance bound to one video.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedSession {
    pub video_id: String,
    pub title: String,
    pub is_vertical: bool,
    pub url: Url,
}

impl EmbedSession {
    fn open(project: &Project) -> Result<Self, url::ParseError> {
        Ok(Self {
            video_id: project.video_id.to_string(),
            title: project.title.to_string(),
            is_vertical: project.is_vertical,
            url: embed_url(project.video_id, true)?,
        })
    }

    /// Width / height of the player frame.
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_vertical {
            9.0 / 16.0
        } else {
            16.0 / 9.0
        }
    }
}

/// Holds at most one session, always for the currently selected project.
#[derive(Debug, Default)]
pub struct EmbedSlot {
    current: Option<EmbedSession>,
}

impl EmbedSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match the slot to `selected`: keep a session for the same video,
    /// replace it for a different one, drop it when nothing is selected.
    pub fn sync(&mut self, selected: Option<&Project>) -> Option<&EmbedSession> {
        let keep = match (&self.current, selected) {
            (Some(s), Some(p)) => s.video_id == p.video_id,
            _ => false,
        };
        if !keep {
            if let Some(old) = self.current.take() {
                log::info!("embed: closed {}", old.video_id);
            }
            if let Some(p) = selected {
                match EmbedSession::open(p) {
                    Ok(session) => {
                        log::info!("embed: opened {}", session.url);
                        self.current = Some(session);
                    }
                    Err(e) => log::warn!("embed: cannot build player URL for {}: {e}", p.video_id),
                }
            }
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    static WIDE: Project = Project {
        title: "Wide",
        video_id: "diovI-ORqiw",
        is_vertical: false,
        categories: &[Category::Ads],
    };
    static TALL: Project = Project {
        title: "Tall",
        video_id: "soFt0szMeKQ",
        is_vertical: true,
        categories: &[Category::Gaming],
    };

    #[test]
    fn embed_url_with_autoplay() {
        let url = embed_url("diovI-ORqiw", true).unwrap();
        assert_eq!(url.as_str(), "https://www.youtube.com/embed/diovI-ORqiw?autoplay=1");
        let url = embed_url("diovI-ORqiw", false).unwrap();
        assert_eq!(url.as_str(), "https://www.youtube.com/embed/diovI-ORqiw");
    }

    #[test]
    fn thumbnail_url_uses_max_resolution() {
        assert_eq!(
            thumbnail_url("_B3VRQox9Z8").unwrap().as_str(),
            "https://img.youtube.com/vi/_B3VRQox9Z8/maxresdefault.jpg"
        );
    }

    #[test]
    fn ids_are_escaped_as_one_segment() {
        let url = embed_url("a/b?c", false).unwrap();
        assert_eq!(url.path(), "/embed/a%2Fb%3Fc");
    }

    #[test]
    fn slot_follows_selection() {
        let mut slot = EmbedSlot::new();
        assert!(slot.sync(None).is_none());

        let s = slot.sync(Some(&WIDE)).unwrap();
        assert_eq!(s.video_id, "diovI-ORqiw");
        assert!(s.url.as_str().ends_with("autoplay=1"));

        let s = slot.sync(Some(&TALL)).unwrap();
        assert_eq!(s.video_id, "soFt0szMeKQ");
        assert!((s.aspect_ratio() - 9.0 / 16.0).abs() < 1e-6);

        assert!(slot.sync(None).is_none());
        assert!(slot.current.is_none());
    }

    #[test]
    fn slot_keeps_session_for_same_video() {
        let mut slot = EmbedSlot::new();
        let first = slot.sync(Some(&WIDE)).cloned();
        let second = slot.sync(Some(&WIDE)).cloned();
        assert_eq!(first, second);
    }
}
