//! Download-asset path resolution.
//!
//! The page can be hosted at a domain root or under a repository sub-path
//! (project pages on `*.github.io`). Asset links are rooted accordingly.

use url::Url;

/// Error resolving an asset against the configured site URL
pub struct AssetError {
    pub message: String,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssetError({})", self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentContext {
    /// Served from the domain root.
    Root,
    /// Served under `/<repo>/`.
    SubPath(String),
}

impl DeploymentContext {
    pub fn from_host(host: &str, repo_name: &str) -> Self {
        if host.ends_with("github.io") {
            DeploymentContext::SubPath(repo_name.to_string())
        } else {
            DeploymentContext::Root
        }
    }
}

fn parse_site(site_url: &str) -> Result<Url, AssetError> {
    Url::parse(site_url).map_err(|e| AssetError {
        message: format!("Invalid site URL {site_url:?}: {e}"),
    })
}

/// Root-relative link target for `file`.
pub fn resolve_asset(ctx: &DeploymentContext, file: &str) -> String {
    match ctx {
        DeploymentContext::Root => format!("/{file}"),
        DeploymentContext::SubPath(repo) => format!("/{repo}/{file}"),
    }
}

/// Absolute URL for `file`, for opening outside the page (e.g. in a browser).
pub fn absolute_asset_url(
    site_url: &str,
    repo_name: &str,
    file: &str,
) -> Result<String, AssetError> {
    let site = parse_site(site_url)?;
    let ctx = DeploymentContext::from_host(site.host_str().unwrap_or_default(), repo_name);
    let path = resolve_asset(&ctx, file);
    let joined = site.join(&path).map_err(|e| AssetError {
        message: format!("Cannot join {path:?} onto {site_url:?}: {e}"),
    })?;
    Ok(joined.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_pages_uses_repo_prefix() {
        let ctx = DeploymentContext::from_host("eyalmosko.github.io", "eyal-portfolio");
        assert_eq!(ctx, DeploymentContext::SubPath("eyal-portfolio".into()));
        assert_eq!(resolve_asset(&ctx, "cv.pdf"), "/eyal-portfolio/cv.pdf");
    }

    #[test]
    fn other_hosts_are_root() {
        let ctx = DeploymentContext::from_host("localhost", "eyal-portfolio");
        assert_eq!(ctx, DeploymentContext::Root);
        assert_eq!(resolve_asset(&ctx, "cv.pdf"), "/cv.pdf");
    }

    #[test]
    fn rejects_garbage_site_url() {
        let err = absolute_asset_url("not a url", "repo", "cv.pdf").unwrap_err();
        assert!(err.to_string().contains("Invalid site URL"));
    }

    #[test]
    fn absolute_url_joins_onto_origin() {
        let url = absolute_asset_url("https://user.github.io/repo/", "repo", "cv.pdf").unwrap();
        assert_eq!(url, "https://user.github.io/repo/cv.pdf");
        let url = absolute_asset_url("https://example.com/some/page", "repo", "cv.pdf").unwrap();
        assert_eq!(url, "https://example.com/cv.pdf");
    }
}
