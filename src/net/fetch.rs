use url::Url;

/// Error during fetch
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FetchError({})", self.message)
    }
}

/// Fetch a URL and return the response body (blocking).
pub fn fetch_bytes(url_str: &str) -> Result<Vec<u8>, FetchError> {
    let parsed = Url::parse(url_str).map_err(|e| FetchError {
        message: format!("Invalid URL: {}", e),
    })?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("showreel/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| FetchError {
            message: format!("Client error: {}", e),
        })?;

    let response = client.get(parsed.as_str()).send().map_err(|e| FetchError {
        message: format!("Request failed: {}", e),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError {
            message: format!("HTTP {} for {}", status.as_u16(), parsed),
        });
    }

    let bytes = response.bytes().map_err(|e| FetchError {
        message: format!("Failed to read body: {}", e),
    })?;
    Ok(bytes.to_vec())
}
