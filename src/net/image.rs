//! Background thumbnail fetcher.
//!
//! Each download runs on its own thread; the decode and downscale into an
//! RGBA buffer for egui texture creation run on the rayon pool. Failures are
//! remembered and never retried; the caller draws a placeholder instead.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use super::fetch::{fetch_bytes, FetchError};

/// Thumbnails wider than this are downscaled after decoding.
const MAX_WIDTH: u32 = 640;

/// Decoded image data (RGBA).
#[derive(Debug)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Result<ImageData, FetchError>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request an image to be fetched in the background.
    pub fn request(&mut self, url: &str) {
        if self.loaded.contains_key(url)
            || self.pending.contains_key(url)
            || self.failed.contains(url)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();

        std::thread::spawn(move || match fetch_bytes(&url_owned) {
            Ok(bytes) => rayon::spawn(move || {
                let _ = tx.send(decode(&url_owned, &bytes));
            }),
            Err(e) => {
                let _ = tx.send(Err(e));
            }
        });

        self.pending.insert(url.to_string(), rx);
    }

    /// Poll for completed downloads. Call every frame.
    ///
    /// Returns the number of images that finished since the last poll.
    pub fn poll(&mut self) -> usize {
        let mut completed = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    self.loaded.insert(url.clone(), data);
                    completed.push(url.clone());
                }
                Ok(Err(e)) => {
                    log::warn!("thumbnail {}: {}", url, e);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
            }
        }
        for url in &completed {
            self.pending.remove(url);
        }
        completed.len()
    }

    /// Take ownership of a loaded image, e.g. once it has been uploaded as a texture.
    pub fn take(&mut self, url: &str) -> Option<ImageData> {
        self.loaded.remove(url)
    }

    /// Get all loaded image URLs.
    pub fn loaded_urls(&self) -> Vec<String> {
        self.loaded.keys().cloned().collect()
    }
}

/// Decode `bytes` to RGBA, downscaling anything wider than `MAX_WIDTH`.
fn decode(url: &str, bytes: &[u8]) -> Result<ImageData, FetchError> {
    let img = image::load_from_memory(bytes).map_err(|e| FetchError {
        message: format!("Decode failed: {}", e),
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_WIDTH {
        let ratio = MAX_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized =
            image::imageops::resize(&rgba, MAX_WIDTH, new_h, image::imageops::FilterType::Triangle);
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    log::debug!("thumbnail {} decoded at {}x{}", url, w, h);
    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new();
        loader.request("https://example.invalid/img.png");
        loader.request("https://example.invalid/img.png");
        assert_eq!(loader.pending.len(), 1);
    }

    #[test]
    fn failed_urls_are_not_retried() {
        let mut loader = ImageLoader::new();
        loader.failed.insert("https://example.invalid/x.jpg".to_string());
        loader.request("https://example.invalid/x.jpg");
        assert!(loader.pending.is_empty());
    }

    #[test]
    fn poll_without_requests_is_empty() {
        let mut loader = ImageLoader::default();
        assert_eq!(loader.poll(), 0);
        assert!(loader.loaded_urls().is_empty());
        assert!(loader.take("anything").is_none());
    }

    #[test]
    fn wide_images_are_downscaled() {
        let data = decode("wide.png", &png(1280, 720)).unwrap();
        assert_eq!((data.width, data.height), (640, 360));
        assert_eq!(data.rgba.len(), 640 * 360 * 4);
    }

    #[test]
    fn small_images_keep_their_size() {
        let data = decode("small.png", &png(320, 180)).unwrap();
        assert_eq!((data.width, data.height), (320, 180));
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        let err = decode("junk.png", b"not an image").unwrap_err();
        assert!(err.message.starts_with("Decode failed"));
    }

    #[test]
    fn many_stalled_downloads_do_not_hold_the_decode_pool() {
        let mut loader = ImageLoader::new();
        // Connection refused; each request fails on its own download thread.
        for i in 0..32 {
            loader.request(&format!("http://127.0.0.1:9/{i}.png"));
        }
        // The decode pool stays free for work that never touches the network.
        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            let _ = tx.send(decode("local.png", &png(8, 8)).is_ok());
        });
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(true));

        let deadline = Instant::now() + Duration::from_secs(30);
        while !loader.pending.is_empty() && Instant::now() < deadline {
            loader.poll();
            std::thread::sleep(Duration::from_millis(20));
        }
        assert!(loader.pending.is_empty());
        assert_eq!(loader.failed.len(), 32);
        assert!(loader.loaded_urls().is_empty());
    }
}
