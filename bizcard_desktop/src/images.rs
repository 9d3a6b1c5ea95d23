//! Remote image loading for the avatar and project thumbnails.
//!
//! Loading lives entirely on the rendering side: a failed fetch degrades to
//! a placeholder and never touches interaction state.

use std::collections::{HashMap, HashSet};

use iced::widget::image;
use tracing::warn;

/// URL-keyed cache of decoded image handles for the current run.
#[derive(Debug, Default)]
pub struct ImageCache {
    loaded: HashMap<String, image::Handle>,
    failed: HashSet<String>,
}

impl ImageCache {
    pub fn get(&self, url: &str) -> Option<&image::Handle> {
        self.loaded.get(url)
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    pub fn store(&mut self, url: String, result: Result<image::Handle, String>) {
        match result {
            Ok(handle) => {
                self.loaded.insert(url, handle);
            }
            Err(err) => {
                warn!(%url, %err, "image fetch failed, using placeholder");
                self.failed.insert(url);
            }
        }
    }
}

/// Downloads one image, returning the URL with the outcome so the result
/// can be routed back into the cache.
pub async fn fetch(url: String) -> (String, Result<image::Handle, String>) {
    let result = fetch_bytes(&url).await;
    (url, result)
}

async fn fetch_bytes(url: &str) -> Result<image::Handle, String> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}
