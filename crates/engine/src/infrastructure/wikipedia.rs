//! Wikipedia / Wikimedia image search via the MediaWiki action API.
//!
//! Three hops: find the best matching article, list the files it embeds,
//! then resolve each file to an 800px thumbnail with a caption.

use async_trait::async_trait;
use regex_lite::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;
use timetraveler_domain::{common::truncate_chars, GalleryImage};

use crate::infrastructure::ports::{ImageSearchError, ImageSearchPort};

const API_URL: &str = "https://en.wikipedia.org/w/api.php";
const THUMB_WIDTH: &str = "800";
const MAX_CAPTION_CHARS: usize = 100;

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".svg"];
const DECORATION_WORDS: &[&str] = &["icon", "logo", "flag", "button", "symbol"];

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid regex"));

pub struct WikipediaImageSearch {
    client: Client,
}

impl WikipediaImageSearch {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("timetraveler/0.1 (historical landmark gallery)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    async fn query<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, ImageSearchError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[("action", "query"), ("format", "json")])
            .query(params)
            .send()
            .await
            .map_err(|e| ImageSearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSearchError::RequestFailed(format!(
                "Wikipedia returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ImageSearchError::InvalidResponse(e.to_string()))
    }

    async fn best_page(&self, query: &str) -> Result<Option<String>, ImageSearchError> {
        let response: SearchResponse = self
            .query(&[("list", "search"), ("srsearch", query), ("srlimit", "1")])
            .await?;
        Ok(response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title))
    }

    async fn page_files(&self, title: &str, limit: usize) -> Result<Vec<String>, ImageSearchError> {
        let imlimit = (limit * 3).to_string();
        let response: PagesResponse<ImagesPage> = self
            .query(&[("titles", title), ("prop", "images"), ("imlimit", &imlimit)])
            .await?;
        Ok(response
            .first_page()
            .map(|page| page.images.into_iter().map(|i| i.title).collect())
            .unwrap_or_default())
    }

    async fn resolve_file(&self, file_title: &str) -> Result<Option<GalleryImage>, ImageSearchError> {
        let response: PagesResponse<ImageInfoPage> = self
            .query(&[
                ("titles", file_title),
                ("prop", "imageinfo"),
                ("iiprop", "url|extmetadata"),
                ("iiurlwidth", THUMB_WIDTH),
            ])
            .await?;

        let Some(info) = response
            .first_page()
            .and_then(|page| page.imageinfo.into_iter().next())
        else {
            return Ok(None);
        };
        let Some(url) = info.thumburl else {
            return Ok(None);
        };

        let raw_caption = info
            .extmetadata
            .as_ref()
            .and_then(|meta| {
                ["ImageDescription", "ObjectName"]
                    .iter()
                    .filter_map(|key| meta.get(*key))
                    .map(|field| field.value.clone())
                    .find(|value| !value.trim().is_empty())
            })
            .unwrap_or_default();

        let mut caption = clean_caption(&raw_caption);
        if caption.is_empty() {
            caption = file_title.trim_start_matches("File:").replace('_', " ");
        }

        Ok(Some(GalleryImage::new(url, caption)))
    }
}

#[async_trait]
impl ImageSearchPort for WikipediaImageSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GalleryImage>, ImageSearchError> {
        let Some(title) = self.best_page(query).await? else {
            tracing::debug!(query, "No Wikipedia article matched");
            return Ok(Vec::new());
        };

        let files = self.page_files(&title, limit).await?;
        let mut images = Vec::new();

        for file in files.iter().take(limit * 2).filter(|f| is_photo_file(f)) {
            if let Some(image) = self.resolve_file(file).await? {
                images.push(image);
            }
            if images.len() >= limit {
                break;
            }
        }

        tracing::debug!(query, page = %title, found = images.len(), "Wikipedia image search");
        Ok(images)
    }
}

/// Real image files that are not site decoration.
fn is_photo_file(title: &str) -> bool {
    let lower = title.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
        && !DECORATION_WORDS.iter().any(|word| lower.contains(word))
}

fn clean_caption(raw: &str) -> String {
    let text = HTML_TAG_RE.replace_all(raw, "");
    truncate_chars(text.trim(), MAX_CAPTION_CHARS).to_string()
}

// =============================================================================
// MediaWiki API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesResponse<P> {
    query: Option<PagesQuery<P>>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery<P> {
    #[serde(default = "HashMap::new")]
    pages: HashMap<String, P>,
}

impl<P> PagesResponse<P> {
    fn first_page(self) -> Option<P> {
        self.query.and_then(|q| q.pages.into_values().next())
    }
}

#[derive(Debug, Deserialize)]
struct ImagesPage {
    #[serde(default)]
    images: Vec<FileRef>,
}

#[derive(Debug, Deserialize)]
struct FileRef {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImageInfoPage {
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    thumburl: Option<String>,
    extmetadata: Option<HashMap<String, MetadataField>>,
}

#[derive(Debug, Deserialize)]
struct MetadataField {
    #[serde(default)]
    value: String,
}
