//! Landmark galleries.
//!
//! Images come from the image search service, cached per query. When the
//! search turns up too little the gallery is topped up with seeded
//! placeholder images, so a gallery is never empty.

use std::sync::Arc;
use std::time::Duration;

use timetraveler_domain::GalleryImage;

use crate::infrastructure::cache::TtlCache;
use crate::infrastructure::ports::ImageSearchPort;

/// Fewer results than this triggers a second search that adds the location.
const MIN_PRIMARY_RESULTS: usize = 3;

const PLACEHOLDER_BASE_URL: &str = "https://source.unsplash.com/800x600/";

/// Placeholder theme for a landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderCategory {
    Temple,
    Palace,
    Fort,
    Pyramid,
    Rome,
    Taj,
    Stupa,
    Monument,
}

impl PlaceholderCategory {
    /// Kind of site first, then well-known names.
    pub fn classify(name: &str, kind: &str) -> Self {
        let kind = kind.to_lowercase();
        let name = name.to_lowercase();

        if kind.contains("temple") {
            Self::Temple
        } else if kind.contains("palace") {
            Self::Palace
        } else if kind.contains("fort") {
            Self::Fort
        } else if name.contains("pyramid") {
            Self::Pyramid
        } else if name.contains("colosseum") {
            Self::Rome
        } else if name.contains("taj") {
            Self::Taj
        } else if name.contains("stupa") {
            Self::Stupa
        } else {
            Self::Monument
        }
    }

    fn search_terms(&self) -> &'static str {
        match self {
            Self::Temple => "indian,temple,architecture",
            Self::Palace => "palace,architecture,historical",
            Self::Fort => "fort,castle,historical",
            Self::Pyramid => "pyramid,egypt,ancient",
            Self::Rome => "rome,colosseum,ancient",
            Self::Taj => "taj,mahal,india",
            Self::Stupa => "stupa,buddhist,temple",
            Self::Monument => "monument,historical,architecture",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Temple => "Temple",
            Self::Palace => "Palace",
            Self::Fort => "Fort",
            Self::Pyramid => "Pyramid",
            Self::Rome => "Rome",
            Self::Taj => "Taj",
            Self::Stupa => "Stupa",
            Self::Monument => "Monument",
        }
    }

    /// `count` placeholder images, numbered from zero.
    pub fn placeholders(&self, count: usize) -> Vec<GalleryImage> {
        (0..count)
            .map(|i| {
                GalleryImage::new(
                    format!("{PLACEHOLDER_BASE_URL}?{}&sig={i}", self.search_terms()),
                    format!("Historical {} View {}", self.title(), i + 1),
                )
            })
            .collect()
    }
}

pub struct GalleryService {
    search: Arc<dyn ImageSearchPort>,
    cache: TtlCache<String, Vec<GalleryImage>>,
    gallery_size: usize,
}

impl GalleryService {
    pub fn new(search: Arc<dyn ImageSearchPort>, cache_ttl: Duration, gallery_size: usize) -> Self {
        Self {
            search,
            cache: TtlCache::new(cache_ttl),
            gallery_size: gallery_size.max(1),
        }
    }

    pub fn gallery_size(&self) -> usize {
        self.gallery_size
    }

    /// Up to `gallery_size` images of a landmark. Never empty.
    pub async fn gallery_for(&self, name: &str, location: &str, kind: &str) -> Vec<GalleryImage> {
        let mut images = self.search_cached(name).await;

        if images.len() < MIN_PRIMARY_RESULTS && !location.trim().is_empty() {
            let more = self.search_cached(&format!("{name} {location}")).await;
            for image in more {
                if !images.iter().any(|existing| existing.url == image.url) {
                    images.push(image);
                }
            }
        }
        images.truncate(self.gallery_size);

        let missing = self.gallery_size - images.len();
        if missing > 0 {
            let category = PlaceholderCategory::classify(name, kind);
            tracing::debug!(
                landmark = %name,
                found = images.len(),
                category = ?category,
                "Topping up gallery with placeholders"
            );
            images.extend(category.placeholders(missing));
        }

        images
    }

    /// A full gallery of placeholders, for places nobody could name.
    pub fn placeholder_gallery(&self, name: &str, kind: &str) -> Vec<GalleryImage> {
        PlaceholderCategory::classify(name, kind).placeholders(self.gallery_size)
    }

    async fn search_cached(&self, query: &str) -> Vec<GalleryImage> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let key = query.to_lowercase();
        if let Some(hit) = self.cache.get(&key).await {
            return hit;
        }

        match self.search.search(query, self.gallery_size).await {
            Ok(images) => {
                if !images.is_empty() {
                    self.cache.insert(key, images.clone()).await;
                }
                images
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "Image search failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{ImageSearchError, MockImageSearchPort};

    fn image(n: usize) -> GalleryImage {
        GalleryImage::new(format!("https://upload.example/{n}.jpg"), format!("photo {n}"))
    }

    #[tokio::test]
    async fn enough_results_need_one_search() {
        let mut search = MockImageSearchPort::new();
        search
            .expect_search()
            .withf(|query, limit| query == "Taj Mahal" && *limit == 4)
            .times(1)
            .returning(|_, _| Ok((0..4).map(image).collect()));

        let service = GalleryService::new(Arc::new(search), Duration::from_secs(60), 4);
        let gallery = service.gallery_for("Taj Mahal", "Agra, India", "Mausoleum").await;

        assert_eq!(gallery, (0..4).map(image).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn sparse_results_search_again_with_location_and_dedupe() {
        let mut search = MockImageSearchPort::new();
        search
            .expect_search()
            .withf(|query, _| query == "Sanchi")
            .times(1)
            .returning(|_, _| Ok(vec![image(1)]));
        search
            .expect_search()
            .withf(|query, _| query == "Sanchi Madhya Pradesh, India")
            .times(1)
            .returning(|_, _| Ok(vec![image(1), image(2)]));

        let service = GalleryService::new(Arc::new(search), Duration::from_secs(60), 3);
        let gallery = service
            .gallery_for("Sanchi", "Madhya Pradesh, India", "Buddhist Monument")
            .await;

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery[0], image(1));
        assert_eq!(gallery[1], image(2));
        assert_eq!(gallery[2].caption, "Historical Monument View 1");
        assert!(gallery[2].url.ends_with("&sig=0"));
    }

    #[tokio::test]
    async fn failed_search_falls_back_to_placeholders() {
        let mut search = MockImageSearchPort::new();
        search
            .expect_search()
            .times(2)
            .returning(|_, _| Err(ImageSearchError::RequestFailed("timeout".into())));

        let service = GalleryService::new(Arc::new(search), Duration::from_secs(60), 3);
        let gallery = service
            .gallery_for("Nellaiappar Temple", "Tirunelveli, India", "Hindu Temple")
            .await;

        let captions: Vec<&str> = gallery.iter().map(|g| g.caption.as_str()).collect();
        assert_eq!(
            captions,
            vec![
                "Historical Temple View 1",
                "Historical Temple View 2",
                "Historical Temple View 3"
            ]
        );
        assert!(gallery[0].url.contains("?indian,temple,architecture&sig=0"));
    }

    #[tokio::test]
    async fn repeat_lookups_hit_the_cache() {
        let mut search = MockImageSearchPort::new();
        search
            .expect_search()
            .times(1)
            .returning(|_, _| Ok((0..4).map(image).collect()));

        let service = GalleryService::new(Arc::new(search), Duration::from_secs(60), 4);
        let first = service.gallery_for("Colosseum", "Rome, Italy", "Amphitheatre").await;
        let second = service.gallery_for("colosseum", "Rome, Italy", "Amphitheatre").await;

        assert_eq!(first, second);
    }

    #[test]
    fn category_prefers_kind_then_name() {
        assert_eq!(
            PlaceholderCategory::classify("Amber Fort", "Palace Fortress"),
            PlaceholderCategory::Palace
        );
        assert_eq!(
            PlaceholderCategory::classify("Great Pyramids of Giza", "Ancient Monument"),
            PlaceholderCategory::Pyramid
        );
        assert_eq!(
            PlaceholderCategory::classify("Taj Mahal", "Mausoleum"),
            PlaceholderCategory::Taj
        );
        assert_eq!(
            PlaceholderCategory::classify("Somewhere", "Unknown"),
            PlaceholderCategory::Monument
        );
    }
}
