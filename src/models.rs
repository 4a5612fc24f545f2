//! Typed records for Unsplash API responses.
//!
//! Unknown fields are ignored so that additive API changes never break
//! decoding. A missing required field fails with
//! [`UnsplashError::Decode`](crate::UnsplashError::Decode).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// The image URLs for a photo, from original size down to thumbnail.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhotoUrls {
    pub raw: Url,
    pub full: Url,
    pub regular: Url,
    pub small: Url,
    pub thumb: Url,
    #[serde(default)]
    pub small_s3: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub download: Url,
    /// Hit this (through `track_download`) when a photo is actually used.
    pub download_location: Url,
}

/// Camera metadata. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Exif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocationPosition {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub position: Option<LocationPosition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Photo {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    /// Dominant color as a hex string, e.g. `#60544D`.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub blur_hash: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    pub likes: u32,
    #[serde(default)]
    pub liked_by_user: bool,
    pub user: User,
    #[serde(default)]
    pub current_user_collections: Vec<serde_json::Value>,
    #[serde(default)]
    pub sponsorship: Option<serde_json::Value>,
    #[serde(default)]
    pub exif: Option<Exif>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub topics: Vec<serde_json::Value>,
}

/// Result of `photos().random(..)`.
///
/// The API answers with a single object unless `count` was requested, in
/// which case it answers with an array.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomPhotos {
    Single(Box<Photo>),
    Many(Vec<Photo>),
}

impl RandomPhotos {
    /// Flatten into a list regardless of shape.
    pub fn into_vec(self) -> Vec<Photo> {
        match self {
            Self::Single(photo) => vec![*photo],
            Self::Many(photos) => photos,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(photos) => photos.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserProfileImage {
    pub small: Url,
    pub medium: Url,
    pub large: Url,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    pub likes: Url,
    pub portfolio: Url,
    #[serde(default)]
    pub following: Option<Url>,
    #[serde(default)]
    pub followers: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<Url>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub total_likes: u32,
    pub total_photos: u32,
    pub total_collections: u32,
    pub profile_image: UserProfileImage,
    pub links: UserLinks,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    pub related: Url,
    #[serde(default)]
    pub download: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub published_at: DateTime<Utc>,
    pub last_collected_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub curated: bool,
    #[serde(default)]
    pub featured: bool,
    pub total_photos: u32,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub share_key: Option<String>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    pub links: CollectionLinks,
    pub user: User,
    #[serde(default)]
    pub cover_photo: Option<Photo>,
    #[serde(default)]
    pub preview_photos: Vec<serde_json::Value>,
}

/// One page of search results. Pagination is left to the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchPage<T> {
    pub total: u64,
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> SearchPage<T> {
    /// `true` if `page` is not the last page.
    pub fn has_more(&self, page: u32) -> bool {
        page < self.total_pages
    }
}

/// Download and view counts for a user. Every field is optional on the
/// wire; missing ones decode to empty values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserStatistics {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub downloads: StatisticsSeries,
    #[serde(default)]
    pub views: StatisticsSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatisticsSeries {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub historical: Option<HistoricalStatistics>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoricalStatistics {
    /// Total change over the window; may be negative.
    pub change: i64,
    pub resolution: String,
    pub quantity: u32,
    #[serde(default)]
    pub values: Vec<StatisticsPoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatisticsPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// `{"url": ...}` bodies from the download and portfolio endpoints.
#[derive(Deserialize)]
pub(crate) struct LinkResponse {
    pub url: String,
}


#[cfg(test)]
mod tests {
    use super::fixtures::{collection_json, photo_json, user_json};
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn photo_decodes_with_optional_fields_absent() {
        let photo: Photo = serde_json::from_value(photo_json("foo")).unwrap();
        assert_eq!(photo.id, "foo");
        assert_eq!(photo.color.as_deref(), Some("#000"));
        assert_eq!(photo.urls.full.as_str(), "http://e.com/full");
        assert_eq!(photo.links.self_link.as_str(), "http://e.com/");
        assert!(photo.exif.is_none());
        assert!(photo.topics.is_empty());
        assert!(!photo.liked_by_user);
        assert_eq!(photo.user.username, "u1");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut value = photo_json("foo");
        value["brand_new_field"] = serde_json::json!({"nested": [1, 2, 3]});
        value["user"]["another"] = serde_json::json!(true);
        let photo: Photo = serde_json::from_value(value).unwrap();
        assert_eq!(photo.id, "foo");
    }

    #[test]
    fn missing_required_field_fails() {
        let mut value = photo_json("foo");
        value.as_object_mut().unwrap().remove("urls");
        let err = serde_json::from_value::<Photo>(value).unwrap_err();
        assert!(err.to_string().contains("urls"));
    }

    #[test]
    fn invalid_url_fails() {
        let mut value = photo_json("foo");
        value["urls"]["thumb"] = serde_json::json!("not a url");
        assert!(serde_json::from_value::<Photo>(value).is_err());
    }

    #[test]
    fn timestamps_with_offsets_normalize_to_utc() {
        let collection: Collection = serde_json::from_value(collection_json("c1")).unwrap();
        assert_eq!(collection.published_at.day(), 12);
        assert_eq!(collection.published_at.hour(), 23);
        assert_eq!(collection.cover_photo.unwrap().id, "cover");
        assert!(!collection.private);
        assert!(collection.tags.is_empty());
    }

    #[test]
    fn user_optional_fields() {
        let mut value = user_json("jane");
        value["bio"] = serde_json::json!("Photographer");
        value["portfolio_url"] = serde_json::json!(null);
        let user: User = serde_json::from_value(value).unwrap();
        assert_eq!(user.bio.as_deref(), Some("Photographer"));
        assert!(user.portfolio_url.is_none());
        assert!(user.first_name.is_none());
    }

    #[test]
    fn search_page_decodes() {
        let value = serde_json::json!({
            "total": 133,
            "total_pages": 7,
            "results": [user_json("a"), user_json("b")]
        });
        let page: SearchPage<User> = serde_json::from_value(value).unwrap();
        assert_eq!(page.total, 133);
        assert_eq!(page.results.len(), 2);
        assert!(page.has_more(1));
        assert!(!page.has_more(7));
    }

    #[test]
    fn statistics_decode() {
        let value = serde_json::json!({
            "username": "jane",
            "downloads": {
                "total": 50,
                "historical": {
                    "change": -3,
                    "resolution": "days",
                    "quantity": 2,
                    "values": [
                        {"date": "2024-01-01", "value": 1},
                        {"date": "2024-01-02", "value": 4}
                    ]
                }
            },
            "views": {"total": 900}
        });
        let stats: UserStatistics = serde_json::from_value(value).unwrap();
        let historical = stats.downloads.historical.unwrap();
        assert_eq!(historical.change, -3);
        assert_eq!(historical.values[1].value, 4);
        assert_eq!(historical.values[0].date.day(), 1);
        assert!(stats.views.historical.is_none());
        assert_eq!(stats.username.as_deref(), Some("jane"));
    }

    #[test]
    fn statistics_tolerate_missing_fields() {
        let value = serde_json::json!({
            "id": "abc",
            "downloads": {"historical": {"change": 0, "resolution": "days", "quantity": 30}}
        });
        let stats: UserStatistics = serde_json::from_value(value).unwrap();
        assert_eq!(stats.username, None);
        assert_eq!(stats.downloads.total, 0);
        assert!(stats.downloads.historical.is_some());
        assert_eq!(stats.views, StatisticsSeries::default());
    }

    #[test]
    fn random_photos_flatten() {
        let photo: Photo = serde_json::from_value(photo_json("a")).unwrap();
        let single = RandomPhotos::Single(Box::new(photo.clone()));
        assert_eq!(single.len(), 1);
        assert_eq!(single.into_vec()[0].id, "a");

        let many = RandomPhotos::Many(vec![photo.clone(), photo]);
        assert_eq!(many.len(), 2);
        assert!(RandomPhotos::Many(Vec::new()).is_empty());
    }
}
