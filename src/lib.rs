//! # Unsplash client for Rust
//!
//! Typed client for the [Unsplash](https://unsplash.com/developers) photo
//! API. Fetch photos, users and collections, run searches and track
//! downloads, from async code or, with the default `blocking` feature,
//! from plain threads.
//!
//! ## Quick start
//!
//! ```no_run
//! use unsplash::{Client, RandomPhotoParams, RandomPhotos};
//!
//! #[tokio::main]
//! async fn main() -> unsplash::Result<()> {
//!     let client = Client::new("your-access-key")?;
//!
//!     let photo = client.photos().get("Dwu85P9SOIk").await?;
//!     println!("{}x{} by {}", photo.width, photo.height, photo.user.name);
//!
//!     let params = RandomPhotoParams { count: Some(3), ..Default::default() };
//!     if let RandomPhotos::Many(photos) = client.photos().random(&params).await? {
//!         for p in &photos {
//!             println!("  {}", p.urls.small);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! A non-2xx response becomes one of the API variants of [`UnsplashError`]
//! (`Authentication`, `NotFound`, `Validation`, `RateLimit`, `Api`), each
//! carrying the status and raw body. Network failures are
//! [`UnsplashError::Http`] and schema mismatches on a 2xx body are
//! [`UnsplashError::Decode`], so callers can tell "the API said no" from
//! "the request never got there".
//!
//! ```no_run
//! # async fn example(client: &unsplash::Client) -> unsplash::Result<()> {
//! use unsplash::UnsplashError;
//!
//! match client.photos().get("missing").await {
//!     Ok(photo) => println!("found {}", photo.id),
//!     Err(UnsplashError::NotFound { .. }) => println!("no such photo"),
//!     Err(UnsplashError::RateLimit { remaining, limit, .. }) => {
//!         println!("slow down: {remaining}/{limit} left this hour")
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Requests are never retried. The `max_retries` builder setting is
//! accepted and stored, but no code path reads it.

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
mod endpoints;
mod errors;
mod models;
mod params;
mod request;
mod resources;
mod transport;

pub use client::{Client, ClientBuilder};
pub use errors::{ErrorKind, Result, UnsplashError};
pub use models::{
    Collection, CollectionLinks, Exif, HistoricalStatistics, Location, LocationPosition, Photo,
    PhotoLinks, PhotoUrls, RandomPhotos, SearchPage, StatisticsPoint, StatisticsSeries, User,
    UserLinks, UserProfileImage, UserStatistics,
};
pub use params::{
    CollectionPhotosParams, Color, ContentFilter, ListPhotosParams, OrderBy, Orientation,
    Pagination, RandomPhotoParams, SearchOrderBy, SearchPhotosParams, UserLikesParams,
    UserPhotosParams,
};
pub use request::{HttpMethod, RequestOptions};
pub use resources::{Collections, Photos, Search, Users};
pub use transport::Transport;
