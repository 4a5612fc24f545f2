//! Blocking resource facades. Method-for-method the same as the async ones
//! in `crate::resources`.

use super::transport::Transport;
use crate::endpoints;
use crate::errors::Result;
use crate::models::{Collection, Photo, RandomPhotos, SearchPage, User, UserStatistics};
use crate::params::{
    CollectionPhotosParams, ListPhotosParams, Pagination, RandomPhotoParams, SearchPhotosParams,
    UserLikesParams, UserPhotosParams,
};

/// Photo endpoints. Obtained from [`Client::photos`](super::Client::photos).
#[derive(Debug, Clone, Copy)]
pub struct Photos<'a> {
    transport: &'a Transport,
}

impl<'a> Photos<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Retrieve a single photo.
    pub fn get(&self, id: &str) -> Result<Photo> {
        self.transport.call(endpoints::photo(id))
    }

    /// One page of the editorial feed.
    pub fn list(&self, params: &ListPhotosParams) -> Result<Vec<Photo>> {
        self.transport.call(endpoints::list_photos(params))
    }

    /// One random photo, or several when `params.count` is set.
    pub fn random(&self, params: &RandomPhotoParams) -> Result<RandomPhotos> {
        self.transport.call(endpoints::random_photo(params))
    }

    /// Report a download to Unsplash and return the file URL.
    ///
    /// The API guidelines require this whenever a photo is actually used.
    pub fn track_download(&self, id: &str) -> Result<String> {
        self.transport.call(endpoints::track_download(id))
    }

    /// Download URL for a photo. With `track` set this goes through
    /// [`track_download`](Self::track_download); otherwise it looks the photo
    /// up and returns `urls.full` without reporting anything.
    pub fn download(&self, id: &str, track: bool) -> Result<String> {
        if track {
            return self.track_download(id);
        }
        let photo = self.get(id)?;
        Ok(photo.urls.full.to_string())
    }
}

/// User endpoints. Obtained from [`Client::users`](super::Client::users).
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    transport: &'a Transport,
}

impl<'a> Users<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn get(&self, username: &str) -> Result<User> {
        self.transport.call(endpoints::user(username))
    }

    /// The user's portfolio link.
    pub fn portfolio(&self, username: &str) -> Result<String> {
        self.transport.call(endpoints::user_portfolio(username))
    }

    pub fn photos(&self, username: &str, params: &UserPhotosParams) -> Result<Vec<Photo>> {
        self.transport.call(endpoints::user_photos(username, params))
    }

    /// Photos the user has liked.
    pub fn likes(&self, username: &str, params: &UserLikesParams) -> Result<Vec<Photo>> {
        self.transport.call(endpoints::user_likes(username, params))
    }

    pub fn collections(
        &self,
        username: &str,
        pagination: &Pagination,
    ) -> Result<Vec<Collection>> {
        self.transport.call(endpoints::user_collections(username, pagination))
    }

    pub fn statistics(&self, username: &str) -> Result<UserStatistics> {
        self.transport.call(endpoints::user_statistics(username))
    }
}

/// Collection endpoints. Obtained from
/// [`Client::collections`](super::Client::collections).
#[derive(Debug, Clone, Copy)]
pub struct Collections<'a> {
    transport: &'a Transport,
}

impl<'a> Collections<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn get(&self, id: &str) -> Result<Collection> {
        self.transport.call(endpoints::collection(id))
    }

    pub fn list(&self, pagination: &Pagination) -> Result<Vec<Collection>> {
        self.transport.call(endpoints::list_collections(pagination))
    }

    pub fn photos(&self, id: &str, params: &CollectionPhotosParams) -> Result<Vec<Photo>> {
        self.transport.call(endpoints::collection_photos(id, params))
    }

    pub fn related(&self, id: &str) -> Result<Vec<Collection>> {
        self.transport.call(endpoints::related_collections(id))
    }
}

/// Search endpoints. Obtained from [`Client::search`](super::Client::search).
///
/// Each call returns a single [`SearchPage`]; request the next page by
/// bumping `page` in the parameters.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    transport: &'a Transport,
}

impl<'a> Search<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn photos(&self, query: &str, params: &SearchPhotosParams) -> Result<SearchPage<Photo>> {
        self.transport.call(endpoints::search_photos(query, params))
    }

    pub fn users(&self, query: &str, pagination: &Pagination) -> Result<SearchPage<User>> {
        self.transport.call(endpoints::search_users(query, pagination))
    }

    pub fn collections(
        &self,
        query: &str,
        pagination: &Pagination,
    ) -> Result<SearchPage<Collection>> {
        self.transport.call(endpoints::search_collections(query, pagination))
    }
}
