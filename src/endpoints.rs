//! One function per API operation: method, path, query and decoder.
//!
//! Both clients route their facades through these, so a given call sends
//! the same request and decodes the same way whether it runs async or
//! blocking.

use serde::de::DeserializeOwned;

use crate::errors::Result;
use crate::models::{
    Collection, LinkResponse, Photo, RandomPhotos, SearchPage, User, UserStatistics,
};
use crate::params::{
    CollectionPhotosParams, ListPhotosParams, Pagination, RandomPhotoParams, SearchPhotosParams,
    UserLikesParams, UserPhotosParams,
};
use crate::request::{HttpMethod, RequestOptions};

pub(crate) struct Endpoint<T> {
    pub method: HttpMethod,
    pub path: String,
    pub options: RequestOptions,
    pub decode: fn(&str) -> Result<T>,
}

impl<T: DeserializeOwned> Endpoint<T> {
    fn get(path: String, options: RequestOptions) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            options,
            decode: json::<T>,
        }
    }
}

fn json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

fn link(body: &str) -> Result<String> {
    Ok(serde_json::from_str::<LinkResponse>(body)?.url)
}

fn random_photos(body: &str) -> Result<RandomPhotos> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.is_array() {
        Ok(RandomPhotos::Many(serde_json::from_value(value)?))
    } else {
        Ok(RandomPhotos::Single(Box::new(serde_json::from_value(value)?)))
    }
}

// Photos

pub(crate) fn photo(id: &str) -> Endpoint<Photo> {
    Endpoint::get(format!("/photos/{id}"), RequestOptions::new())
}

pub(crate) fn list_photos(params: &ListPhotosParams) -> Endpoint<Vec<Photo>> {
    Endpoint::get("/photos".into(), params.apply(RequestOptions::new()))
}

pub(crate) fn random_photo(params: &RandomPhotoParams) -> Endpoint<RandomPhotos> {
    Endpoint {
        method: HttpMethod::Get,
        path: "/photos/random".into(),
        options: params.apply(RequestOptions::new()),
        decode: random_photos,
    }
}

pub(crate) fn track_download(id: &str) -> Endpoint<String> {
    Endpoint {
        method: HttpMethod::Get,
        path: format!("/photos/{id}/download"),
        options: RequestOptions::new(),
        decode: link,
    }
}

// Users

pub(crate) fn user(username: &str) -> Endpoint<User> {
    Endpoint::get(format!("/users/{username}"), RequestOptions::new())
}

pub(crate) fn user_portfolio(username: &str) -> Endpoint<String> {
    Endpoint {
        method: HttpMethod::Get,
        path: format!("/users/{username}/portfolio"),
        options: RequestOptions::new(),
        decode: link,
    }
}

pub(crate) fn user_photos(username: &str, params: &UserPhotosParams) -> Endpoint<Vec<Photo>> {
    Endpoint::get(
        format!("/users/{username}/photos"),
        params.apply(RequestOptions::new()),
    )
}

pub(crate) fn user_likes(username: &str, params: &UserLikesParams) -> Endpoint<Vec<Photo>> {
    Endpoint::get(
        format!("/users/{username}/likes"),
        params.apply(RequestOptions::new()),
    )
}

pub(crate) fn user_collections(
    username: &str,
    pagination: &Pagination,
) -> Endpoint<Vec<Collection>> {
    Endpoint::get(
        format!("/users/{username}/collections"),
        pagination.apply(RequestOptions::new()),
    )
}

pub(crate) fn user_statistics(username: &str) -> Endpoint<UserStatistics> {
    Endpoint::get(
        format!("/users/{username}/statistics"),
        RequestOptions::new(),
    )
}

// Collections

pub(crate) fn collection(id: &str) -> Endpoint<Collection> {
    Endpoint::get(format!("/collections/{id}"), RequestOptions::new())
}

pub(crate) fn list_collections(pagination: &Pagination) -> Endpoint<Vec<Collection>> {
    Endpoint::get("/collections".into(), pagination.apply(RequestOptions::new()))
}

pub(crate) fn collection_photos(
    id: &str,
    params: &CollectionPhotosParams,
) -> Endpoint<Vec<Photo>> {
    Endpoint::get(
        format!("/collections/{id}/photos"),
        params.apply(RequestOptions::new()),
    )
}

pub(crate) fn related_collections(id: &str) -> Endpoint<Vec<Collection>> {
    Endpoint::get(format!("/collections/{id}/related"), RequestOptions::new())
}

// Search

pub(crate) fn search_photos(
    query: &str,
    params: &SearchPhotosParams,
) -> Endpoint<SearchPage<Photo>> {
    Endpoint::get(
        "/search/photos".into(),
        params.apply(RequestOptions::new().query("query", query)),
    )
}

pub(crate) fn search_users(query: &str, pagination: &Pagination) -> Endpoint<SearchPage<User>> {
    Endpoint::get(
        "/search/users".into(),
        pagination.apply(RequestOptions::new().query("query", query)),
    )
}

pub(crate) fn search_collections(
    query: &str,
    pagination: &Pagination,
) -> Endpoint<SearchPage<Collection>> {
    Endpoint::get(
        "/search/collections".into(),
        pagination.apply(RequestOptions::new().query("query", query)),
    )
}
