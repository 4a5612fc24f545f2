//! Typed query parameters for the resource facades.
//!
//! Every struct has a `Default` matching the API's defaults (page 1, 10
//! per page, newest first), so the usual call site is
//! `ListPhotosParams { page: 2, ..Default::default() }`.

use strum::{AsRefStr, Display};

use crate::request::RequestOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

/// Sort order for photo listings. `Views` and `Downloads` are only
/// accepted on user photo listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Latest,
    Oldest,
    Popular,
    Views,
    Downloads,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum SearchOrderBy {
    Relevant,
    Latest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    BlackAndWhite,
    Black,
    White,
    Yellow,
    Orange,
    Red,
    Purple,
    Magenta,
    Green,
    Teal,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ContentFilter {
    Low,
    High,
}

/// Plain page/per-page pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl Pagination {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        opts.query("page", self.page)
            .query("per_page", self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPhotosParams {
    pub pagination: Pagination,
    pub order_by: OrderBy,
}

impl ListPhotosParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        self.pagination
            .apply(opts)
            .query("order_by", self.order_by)
    }
}

/// Filters for a random photo. Empty strings, empty lists and a zero
/// `count` are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomPhotoParams {
    pub query: Option<String>,
    pub orientation: Option<Orientation>,
    pub collections: Vec<String>,
    pub topics: Vec<String>,
    pub username: Option<String>,
    /// When set, the API returns a list of up to `count` photos.
    pub count: Option<u32>,
}

impl RandomPhotoParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        opts.query_opt("query", non_empty(self.query.as_deref()))
            .query_opt("orientation", self.orientation)
            .query_opt("collections", joined(&self.collections))
            .query_opt("topics", joined(&self.topics))
            .query_opt("username", non_empty(self.username.as_deref()))
            .query_opt("count", self.count.filter(|&n| n > 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPhotosParams {
    pub pagination: Pagination,
    pub order_by: OrderBy,
    /// Include per-photo statistics. `resolution` and `quantity` are only
    /// sent when this is `true`.
    pub stats: bool,
    pub resolution: String,
    pub quantity: u32,
    pub orientation: Option<Orientation>,
}

impl Default for UserPhotosParams {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            order_by: OrderBy::default(),
            stats: false,
            resolution: "days".to_string(),
            quantity: 30,
            orientation: None,
        }
    }
}

impl UserPhotosParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        let mut opts = self
            .pagination
            .apply(opts)
            .query("order_by", self.order_by)
            .query("stats", self.stats);
        if self.stats {
            opts = opts
                .query("resolution", &self.resolution)
                .query("quantity", self.quantity);
        }
        opts.query_opt("orientation", self.orientation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLikesParams {
    pub pagination: Pagination,
    pub order_by: OrderBy,
    pub orientation: Option<Orientation>,
}

impl UserLikesParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        self.pagination
            .apply(opts)
            .query("order_by", self.order_by)
            .query_opt("orientation", self.orientation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPhotosParams {
    pub pagination: Pagination,
    pub orientation: Option<Orientation>,
}

impl CollectionPhotosParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        self.pagination
            .apply(opts)
            .query_opt("orientation", self.orientation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPhotosParams {
    pub pagination: Pagination,
    pub orientation: Option<Orientation>,
    pub color: Option<Color>,
    pub order_by: Option<SearchOrderBy>,
    /// Comma-separated collection IDs.
    pub collections: Option<String>,
    pub content_filter: Option<ContentFilter>,
}

impl SearchPhotosParams {
    pub(crate) fn apply(&self, opts: RequestOptions) -> RequestOptions {
        self.pagination
            .apply(opts)
            .query_opt("orientation", self.orientation)
            .query_opt("color", self.color)
            .query_opt("order_by", self.order_by)
            .query_opt("collections", non_empty(self.collections.as_deref()))
            .query_opt("content_filter", self.content_filter)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
