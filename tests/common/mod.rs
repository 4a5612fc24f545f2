#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_KEY: &str = "test_key";

pub fn user_json(username: &str) -> Value {
    json!({
        "id": format!("id-{username}"),
        "username": username,
        "name": "User 1",
        "total_likes": 0,
        "total_photos": 0,
        "total_collections": 0,
        "profile_image": {
            "small": "http://e.com/s",
            "medium": "http://e.com/m",
            "large": "http://e.com/l"
        },
        "links": {
            "self": "http://e.com",
            "html": "http://e.com",
            "photos": "http://e.com",
            "likes": "http://e.com",
            "portfolio": "http://e.com",
            "following": "http://e.com",
            "followers": "http://e.com"
        }
    })
}

pub fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "width": 100,
        "height": 100,
        "color": "#000",
        "likes": 0,
        "urls": {
            "raw": "http://e.com/raw",
            "full": "http://e.com/full",
            "regular": "http://e.com/reg",
            "small": "http://e.com/small",
            "thumb": "http://e.com/thumb"
        },
        "links": {
            "self": "http://e.com",
            "html": "http://e.com",
            "download": "http://e.com/dl",
            "download_location": "http://e.com/dl_loc"
        },
        "user": user_json("u1")
    })
}

pub fn collection_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Collection",
        "published_at": "2024-01-01T00:00:00Z",
        "last_collected_at": "2024-01-02T00:00:00Z",
        "updated_at": "2024-01-03T00:00:00Z",
        "total_photos": 1,
        "links": {
            "self": "http://e.com/c",
            "html": "http://e.com/c",
            "photos": "http://e.com/c/photos",
            "related": "http://e.com/c/related"
        },
        "user": user_json("curator")
    })
}

/// Status codes the error taxonomy distinguishes, plus a generic one.
pub const ERROR_STATUSES: [u16; 5] = [401, 404, 422, 429, 500];

/// Mount `GET /status/{code}` for every code in [`ERROR_STATUSES`], each
/// answering with `{"errors": ["failure <code>"]}`. The 429 also carries
/// rate limit headers.
pub async fn mount_error_routes(server: &MockServer) {
    for status in ERROR_STATUSES {
        let mut template = ResponseTemplate::new(status)
            .set_body_string(error_body(status));
        if status == 429 {
            template = template
                .insert_header("X-Ratelimit-Limit", "50")
                .insert_header("X-Ratelimit-Remaining", "10");
        }
        Mock::given(method("GET"))
            .and(path(format!("/status/{status}")))
            .respond_with(template)
            .mount(server)
            .await;
    }
}

pub fn error_body(status: u16) -> String {
    format!(r#"{{"errors": ["failure {status}"]}}"#)
}
