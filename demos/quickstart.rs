//! Quick-start tour of the Unsplash client.
//!
//! Run with:
//!   cargo run --example quickstart -- <access-key> [username]

use unsplash::{
    Client, ListPhotosParams, OrderBy, Pagination, RandomPhotoParams, RandomPhotos,
    SearchPhotosParams, UnsplashError,
};

#[tokio::main]
async fn main() -> unsplash::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(access_key) = args.next() else {
        eprintln!("usage: quickstart <access-key> [username]");
        std::process::exit(2);
    };
    let username = args.next().unwrap_or_else(|| "unsplash".to_string());

    // -----------------------------------------------------------------------
    // 1. Create a client
    // -----------------------------------------------------------------------
    let client = Client::new(access_key)?;

    // -----------------------------------------------------------------------
    // 2. Latest editorial photos
    // -----------------------------------------------------------------------
    let params = ListPhotosParams {
        pagination: Pagination { page: 1, per_page: 5 },
        order_by: OrderBy::Latest,
    };
    for photo in client.photos().list(&params).await? {
        println!("  {} | {}x{} | {}", photo.id, photo.width, photo.height, photo.user.name);
    }
    println!();

    // -----------------------------------------------------------------------
    // 3. A few random photos
    // -----------------------------------------------------------------------
    let params = RandomPhotoParams {
        query: Some("mountains".into()),
        count: Some(3),
        ..Default::default()
    };
    for photo in client.photos().random(&params).await?.into_vec() {
        println!("  random: {}", photo.urls.small);
    }
    println!();

    // -----------------------------------------------------------------------
    // 4. Search, page by page
    // -----------------------------------------------------------------------
    let mut params = SearchPhotosParams::default();
    loop {
        let page = client.search().photos("forest", &params).await?;
        println!("page {}/{}", params.pagination.page, page.total_pages);
        for photo in &page.results {
            println!("  {}", photo.alt_description.as_deref().unwrap_or("-"));
        }
        if !page.has_more(params.pagination.page) || params.pagination.page >= 3 {
            break;
        }
        params.pagination.page += 1;
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. A user, with error handling
    // -----------------------------------------------------------------------
    match client.users().get(&username).await {
        Ok(user) => println!("{} has {} photos", user.name, user.total_photos),
        Err(UnsplashError::NotFound { .. }) => println!("no user named {username}"),
        Err(UnsplashError::RateLimit {
            remaining, limit, ..
        }) => println!("rate limited: {remaining}/{limit} left"),
        Err(e) => return Err(e),
    }

    // -----------------------------------------------------------------------
    // 6. Track a download before using a photo
    // -----------------------------------------------------------------------
    if let RandomPhotos::Single(photo) = client.photos().random(&RandomPhotoParams::default()).await? {
        let url = client.photos().download(&photo.id, true).await?;
        println!("download {} from {url}", photo.id);
    }

    client.close();
    Ok(())
}
