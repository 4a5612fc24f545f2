//! A blocking Unsplash client, for programs without an async runtime.
//!
//! Mirrors the async API one-to-one: same builder, same facades, same
//! errors. Every call blocks the current thread until the response arrives.
//!
//! ```no_run
//! use unsplash::blocking::Client;
//! use unsplash::ListPhotosParams;
//!
//! # fn example() -> unsplash::Result<()> {
//! let client = Client::new("your-access-key")?;
//! for photo in client.photos().list(&ListPhotosParams::default())? {
//!     println!("{} ({}x{})", photo.id, photo.width, photo.height);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Like `reqwest::blocking`, this client must not be created or used from
//! inside an async runtime.

mod client;
mod resources;
mod transport;

pub use client::Client;
pub use resources::{Collections, Photos, Search, Users};
pub use transport::Transport;
