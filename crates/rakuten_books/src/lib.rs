#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # `rakuten_books`
//!
//! `rakuten_books` looks up book information by ISBN using the Rakuten Books search API and
//! normalizes the response into a [`Book`].
//!
//! The HTTP client is injected through the [`Transport`] trait, which is implemented for
//! [`reqwest::blocking::Client`], so lookups can run against any client or a test double.
//!
//! ```no_run
//! use rakuten_books::{Isbn, IsbnScraper, RakutenScraper, Scraper};
//!
//! # fn main() -> Result<(), rakuten_books::Error> {
//! let scraper = IsbnScraper::new(Isbn, RakutenScraper::with_application_id("my-app-id")?);
//!
//! if let Some(book) = scraper.scrape("978-4-87311-978-6")? {
//!     println!("{} ({:?})", book.title(), book.published_at());
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod book;
mod error;
mod isbn;
mod raw;
mod scraper;

pub use api::{
    rakuten::RakutenScraper, DefaultRequestFactory, Request, RequestFactory, Response, Transport,
};
pub use book::{Author, Book};
pub use error::{Error, ErrorKind};
pub use isbn::{Isbn, IsbnValidator};
pub use raw::RawRecord;
pub use scraper::{IsbnScraper, Scraper, ScraperChain};

use log::trace;

/// Search for a book by `isbn` with a default client and the given Rakuten `application_id`.
///
/// The `isbn` is validated first and an invalid ISBN is reported as not found without sending
/// a request.
///
/// # Errors
///
/// An `Err` is returned when `application_id` is empty.
/// An `Err` is returned when the API cannot be reached, rejects the application id or responds
/// with data that cannot be turned into a [`Book`].
#[inline]
pub fn book_by_isbn(application_id: &str, isbn: &str) -> Result<Option<Book>, Error> {
    trace!("Search book by ISBN of '{isbn}'");
    IsbnScraper::new(Isbn, RakutenScraper::with_application_id(application_id)?).scrape(isbn)
}
