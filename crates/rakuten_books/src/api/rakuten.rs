use chrono::NaiveDate;
use log::{debug, info, trace, warn};
use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde_json::Value;

use crate::{
    book::{Author, Book},
    raw::RawRecord,
    scraper::Scraper,
    Error,
};

use super::{DefaultRequestFactory, RequestFactory, Transport};

const RAKUTEN_BOOKS_URL: &str = "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404";

/// Rakuten only sells in yen.
const PRICE_CODE: &str = "JPY";

const INVALID_APPLICATION_ID: &str = "application id is invalid.";

/// Everything but the RFC 3986 unreserved characters.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Looks up books by ISBN using the Rakuten Books search API.
///
/// A lookup only succeeds when the API matches exactly one book, any other number of matches is
/// reported as `Ok(None)`.
#[derive(Debug)]
pub struct RakutenScraper<C = reqwest::blocking::Client, F = DefaultRequestFactory> {
    application_id: String,
    client: C,
    request_factory: F,
}

impl RakutenScraper {
    /// Creates a scraper using a default blocking reqwest client.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::InvalidConfiguration`](crate::ErrorKind::InvalidConfiguration)
    /// is returned when `application_id` is empty.
    pub fn with_application_id<S: Into<String>>(application_id: S) -> Result<Self, Error> {
        Self::new(
            application_id,
            reqwest::blocking::Client::default(),
            DefaultRequestFactory,
        )
    }
}

impl<C, F> RakutenScraper<C, F>
where
    C: Transport,
    F: RequestFactory,
{
    /// Creates a scraper with the credential, HTTP client and request factory to use.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::InvalidConfiguration`](crate::ErrorKind::InvalidConfiguration)
    /// is returned when `application_id` is empty.
    pub fn new<S: Into<String>>(
        application_id: S,
        client: C,
        request_factory: F,
    ) -> Result<Self, Error> {
        let application_id = checked_application_id(application_id.into())?;
        Ok(Self {
            application_id,
            client,
            request_factory,
        })
    }

    /// The application id sent with every request.
    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Replaces the application id sent with every request.
    ///
    /// # Errors
    ///
    /// An `Err` with [`ErrorKind::InvalidConfiguration`](crate::ErrorKind::InvalidConfiguration)
    /// is returned when `application_id` is empty, the current id is kept.
    pub fn set_application_id<S: Into<String>>(&mut self, application_id: S) -> Result<(), Error> {
        self.application_id = checked_application_id(application_id.into())?;
        Ok(())
    }

    /// The client requests are sent with.
    pub const fn http_client(&self) -> &C {
        &self.client
    }

    /// Replaces the client requests are sent with.
    pub fn set_http_client(&mut self, client: C) {
        self.client = client;
    }

    /// The factory used to build requests.
    pub const fn request_factory(&self) -> &F {
        &self.request_factory
    }

    /// Replaces the factory used to build requests.
    pub fn set_request_factory(&mut self, request_factory: F) {
        self.request_factory = request_factory;
    }

    /// Searches the API for the book with the given `isbn`.
    ///
    /// The `isbn` is sent as given, validating it is left to the caller, see
    /// [`IsbnScraper`](crate::IsbnScraper).
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the request cannot be sent, the response is not JSON, the
    /// application id is rejected or the matched book contains data that cannot be mapped.
    pub fn lookup(&self, isbn: &str) -> Result<Option<Book>, Error> {
        info!("Searching for ISBN '{isbn}' using Rakuten Books API");
        let request = self.create_request(isbn);

        let response = self.client.send(&request).map_err(|e| {
            let message = e.message().map_or_else(|| e.to_string(), str::to_owned);
            Error::provider(message).with_code(e.code()).with_source(e)
        })?;

        trace!("Received status {}", response.status());

        let json: Value = serde_json::from_str(response.body())
            .map_err(|e| Error::provider(e.to_string()).with_source(e))?;

        if response.status() == 401 {
            warn!("Rakuten Books API rejected the application id");
            let message = json
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or(INVALID_APPLICATION_ID);
            return Err(Error::provider(message).with_code(Some(401)));
        }

        if response.status() != 200 {
            debug!("No book found - status {}", response.status());
            return Ok(None);
        }

        let count = json.get("count").and_then(Value::as_i64);
        if count != Some(1) {
            debug!("No unique book found - count was {count:?}");
            return Ok(None);
        }

        let item = match json.pointer("/Items/0/Item") {
            Some(Value::Object(item)) => item.clone(),
            _ => return Err(Error::provider("response is missing Items[0].Item")),
        };

        trace!("Request was successful");

        generate_book(&RawRecord::new(item)).map(Some)
    }

    fn create_request(&self, isbn: &str) -> super::Request {
        let query = [
            ("format", "json"),
            ("isbn", isbn),
            ("applicationId", self.application_id()),
        ]
        .iter()
        .map(|(key, val)| format!("{key}={}", utf8_percent_encode(val, QUERY_VALUE_ENCODE_SET)))
        .collect::<Vec<_>>()
        .join("&");

        self.request_factory
            .create("GET", &format!("{RAKUTEN_BOOKS_URL}?{query}"))
    }
}

impl<C, F> Scraper for RakutenScraper<C, F>
where
    C: Transport,
    F: RequestFactory,
{
    fn scrape(&self, id: &str) -> Result<Option<Book>, Error> {
        self.lookup(id)
    }
}

fn checked_application_id(application_id: String) -> Result<String, Error> {
    if application_id.is_empty() {
        Err(Error::invalid_configuration("application id must not be empty"))
    } else {
        Ok(application_id)
    }
}

/// Maps a matched `Item` into a [`Book`].
///
/// # Errors
///
/// An `Err` is returned when `isbn` or `title` are missing or when `salesDate` has the expected
/// shape but is not a real date.
pub(crate) fn generate_book(record: &RawRecord) -> Result<Book, Error> {
    let isbn = string_field(record, "isbn")
        .ok_or_else(|| Error::provider("matched item has no isbn"))?;
    let title = string_field(record, "title")
        .ok_or_else(|| Error::provider("matched item has no title"))?;

    let published_at = generate_published_at(record.get_str("salesDate").unwrap_or_default())?;

    // Only the empty string means "no subtitle", "0" is a real subtitle.
    let subtitle = string_field(record, "subTitle").filter(|s| !s.is_empty());

    let authors = split_authors(record.get_str("author").unwrap_or_default());

    let price = record.get("itemPrice").and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    });

    Ok(Book::new(isbn, title)
        .with_subtitle(subtitle)
        .with_description(string_field(record, "itemCaption"))
        .with_cover_uri(string_field(record, "largeImageUrl"))
        .with_authors(authors)
        .with_publisher(string_field(record, "publisherName"))
        .with_published_at(published_at)
        .with_price(price)
        .with_price_code(Some(PRICE_CODE.to_owned())))
}

/// Strings are taken as-is and other scalars as their JSON text. Arrays and objects are ignored.
fn string_field(record: &RawRecord, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Splits the `/` separated author list.
///
/// An empty list still produces a single author with an empty name.
pub(crate) fn split_authors(authors: &str) -> Vec<Author> {
    authors.split('/').map(|a| Author::new(a.trim())).collect()
}

/// Parses a `salesDate` of the form `2020年01月05日`.
///
/// Dates in any other form, such as `2020年01月頃` or `""`, are not an error and resolve to
/// `None`.
///
/// # Errors
///
/// An `Err` is returned when the date has the expected form but is not a valid calendar date.
pub(crate) fn generate_published_at(date: &str) -> Result<Option<NaiveDate>, Error> {
    static SALES_DATE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^([0-9]+)年([0-9]+)月([0-9]+)日$").unwrap());

    let Some(caps) = SALES_DATE_RE.captures(date) else {
        trace!("salesDate '{date}' is not a full date");
        return Ok(None);
    };

    let invalid = || Error::provider(format!("salesDate '{date}' is not a valid date"));

    let year = caps[1].parse::<i32>().map_err(|e| invalid().with_source(e))?;
    let month = caps[2].parse::<u32>().map_err(|e| invalid().with_source(e))?;
    let day = caps[3].parse::<u32>().map_err(|e| invalid().with_source(e))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(invalid)
}
