use log::debug;

use crate::{isbn::IsbnValidator, Book, Error};

/// Something that can find book information for an identifier.
pub trait Scraper {
    /// Looks up the book identified by `id`.
    ///
    /// `Ok(None)` means the data provider does not know the book.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the data provider fails or returns unusable data.
    fn scrape(&self, id: &str) -> Result<Option<Book>, Error>;
}

impl<S: Scraper + ?Sized> Scraper for Box<S> {
    fn scrape(&self, id: &str) -> Result<Option<Book>, Error> {
        (**self).scrape(id)
    }
}

/// A [`Scraper`] that only forwards identifiers accepted by an [`IsbnValidator`].
///
/// Identifiers that are not ISBNs are never sent to the data provider and resolve to `Ok(None)`.
#[derive(Debug)]
pub struct IsbnScraper<V, S> {
    validator: V,
    scraper: S,
}

impl<V: IsbnValidator, S: Scraper> IsbnScraper<V, S> {
    /// Wraps `scraper` so it only sees ids accepted by `validator`.
    pub const fn new(validator: V, scraper: S) -> Self {
        Self { validator, scraper }
    }

    /// Returns `true` when `id` would be forwarded to the inner scraper.
    pub fn supports(&self, id: &str) -> bool {
        self.validator.is_valid(id)
    }

    /// The wrapped scraper.
    pub const fn inner(&self) -> &S {
        &self.scraper
    }
}

impl<V: IsbnValidator, S: Scraper> Scraper for IsbnScraper<V, S> {
    fn scrape(&self, id: &str) -> Result<Option<Book>, Error> {
        if self.supports(id) {
            self.scraper.scrape(id)
        } else {
            debug!("'{id}' is not a valid ISBN - skipping");
            Ok(None)
        }
    }
}

/// Tries each scraper in turn and returns the first book found.
///
/// An error from any scraper stops the search.
#[derive(Default)]
pub struct ScraperChain {
    scrapers: Vec<Box<dyn Scraper + Send + Sync>>,
}

impl ScraperChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scraper, it is tried after every scraper already in the chain.
    #[must_use]
    pub fn with<S: Scraper + Send + Sync + 'static>(mut self, scraper: S) -> Self {
        self.scrapers.push(Box::new(scraper));
        self
    }

    /// The number of scrapers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    /// Returns `true` when the chain has no scrapers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }
}

impl Scraper for ScraperChain {
    fn scrape(&self, id: &str) -> Result<Option<Book>, Error> {
        for scraper in &self.scrapers {
            if let Some(book) = scraper.scrape(id)? {
                return Ok(Some(book));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{IsbnScraper, Scraper, ScraperChain};
    use crate::{isbn::Isbn, Book, Error, ErrorKind};

    struct Found(&'static str);

    impl Scraper for Found {
        fn scrape(&self, id: &str) -> Result<Option<Book>, Error> {
            Ok(Some(Book::new(id, self.0)))
        }
    }

    struct NotFound;

    impl Scraper for NotFound {
        fn scrape(&self, _: &str) -> Result<Option<Book>, Error> {
            Ok(None)
        }
    }

    struct Broken;

    impl Scraper for Broken {
        fn scrape(&self, _: &str) -> Result<Option<Book>, Error> {
            Err(Error::new(ErrorKind::Provider, "broken"))
        }
    }

    #[derive(Default)]
    struct Counting(AtomicUsize);

    impl Scraper for Counting {
        fn scrape(&self, _: &str) -> Result<Option<Book>, Error> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    }

    #[test]
    fn invalid_isbn_is_not_forwarded() {
        let scraper = IsbnScraper::new(Isbn, Counting::default());

        assert!(scraper.scrape("not-an-isbn").unwrap().is_none());
        assert_eq!(0, scraper.inner().0.load(Ordering::SeqCst));

        assert!(scraper.scrape("4088725093").unwrap().is_none());
        assert_eq!(1, scraper.inner().0.load(Ordering::SeqCst));
    }

    #[test]
    fn chain_returns_first_found() {
        let chain = ScraperChain::new()
            .with(NotFound)
            .with(Found("first"))
            .with(Found("second"));

        let book = chain.scrape("4088725093").unwrap().unwrap();
        assert_eq!("first", book.title());
        assert_eq!(3, chain.len());
    }

    #[test]
    fn chain_stops_on_error() {
        let chain = ScraperChain::new().with(Broken).with(Found("never"));

        let err = chain.scrape("4088725093").unwrap_err();
        assert_eq!(ErrorKind::Provider, err.kind());
    }

    #[test]
    fn empty_chain_finds_nothing() {
        let chain = ScraperChain::new();

        assert!(chain.is_empty());
        assert!(chain.scrape("4088725093").unwrap().is_none());
    }
}
