use chrono::NaiveDate;
use serde::Serialize;

/// An author of a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    name: String,
}

impl Author {
    /// Creates a new author with the given display name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// The display name of the author.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Book information resolved from a data provider.
///
/// The identifier and title are always present, every other field is optional and set with the
/// chaining `with_*` methods:
///
/// ```
/// use rakuten_books::{Author, Book};
///
/// let book = Book::new("9784873119786", "プログラミングRust")
///     .with_authors(vec![Author::new("Jim Blandy")])
///     .with_price(Some(5280.0))
///     .with_price_code(Some("JPY".to_owned()));
///
/// assert_eq!("Jim Blandy", book.authors()[0].name());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: String,
    title: String,
    subtitle: Option<String>,
    description: Option<String>,
    cover_uri: Option<String>,
    authors: Vec<Author>,
    publisher: Option<String>,
    published_at: Option<NaiveDate>,
    price: Option<f64>,
    price_code: Option<String>,
}

impl Book {
    /// Creates a book with the required identifier and title.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            description: None,
            cover_uri: None,
            authors: Vec::new(),
            publisher: None,
            published_at: None,
            price: None,
            price_code: None,
        }
    }

    /// The identifier of the book, for example its ISBN.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The main title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The subtitle, when the book has one.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// A short description or blurb.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Location of the cover image.
    #[must_use]
    pub fn cover_uri(&self) -> Option<&str> {
        self.cover_uri.as_deref()
    }

    /// Authors in the order given by the provider.
    #[must_use]
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Name of the publisher.
    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        self.publisher.as_deref()
    }

    /// The date the book went on sale.
    #[must_use]
    pub const fn published_at(&self) -> Option<NaiveDate> {
        self.published_at
    }

    /// The price in the currency of [`Book::price_code`].
    #[must_use]
    pub const fn price(&self) -> Option<f64> {
        self.price
    }

    /// ISO 4217 currency code of [`Book::price`].
    #[must_use]
    pub fn price_code(&self) -> Option<&str> {
        self.price_code.as_deref()
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the location of the cover image.
    #[must_use]
    pub fn with_cover_uri(mut self, cover_uri: Option<String>) -> Self {
        self.cover_uri = cover_uri;
        self
    }

    /// Replaces the authors.
    #[must_use]
    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    /// Sets the publisher name.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Option<String>) -> Self {
        self.publisher = publisher;
        self
    }

    /// Sets the publication date.
    #[must_use]
    pub const fn with_published_at(mut self, published_at: Option<NaiveDate>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Sets the price amount.
    #[must_use]
    pub const fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Sets the currency code of the price.
    #[must_use]
    pub fn with_price_code(mut self, price_code: Option<String>) -> Self {
        self.price_code = price_code;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Author, Book};

    #[test]
    fn new_book_only_has_required_fields() {
        let book = Book::new("4088725093", "ONE PIECE 1");

        assert_eq!("4088725093", book.id());
        assert_eq!("ONE PIECE 1", book.title());
        assert!(book.authors().is_empty());
        assert_eq!(None, book.subtitle());
        assert_eq!(None, book.published_at());
        assert_eq!(None, book.price_code());
    }

    #[test]
    fn setters_chain_and_overwrite() {
        let date = NaiveDate::from_ymd_opt(1997, 12, 24).unwrap();
        let book = Book::new("4088725093", "ONE PIECE 1")
            .with_publisher(Some("集英社".to_owned()))
            .with_published_at(Some(date))
            .with_authors(vec![Author::new("尾田栄一郎")])
            .with_publisher(None);

        assert_eq!(None, book.publisher());
        assert_eq!(Some(date), book.published_at());
        assert_eq!("尾田栄一郎", book.authors()[0].to_string());
    }

    #[test]
    fn serializes_published_at_as_iso_date() {
        let book = Book::new("1", "t")
            .with_published_at(NaiveDate::from_ymd_opt(2020, 1, 5));
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!("2020-01-05", json["published_at"]);
        assert_eq!("t", json["title"]);
    }
}
