use rakuten_books::Book;

/// What to print to stdout for a lookup result, `None` when nothing should be printed.
pub fn render(
    book: Option<&Book>,
    isbn: &str,
    json: bool,
    quiet: bool,
) -> serde_json::Result<Option<String>> {
    if quiet {
        return Ok(None);
    }

    match book {
        Some(book) if json => serde_json::to_string_pretty(book).map(|mut s| {
            s.push('\n');
            Some(s)
        }),
        Some(book) => Ok(Some(summary(book))),
        None => Ok(Some(format!("No book found for ISBN '{isbn}'\n"))),
    }
}

/// Human readable, one field per line description of a book. Missing fields are left out.
pub fn summary(book: &Book) -> String {
    let mut lines = vec![field("Title:", book.title())];

    if let Some(subtitle) = book.subtitle() {
        lines.push(field("Subtitle:", subtitle));
    }

    let authors = book
        .authors()
        .iter()
        .map(|a| a.name())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>();
    if !authors.is_empty() {
        lines.push(field("Authors:", &authors.join(", ")));
    }

    if let Some(publisher) = book.publisher() {
        lines.push(field("Publisher:", publisher));
    }
    if let Some(date) = book.published_at() {
        lines.push(field("Published:", &date.to_string()));
    }
    if let Some(price) = book.price() {
        let price = format!("{price} {}", book.price_code().unwrap_or_default());
        lines.push(field("Price:", price.trim_end()));
    }
    lines.push(field("ISBN:", book.id()));
    if let Some(cover) = book.cover_uri() {
        lines.push(field("Cover:", cover));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn field(label: &str, value: &str) -> String {
    format!("{label:<11}{value}")
}

#[cfg(test)]
mod tests {
    use rakuten_books::{Author, Book};

    use super::{render, summary};

    fn one_piece() -> Book {
        Book::new("9784088725093", "ONE PIECE 1")
            .with_authors(vec![Author::new("尾田栄一郎")])
            .with_price(Some(484.0))
            .with_price_code(Some("JPY".to_owned()))
    }

    #[test]
    fn summary_skips_missing_fields() {
        assert_eq!(
            "Title:     ONE PIECE 1\nAuthors:   尾田栄一郎\nPrice:     484 JPY\nISBN:      9784088725093\n",
            summary(&one_piece())
        );
    }

    #[test]
    fn summary_hides_empty_author() {
        let book = Book::new("1", "t").with_authors(vec![Author::new("")]);

        assert!(!summary(&book).contains("Authors:"));
    }

    #[test]
    fn quiet_prints_nothing_even_when_found() {
        let book = one_piece();

        assert_eq!(None, render(Some(&book), "9784088725093", false, true).unwrap());
        assert_eq!(None, render(Some(&book), "9784088725093", true, true).unwrap());
        assert_eq!(None, render(None, "9784088725093", false, true).unwrap());
    }

    #[test]
    fn found_book_is_printed_as_summary_or_json() {
        let book = one_piece();

        let text = render(Some(&book), "9784088725093", false, false).unwrap().unwrap();
        assert!(text.starts_with("Title:     ONE PIECE 1\n"));

        let json = render(Some(&book), "9784088725093", true, false).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!("ONE PIECE 1", value["title"]);
    }

    #[test]
    fn not_found_is_reported() {
        assert_eq!(
            Some("No book found for ISBN '9784088725093'\n".to_owned()),
            render(None, "9784088725093", false, false).unwrap()
        );
    }
}
