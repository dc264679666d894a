#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{process, time::Duration};

mod output;

use rakuten_books as lib;

use lib::{DefaultRequestFactory, Isbn, IsbnValidator, RakutenScraper};

use clap::Parser;
use eyre::{eyre, Result, WrapErr};
use log::{error, info, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    // if quiet then ignore verbosity but still show errors
    let verbosity = if cli.quiet {
        0
    } else {
        usize::from(cli.verbosity) + 1
    };

    stderrlog::new().verbosity(verbosity).init()?;

    if !Isbn.is_valid(&cli.isbn) {
        return Err(eyre!("'{}' is not a valid ISBN", cli.isbn));
    }
    let isbn = Isbn::normalize(&cli.isbn);
    trace!("Normalized ISBN to '{isbn}'");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .wrap_err("Unable to create the HTTP client")?;

    let scraper = RakutenScraper::new(cli.application_id, client, DefaultRequestFactory)?;

    let book = scraper
        .lookup(&isbn)
        .wrap_err_with(|| format!("Lookup of ISBN '{isbn}' failed"))?;

    match &book {
        Some(_) => trace!("Book found for '{isbn}'"),
        None => info!("Rakuten Books API has no unique match for '{isbn}'"),
    }

    if let Some(text) = output::render(book.as_ref(), &isbn, cli.json, cli.quiet)? {
        print!("{text}");
    }

    Ok(())
}

#[derive(Parser)]
#[clap(name = "rakuten-books")]
#[clap(about = "Look up book information by ISBN using the Rakuten Books API")]
#[clap(version, author)]
struct Cli {
    /// The ISBN-10 or ISBN-13 to search for, hyphens are allowed
    isbn: String,

    /// The Rakuten application id used to authenticate with the API
    #[clap(short, long, env = "RAKUTEN_APPLICATION_ID", hide_env_values = true)]
    application_id: String,

    /// Seconds to wait for the API before giving up
    #[clap(short, long, default_value = "10")]
    timeout: u64,

    /// Print the book as JSON instead of a summary
    #[clap(long)]
    json: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from writing to stdout, errors will still be printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}
