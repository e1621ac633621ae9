//! Sample catalog seeding

use rand::{seq::SliceRandom, Rng};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookCondition},
    repository::Repository,
};

const TITLE_PREFIXES: &[&str] = &["The Art of", "Introduction to", "Mastering", "Guide to", "Secrets of"];
const SUBJECTS: &[&str] = &["Python", "JavaScript", "Data Science", "Machine Learning", "Web Design", "Cooking"];
const FIRST_NAMES: &[&str] = &["John", "Jane", "Mike", "Sarah", "David"];
const LAST_NAMES: &[&str] = &["Smith", "Johnson", "Garcia", "Brown", "Davis", "Wilson"];
const GENRES: &[&str] = &["Technology", "Science", "Fiction", "Non-Fiction", "Education", "Biography"];

/// Replace the books table with `count` generated books.
pub async fn reseed_books(repository: &Repository, count: usize) -> AppResult<u64> {
    let removed = repository.books.delete_all().await?;
    let books = sample_books(&mut rand::thread_rng(), count);
    let inserted = repository.books.create_many(&books).await?;

    tracing::info!(removed, inserted, "Seeded sample books");
    Ok(inserted)
}

/// Generate plausible books; every third one is part of a numbered series.
pub fn sample_books<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| {
            let mut title = format!("{} {}", pick(rng, TITLE_PREFIXES), pick(rng, SUBJECTS));
            if i % 3 == 0 {
                title.push_str(&format!(" Volume {}", i / 3 + 1));
            }

            Book {
                id: Uuid::new_v4(),
                isbn: format!("978{}", rng.gen_range(1_000_000_000u64..10_000_000_000)),
                title,
                author: format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
                genre: Some(pick(rng, GENRES).to_string()),
                price: Decimal::new(rng.gen_range(1599..=8999), 2),
                condition: *BookCondition::ALL.choose(rng).unwrap_or(&BookCondition::New),
            }
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &'static [&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}
