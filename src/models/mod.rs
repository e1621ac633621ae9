//! Data models for the bookstore

pub mod auth;
pub mod book;
pub mod bookstore;
pub mod borrowing;
pub mod client;
pub mod sale;

// Re-export commonly used types
pub use book::{Book, BookCondition};
pub use bookstore::{BookInventory, Bookstore};
pub use borrowing::{Borrowing, BorrowingStatus, SourceType};
pub use client::Client;
pub use sale::Sale;

/// Maps a string-backed enum onto a Postgres TEXT column.
///
/// The type must provide `as_str()` and a `FromStr` impl with `Err = String`.
macro_rules! impl_text_column {
    ($ty:ty) => {
        impl sqlx::Type<sqlx::Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s: &str = sqlx::Decode::<sqlx::Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl sqlx::Encode<'_, sqlx::Postgres> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> sqlx::encode::IsNull {
                <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

pub(crate) use impl_text_column;
