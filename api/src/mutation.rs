//! GraphQL mutation root and resolver implementations

use async_graphql::{Context, Object, Result};
use sparcs_api_types::Book;

use crate::store::BookStore;

/// Root mutation type providing book collection writes
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book to the local collection
    ///
    /// Arguments pass through without validation: absent title or author
    /// are stored as null, and duplicates are permitted. The collection is
    /// flushed to disk before this returns; a flush failure fails the
    /// mutation without corrupting previously persisted books.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Book title")] title: Option<String>,
        #[graphql(desc = "Author name")] author: Option<String>,
    ) -> Result<Option<Book>> {
        let store = ctx.data::<BookStore>()?;
        match store.insert(title, author).await {
            Ok(book) => Ok(Some(book)),
            Err(e) => Err(async_graphql::Error::new(format!("Failed to persist book: {}", e))),
        }
    }
}
