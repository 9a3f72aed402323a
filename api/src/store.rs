//! Local book collection with write-through persistence
//!
//! The store owns the only mutable shared state in the gateway: an
//! in-memory list of books mirrored to a single pretty-printed JSON file.
//! Every insert rewrites the whole file; the file is loaded back fully on
//! startup.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use sparcs_api_types::Book;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

/// Book store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure reading or flushing the persistence file
    #[error("book store I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persistence file exists but does not hold a JSON book list
    #[error("book store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

struct Inner {
    books: Vec<Book>,
    path: PathBuf,
}

/// In-process book collection with write-through persistence
///
/// Cloning is cheap and all clones share the same collection. A single
/// async mutex guards both the in-memory list and the file flush, so
/// concurrent inserts are applied and flushed one at a time and cannot
/// clobber each other's writes.
#[derive(Clone)]
pub struct BookStore {
    inner: Arc<Mutex<Inner>>,
}

impl BookStore {
    /// Load the store from its persistence file
    ///
    /// A missing file yields an empty store; a file that cannot be read or
    /// parsed is a startup-fatal error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let books: Vec<Book> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), count = books.len(), "book store loaded");
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner { books, path })),
        })
    }

    /// Snapshot of the current collection contents
    pub async fn list(&self) -> Vec<Book> {
        self.inner.lock().await.books.clone()
    }

    /// Append a book and flush the whole store to disk
    ///
    /// No argument validation is performed: absent title or author are
    /// stored as null. The returned book is exactly the inserted record.
    /// On flush failure the append is rolled back and the error is
    /// returned; the previously persisted file is left intact because the
    /// flush writes to a temporary file and renames it into place.
    pub async fn insert(&self, title: Option<String>, author: Option<String>) -> Result<Book, StoreError> {
        let book = Book { title, author };

        let mut inner = self.inner.lock().await;
        inner.books.push(book.clone());
        if let Err(e) = flush(&inner.path, &inner.books).await {
            inner.books.pop();
            return Err(e);
        }

        debug!(count = inner.books.len(), "book inserted and flushed");
        Ok(book)
    }
}

/// Rewrite the persistence file with the full collection
async fn flush(path: &Path, books: &[Book]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(books)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("books.json")
    }

    #[tokio::test]
    async fn missing_file_loads_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookStore::load(store_path(&dir)).await.unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "not json at all").unwrap();

        assert!(matches!(BookStore::load(&path).await, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn insert_returns_the_inserted_record_and_list_contains_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookStore::load(store_path(&dir)).await.unwrap();

        let book = store
            .insert(Some("T".to_string()), Some("A".to_string()))
            .await
            .unwrap();
        assert_eq!(book.title.as_deref(), Some("T"));
        assert_eq!(book.author.as_deref(), Some("A"));
        assert_eq!(store.list().await, vec![book]);
    }

    #[tokio::test]
    async fn absent_and_empty_arguments_are_stored_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookStore::load(store_path(&dir)).await.unwrap();

        let missing_author = store.insert(Some("T".to_string()), None).await.unwrap();
        let empty_title = store.insert(Some(String::new()), Some("A".to_string())).await.unwrap();

        assert_eq!(missing_author.author, None);
        assert_eq!(empty_title.title.as_deref(), Some(""));
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn duplicates_are_permitted() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookStore::load(store_path(&dir)).await.unwrap();

        let args = (Some("T".to_string()), Some("A".to_string()));
        store.insert(args.0.clone(), args.1.clone()).await.unwrap();
        store.insert(args.0, args.1).await.unwrap();

        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn inserted_books_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = BookStore::load(&path).await.unwrap();
        store
            .insert(Some("Jurassic Park".to_string()), Some("Michael Crichton".to_string()))
            .await
            .unwrap();
        store
            .insert(Some("Harry Potter and the Chamber of Secrets".to_string()), Some("J.K. Rowling".to_string()))
            .await
            .unwrap();
        let before = store.list().await;
        drop(store);

        let reloaded = BookStore::load(&path).await.unwrap();
        assert_eq!(reloaded.list().await, before);
    }

    #[tokio::test]
    async fn persistence_file_is_human_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let store = BookStore::load(&path).await.unwrap();
        store.insert(Some("T".to_string()), Some("A".to_string())).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed output spans multiple lines
        assert!(contents.lines().count() > 1);
        let parsed: Vec<Book> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_both_retained_and_flushed() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        let store = BookStore::load(&path).await.unwrap();

        let (a, b) = tokio::join!(
            store.insert(Some("first".to_string()), Some("A".to_string())),
            store.insert(Some("second".to_string()), Some("B".to_string())),
        );
        a.unwrap();
        b.unwrap();

        let titles: Vec<_> = store.list().await.into_iter().filter_map(|b| b.title).collect();
        assert!(titles.contains(&"first".to_string()));
        assert!(titles.contains(&"second".to_string()));

        // Both must be present in the flushed file as well, not only in memory
        let persisted: Vec<Book> = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(persisted.len(), 2);
    }

    #[tokio::test]
    async fn flush_failure_fails_the_insert_and_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the flush cannot write
        let path = dir.path().join("missing-subdir").join("books.json");
        let store = BookStore::load(&path).await.unwrap();

        let result = store.insert(Some("T".to_string()), Some("A".to_string())).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(store.list().await.is_empty());
    }
}
