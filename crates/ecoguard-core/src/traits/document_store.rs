use crate::errors::RecordError;

/// A document that lives in a named collection and is keyed by id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Collection name in the document store.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

/// Document-store seam for one collection.
///
/// The backing store (users, devices, incidents) is an external collaborator;
/// this trait is the only surface the record actions depend on.
pub trait IDocumentStore<T: Record>: Send + Sync {
    /// Insert a new document. Fails with `AlreadyExists` on id collision.
    fn insert(&self, doc: T) -> Result<(), RecordError>;

    /// Fetch a document by id.
    fn get(&self, id: &str) -> Result<Option<T>, RecordError>;

    /// Replace an existing document. Fails with `NotFound` if absent.
    fn replace(&self, doc: T) -> Result<(), RecordError>;

    /// Remove a document. Returns whether it existed.
    fn remove(&self, id: &str) -> Result<bool, RecordError>;

    /// All documents in the collection, in no particular order.
    fn list(&self) -> Result<Vec<T>, RecordError>;
}
