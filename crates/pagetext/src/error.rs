#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Page {page} out of range (document has {count} page(s))")]
    PageOutOfRange { page: usize, count: usize },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}
