pub mod document_store;
pub mod inference_provider;

pub use document_store::{IDocumentStore, Record};
pub use inference_provider::{GenerationRequest, IInferenceProvider};
