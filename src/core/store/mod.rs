// Guidelines lifecycle storage behind the `DocumentStore` trait.

pub mod file;
pub mod legacy;
pub mod memory;
pub mod state;
pub mod traits;
pub mod types;

pub use file::JsonFileStore;
pub use memory::InMemoryDocumentStore;
pub use state::StoreState;
pub use traits::{DocumentStore, resolve_document, working_copy};
pub use types::*;
