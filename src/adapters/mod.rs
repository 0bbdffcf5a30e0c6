// Adapters layer: concrete object store backends.

pub mod cos;
pub mod memory;

pub use cos::CosObjectStore;
pub use memory::InMemoryObjectStore;
