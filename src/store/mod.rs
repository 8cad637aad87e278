pub mod http;
pub mod memory;
pub mod traits;

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use traits::FeedbackStore;
