pub mod writer;

pub use writer::{WriteError, write_document};
