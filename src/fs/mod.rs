mod atomic;
mod binary;
mod traits;

pub use atomic::write_atomically;
pub use binary::{BinaryContent, ReadBinaryContent};
pub use traits::FileOperation;
