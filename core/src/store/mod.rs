//! On-disk persistence: the JSON codec and the whole-file accessor.

pub mod codec;
pub mod file;

pub use codec::{decode, encode};
pub use file::FileStore;
