pub mod file;
pub mod traits;

#[cfg(test)]
mod file_test;

pub use file::FileTaskRepository;
pub use traits::TaskRepository;
