/// Filesystem adapters for output destinations
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
