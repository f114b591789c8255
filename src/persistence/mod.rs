mod file_reader;

pub use file_reader::FileReader;
pub(crate) use file_reader::read_failure;
