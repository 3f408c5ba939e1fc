mod test_files;
mod test_store_fs;

pub use test_files::TestFiles;
pub use test_store_fs::MockStoreFs;
