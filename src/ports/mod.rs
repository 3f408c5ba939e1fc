mod store_filesystem;

pub use store_filesystem::StoreFilesystem;
