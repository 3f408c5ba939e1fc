pub mod scaffold_assets;

pub use scaffold_assets::{SCAFFOLD_PLUGINS, SCAFFOLD_TENANTS, scaffold_file_content};
