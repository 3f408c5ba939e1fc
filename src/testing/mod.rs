pub mod ports;

pub use ports::MockStoreFs;
pub use ports::TestFiles;

/// Plugin catalog JSON shared by unit tests.
pub const PLUGINS_JSON: &str = r#"{
  "news": {"label": "News", "description": "Company news"},
  "booking": {"label": "Booking"}
}"#;

/// A valid two-tenant store in saved form.
pub const TENANTS_JSON: &str = r#"{
  "acme": {
    "id": "acme",
    "appName": "Acme",
    "packageName": "com.acme.app",
    "enabledFeatures": [
      "news"
    ]
  },
  "globex": {
    "id": "globex",
    "companyInitial": "GX",
    "appName": "Globex",
    "packageName": "com.globex.member",
    "homeVariant": "dashboard",
    "enabledFeatures": []
  }
}"#;

/// Files holding `TENANTS_JSON` and `PLUGINS_JSON` at their default names.
pub fn seeded_files() -> TestFiles {
    let files = TestFiles::new();
    files.add("tenants.json", TENANTS_JSON);
    files.add("plugins.json", PLUGINS_JSON);
    files
}
