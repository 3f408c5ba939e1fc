//! Tenant record model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use super::AppError;
use super::tenant_id::derive_company_initial;
use super::validation::not_a_string;

/// Layout mode of a tenant's landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeVariant {
    Dashboard,
    Simple,
    #[default]
    Member,
    Custom,
}

impl HomeVariant {
    pub const ALL: [HomeVariant; 4] =
        [HomeVariant::Dashboard, HomeVariant::Simple, HomeVariant::Member, HomeVariant::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeVariant::Dashboard => "dashboard",
            HomeVariant::Simple => "simple",
            HomeVariant::Member => "member",
            HomeVariant::Custom => "custom",
        }
    }

    /// Only the member layout renders an ordered tab list.
    pub fn uses_tabs(&self) -> bool {
        matches!(self, HomeVariant::Member)
    }
}

impl fmt::Display for HomeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeVariant::ALL.into_iter().find(|v| v.as_str() == s).ok_or_else(|| {
            AppError::field(
                "homeVariant",
                format!(
                    "Invalid home variant '{}': must be one of dashboard, simple, member, custom",
                    s
                ),
            )
        })
    }
}

/// One entry of a member home screen's tab bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeTab {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HomeTab {
    pub fn new(id: &str, label: &str, order: i64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            visible: Some(true),
            order: Some(Number::from(order)),
            extra: Map::new(),
        }
    }

    /// Starter tab list offered by the tab editor.
    pub fn examples() -> Vec<HomeTab> {
        vec![
            HomeTab::new("services", "Services", 1),
            HomeTab::new("promotions", "Promotions", 2),
            HomeTab::new("profile", "Profile", 3),
        ]
    }
}

/// Parse tab-editor JSON into home tabs.
///
/// Blank input clears the tabs. Otherwise the content must be a JSON array
/// whose items are objects carrying at least `id` and `label`.
pub fn parse_home_tabs(content: &str) -> Result<Vec<HomeTab>, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(content)
        .map_err(|e| AppError::Format(format!("Invalid JSON: {}", e)))?;
    let Value::Array(items) = value else {
        return Err(AppError::Format("Tabs must be an array".into()));
    };

    items
        .into_iter()
        .map(|item| {
            let has_keys =
                item.as_object().is_some_and(|o| o.contains_key("id") && o.contains_key("label"));
            if !has_keys {
                return Err(AppError::Format("Each tab must have 'id' and 'label'".into()));
            }
            serde_json::from_value(item)
                .map_err(|e| AppError::Format(format!("Invalid tab entry: {}", e)))
        })
        .collect()
}

/// Tenant configuration as persisted in the store file.
///
/// Fields the validator type-checks are held as raw JSON so that any JSON
/// object loads. `None` means the key is absent; `Some(Value::Null)` is an
/// explicit `null` and is written back as such. Keys not modelled here are
/// kept in `extra`. The legacy `name` key is folded into `app_name` on read
/// and never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTenantRecord")]
pub struct TenantRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_initial: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_variant: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_tabs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_features: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape, accepting the legacy `name` alias.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTenantRecord {
    #[serde(default, deserialize_with = "present")]
    id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    company_initial: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    app_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    package_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    logo_path: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    home_variant: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    home_tabs: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    enabled_features: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A key that is present deserializes to `Some`, even when its value is `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

fn is_blank(value: &Value) -> bool {
    value.is_null() || value.as_str() == Some("")
}

impl From<StoredTenantRecord> for TenantRecord {
    fn from(stored: StoredTenantRecord) -> Self {
        let app_name = match (stored.app_name, stored.name) {
            (Some(app_name), _) if !is_blank(&app_name) => Some(app_name),
            (_, Some(name)) if !is_blank(&name) => Some(name),
            (app_name, _) => app_name,
        };
        let id = match stored.id {
            Some(Value::String(id)) => id,
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            id,
            company_initial: stored.company_initial,
            app_name,
            package_name: stored.package_name,
            logo_path: stored.logo_path,
            home_variant: stored.home_variant,
            home_tabs: stored.home_tabs,
            enabled_features: stored.enabled_features,
            extra: stored.extra,
        }
    }
}

impl TenantRecord {
    /// Blank record as the editor creates it for a new tenant.
    pub fn draft(id: &str) -> Self {
        Self {
            id: id.to_string(),
            home_variant: Some(Value::from(HomeVariant::Member.as_str())),
            home_tabs: Some(Value::Array(Vec::new())),
            enabled_features: Some(Value::Array(Vec::new())),
            ..Self::default()
        }
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_ref().and_then(Value::as_str)
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_ref().and_then(Value::as_str)
    }

    /// Explicit company initial, or the one derived from the tenant ID.
    pub fn effective_company_initial(&self) -> String {
        match self.company_initial.as_ref().and_then(Value::as_str).filter(|v| !v.is_empty()) {
            Some(initial) => initial.to_string(),
            None => derive_company_initial(&self.id),
        }
    }

    /// Declared layout name as written in the file. Unset means `member`.
    pub fn home_variant_name(&self) -> String {
        match &self.home_variant {
            None | Some(Value::Null) => HomeVariant::default().to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Declared layout, when it names a known variant.
    pub fn home_variant(&self) -> Option<HomeVariant> {
        self.home_variant_name().parse().ok()
    }

    pub fn set_home_variant(&mut self, variant: HomeVariant) {
        self.home_variant = Some(Value::from(variant.as_str()));
    }

    pub fn set_home_tabs(&mut self, tabs: &[HomeTab]) -> Result<(), AppError> {
        let value = serde_json::to_value(tabs)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize tabs: {}", e)))?;
        self.home_tabs = Some(value);
        Ok(())
    }

    /// String entries of `enabledFeatures`. Other shapes are left to validation.
    pub fn features(&self) -> Vec<&str> {
        match &self.enabled_features {
            Some(Value::Array(features)) => features.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Add a feature if not already enabled. Returns whether it was added.
    ///
    /// An absent or `null` list starts empty; any other non-array value is an error.
    pub fn enable_feature(&mut self, plugin_id: &str) -> Result<bool, AppError> {
        if matches!(self.enabled_features, None | Some(Value::Null)) {
            self.enabled_features = Some(Value::Array(Vec::new()));
        }
        let Some(Value::Array(features)) = self.enabled_features.as_mut() else {
            return Err(AppError::field("enabledFeatures", "enabledFeatures must be an array"));
        };
        if features.iter().any(|f| f.as_str() == Some(plugin_id)) {
            return Ok(false);
        }
        features.push(Value::from(plugin_id));
        Ok(true)
    }

    /// Remove a feature. Returns whether it was present.
    pub fn disable_feature(&mut self, plugin_id: &str) -> bool {
        let Some(Value::Array(features)) = self.enabled_features.as_mut() else {
            return false;
        };
        let before = features.len();
        features.retain(|f| f.as_str() != Some(plugin_id));
        features.len() != before
    }
}

/// String content of an optional field, or the type error for `field`.
///
/// Absent, `null` and `""` all read as unset.
pub(crate) fn optional_text<'a>(
    value: &'a Option<Value>,
    field: &'static str,
) -> Result<Option<&'a str>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(not_a_string(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_name_folds_into_app_name() {
        let record: TenantRecord =
            serde_json::from_str(r#"{"id": "acme", "name": "Acme"}"#).unwrap();
        assert_eq!(record.app_name(), Some("Acme"));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["appName"], "Acme");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn app_name_wins_over_legacy_name() {
        let record: TenantRecord =
            serde_json::from_str(r#"{"id": "acme", "appName": "New", "name": "Old"}"#).unwrap();
        assert_eq!(record.app_name(), Some("New"));

        let record: TenantRecord =
            serde_json::from_str(r#"{"id": "acme", "appName": "", "name": "Old"}"#).unwrap();
        assert_eq!(record.app_name(), Some("Old"));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let record: TenantRecord = serde_json::from_str(
            r##"{"id": "acme", "primaryColor": "#ff0000", "enabledFeatures": []}"##,
        )
        .unwrap();
        assert_eq!(record.extra["primaryColor"], "#ff0000");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r##""primaryColor":"#ff0000""##));
    }

    #[test]
    fn explicit_nulls_survive_a_round_trip() {
        let record: TenantRecord =
            serde_json::from_str(r#"{"id": "acme", "companyInitial": null, "logoPath": null}"#)
                .unwrap();
        assert_eq!(record.company_initial, Some(Value::Null));
        assert_eq!(record.package_name, None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": "acme", "companyInitial": null, "logoPath": null}));
    }

    #[test]
    fn mistyped_fields_still_load() {
        let record: TenantRecord = serde_json::from_value(json!({
            "id": 7,
            "companyInitial": 5,
            "homeVariant": "grid",
            "homeTabs": [{"id": "a", "label": "A", "order": 1.5}],
            "enabledFeatures": "news"
        }))
        .unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.company_initial, Some(json!(5)));
        assert_eq!(record.home_variant_name(), "grid");
        assert_eq!(record.home_variant(), None);
        assert!(record.features().is_empty());
    }

    #[test]
    fn home_variant_parses_known_names() {
        let record: TenantRecord =
            serde_json::from_str(r#"{"id": "a", "homeVariant": "dashboard"}"#).unwrap();
        assert_eq!(record.home_variant(), Some(HomeVariant::Dashboard));
        assert_eq!(TenantRecord::default().home_variant(), Some(HomeVariant::Member));
        assert_eq!("custom".parse::<HomeVariant>().unwrap(), HomeVariant::Custom);
        assert!("Grid".parse::<HomeVariant>().is_err());
    }

    #[test]
    fn draft_defaults_to_member_layout() {
        let draft = TenantRecord::draft("acme");
        assert_eq!(draft.home_variant(), Some(HomeVariant::Member));
        assert!(draft.features().is_empty());
        assert_eq!(draft.effective_company_initial(), "ACME");
    }

    #[test]
    fn feature_toggles_ignore_duplicates() {
        let mut record = TenantRecord::draft("acme");
        assert!(record.enable_feature("news").unwrap());
        assert!(!record.enable_feature("news").unwrap());
        assert!(record.disable_feature("news"));
        assert!(!record.disable_feature("news"));
    }

    #[test]
    fn enable_feature_refuses_non_array_list() {
        let mut record =
            TenantRecord { enabled_features: Some(json!("news")), ..TenantRecord::draft("acme") };
        let err = record.enable_feature("booking").unwrap_err();
        assert_eq!(err.to_string(), "enabledFeatures must be an array");
        assert!(!record.disable_feature("news"));

        let mut record =
            TenantRecord { enabled_features: Some(Value::Null), ..TenantRecord::draft("acme") };
        assert!(record.enable_feature("news").unwrap());
        assert_eq!(record.features(), ["news"]);
    }

    #[test]
    fn optional_text_separates_unset_from_mistyped() {
        assert_eq!(optional_text(&None, "logoPath").unwrap(), None);
        assert_eq!(optional_text(&Some(Value::Null), "logoPath").unwrap(), None);
        assert_eq!(optional_text(&Some(json!("")), "logoPath").unwrap(), None);
        assert_eq!(optional_text(&Some(json!("a.png")), "logoPath").unwrap(), Some("a.png"));

        let err = optional_text(&Some(json!(5)), "logoPath").unwrap_err();
        assert_eq!(err.field_name(), Some("logoPath"));
        assert!(err.to_string().starts_with("Logo path must be a string"));
    }

    #[test]
    fn parse_home_tabs_accepts_examples() {
        let json = serde_json::to_string(&HomeTab::examples()).unwrap();
        let tabs = parse_home_tabs(&json).unwrap();
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[0].id, "services");
        assert_eq!(tabs[2].order, Some(Number::from(3)));
    }

    #[test]
    fn parse_home_tabs_keeps_fractional_order() {
        let tabs = parse_home_tabs(r#"[{"id": "a", "label": "A", "order": 1.5}]"#).unwrap();
        assert_eq!(tabs[0].order.as_ref().and_then(Number::as_f64), Some(1.5));
    }

    #[test]
    fn parse_home_tabs_blank_clears() {
        assert!(parse_home_tabs("  \n").unwrap().is_empty());
    }

    #[test]
    fn parse_home_tabs_rejects_bad_shapes() {
        let err = parse_home_tabs(r#"{"id": "x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Tabs must be an array");

        let err = parse_home_tabs(r#"[{"id": "x"}]"#).unwrap_err();
        assert_eq!(err.to_string(), "Each tab must have 'id' and 'label'");

        let err = parse_home_tabs("[").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
