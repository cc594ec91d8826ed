use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TITLE: &str = "MoonBase";
pub const GITHUB: &str = "ewowi/MoonBase";
pub const COPYRIGHT: &str = "2025 MoonModules⚖️GPLv3";
pub const APP_NAME: &str = "MoonBase";

/// Data handed to the layout for one page render.
///
/// `features` and `instances` are whatever the device returned; their shape
/// is not interpreted here. The remaining fields are fixed metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    pub features: Value,
    pub title: String,
    pub github: String,
    pub copyright: String,
    #[serde(rename = "appName")]
    pub app_name: String,
    pub instances: Value,
}

impl PageContext {
    /// Combine the two fetched payloads with the static metadata.
    pub fn compose(features: Value, instances: Value) -> Self {
        Self {
            features,
            title: TITLE.to_string(),
            github: GITHUB.to_string(),
            copyright: COPYRIGHT.to_string(),
            app_name: APP_NAME.to_string(),
            instances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_layout_field_names() {
        let ctx = PageContext::compose(json!({"x": 1}), json!([1, 2, 3]));
        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            json!({
                "features": {"x": 1},
                "title": "MoonBase",
                "github": "ewowi/MoonBase",
                "copyright": "2025 MoonModules⚖️GPLv3",
                "appName": "MoonBase",
                "instances": [1, 2, 3]
            })
        );
    }

    #[test]
    fn null_payloads_are_kept_as_is() {
        let ctx = PageContext::compose(Value::Null, Value::Null);
        assert!(ctx.features.is_null());
        assert!(ctx.instances.is_null());
        assert_eq!(ctx.app_name, APP_NAME);
    }
}
