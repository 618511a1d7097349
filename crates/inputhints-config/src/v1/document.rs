use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1 {
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_format: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub control_types: Vec<HintsV1ControlType>,
    #[serde(default)]
    pub glyphs: Vec<HintsV1Glyph>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<HintsV1Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<HintsV1Missing>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1ControlType {
    #[serde(default)]
    pub devices: String, // regex matched against the device id
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub assets: Vec<HintsV1Asset>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1Asset {
    pub category: String,
    pub asset: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1Glyph {
    pub path: String,
    pub glyph: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1Action {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(default)]
    pub bindings: Vec<HintsV1Binding>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1Binding {
    pub path: String,
    #[serde(default)]
    pub schemes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HintsV1Missing {
    pub path: String,
    pub scheme: String,
}
