use serde::Serialize;

/// Line style, named after the options map widgets take.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

pub const OUTBOUND_PATH: PathStyle = PathStyle {
    color: "#3b82f6",
    weight: 4.0,
    opacity: 1.0,
    dash_array: Some("10, 10"),
};

pub const RETURN_PATH: PathStyle = PathStyle {
    color: "#f97316",
    weight: 4.0,
    opacity: 0.7,
    dash_array: None,
};

pub const WAYPOINT_MARKER: MarkerStyle = MarkerStyle {
    radius: 6.0,
    fill_color: "#ffffff",
    color: "#1e293b",
    weight: 2.0,
    opacity: 1.0,
    fill_opacity: 0.8,
};

pub const DESTINATION_MARKER: MarkerStyle = MarkerStyle {
    radius: 9.0,
    fill_color: "#f97316",
    color: "#1e293b",
    weight: 2.0,
    opacity: 1.0,
    fill_opacity: 0.95,
};

pub(crate) fn style_properties<T: Serialize>(style: &T) -> geojson::JsonObject {
    match serde_json::to_value(style) {
        Ok(serde_json::Value::Object(properties)) => properties,
        _ => geojson::JsonObject::new(),
    }
}
