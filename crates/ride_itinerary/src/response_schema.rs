use schemars::generate::SchemaSettings;

use crate::itinerary::ItineraryResult;

/// JSON schema of `ItineraryResult`, with every subschema inlined and the
/// meta keys removed so the model service accepts it as a response schema.
pub fn response_schema() -> serde_json::Value {
    let schema = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<ItineraryResult>();

    let mut value = serde_json::Value::from(schema);
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }

    value
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&response_schema())
}
