pub mod error;
pub mod fetch;
pub mod gemini_client;
pub mod itinerary;
pub mod loader;
pub mod prompt;
pub mod response_schema;
pub mod text_generator;

#[cfg(test)]
pub(crate) mod test_utils;
