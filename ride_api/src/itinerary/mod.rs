pub mod get;
pub mod reload;
pub mod routes;
pub mod schema;
