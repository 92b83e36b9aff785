pub mod api_json;
pub mod principal;
