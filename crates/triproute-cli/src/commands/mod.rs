pub mod navigate;
pub mod routes;
pub mod style;
pub mod token;
pub mod url;
