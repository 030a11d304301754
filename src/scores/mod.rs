pub mod client;
pub mod database;
pub mod models;
pub mod routes;
