mod web;

pub use web::{WebConfig, WebServer};
