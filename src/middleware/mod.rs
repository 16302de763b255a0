//! HTTP middleware

pub mod request_id;

pub use request_id::{request_id_layer, request_span};
