pub mod error_boundary;

pub use error_boundary::{handle_panic, sanitize_server_errors};
