//! Landing page of the Black Barnum circus collective, and the intake of its
//! mailing list form.
//!
//! To allow testing, almost everything lives in the library, keeping only the
//! entrypoint in src/main.rs.
pub mod configuration;
pub mod content;
pub mod domain;
pub mod interaction;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
