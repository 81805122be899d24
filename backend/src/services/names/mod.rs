//! Name validation endpoints.
//!
//! Backs the participant-name field of the certificate form: the client
//! debounces keystrokes and asks this service for likely spellings, showing
//! them in a suggestions panel. Failures on the client side are logged and
//! otherwise ignored, so this service only ever improves the experience.

pub mod spell;
mod validate;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/names";

/// Configures and returns the Actix scope for name validation routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to fetch spelling suggestions for a participant name.
        .route("/validate", post().to(validate::process))
}
