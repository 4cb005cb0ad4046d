//! Phone verification routes
//!
//! - `GET  /phone-verification` - show the prompt, sending a code once
//! - `POST /phone-verification/resend` - send a fresh code
//! - `POST /phone-verification/verify` - submit a code

pub mod prompt;
pub mod resend;
pub mod verify;

use actix_web::web;

pub use prompt::show_prompt;
pub use resend::resend_code;
pub use verify::verify_code;

/// Register the verification routes on a service config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/phone-verification")
            .route("", web::get().to(show_prompt))
            .route("/resend", web::post().to(resend_code))
            .route("/verify", web::post().to(verify_code)),
    );
}
