// Route exports
pub mod plans;

use actix_web::web;

pub use plans::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(plans::configure),
    );
}
