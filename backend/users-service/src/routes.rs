//! Route table

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profiles")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::profiles::create_profile))
                    .route(web::get().to(handlers::profiles::get_all_profiles)),
            )
            .route(
                "/user/{userId}",
                web::get().to(handlers::profiles::get_profile_by_user),
            )
            .route(
                "/{profileId}",
                web::get().to(handlers::profiles::get_profile),
            ),
    )
    .route("/health", web::get().to(handlers::health));
}
