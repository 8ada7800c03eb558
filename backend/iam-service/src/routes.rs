//! Route table

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/authentication")
                    .route("/sign-up", web::post().to(handlers::authentication::sign_up))
                    .route("/sign-in", web::post().to(handlers::authentication::sign_in)),
            )
            .service(
                web::scope("/users")
                    // `/username/{username}` before `/{userId}` so a username
                    // path never hits the id matcher
                    .route(
                        "/username/{username}",
                        web::get().to(handlers::users::get_user_by_username),
                    )
                    .route("/{userId}", web::get().to(handlers::users::get_user_by_id))
                    .route("", web::get().to(handlers::users::get_all_users)),
            ),
    )
    .route("/health", web::get().to(handlers::health));
}
