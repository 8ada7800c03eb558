//! Route table
//!
//! Literal segments before the `/{reservationId}` matcher.

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reservations")
            .service(
                web::resource("")
                    .route(web::post().to(handlers::reservations::create_reservation)),
            )
            .route(
                "/all",
                web::get().to(handlers::reservations::get_all_reservations),
            )
            .route(
                "/my-reservations",
                web::get().to(handlers::reservations::get_my_reservations),
            )
            .route(
                "/user/{userId}",
                web::get().to(handlers::reservations::get_reservations_by_user),
            )
            .route(
                "/vehicle/{vehicleId}",
                web::get().to(handlers::reservations::get_reservations_by_vehicle),
            )
            .route(
                "/{reservationId}/status",
                web::put().to(handlers::reservations::update_reservation_status),
            )
            .service(
                web::resource("/{reservationId}")
                    .route(web::get().to(handlers::reservations::get_reservation))
                    .route(web::delete().to(handlers::reservations::delete_reservation)),
            ),
    )
    .route("/health", web::get().to(handlers::health));
}
