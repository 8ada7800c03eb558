//! Route table
//!
//! Literal segments are registered before the `/{vehicleId}` matcher so
//! `/my-vehicles` and friends never land in the id resource.

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/vehicles")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::vehicles::get_all_vehicles))
                    .route(web::post().to(handlers::vehicles::create_vehicle)),
            )
            .route(
                "/public/{vehicleId}",
                web::get().to(handlers::vehicles::get_vehicle_projection),
            )
            .route(
                "/my-vehicles",
                web::get().to(handlers::vehicles::get_my_vehicles),
            )
            .route(
                "/type/{vehicleType}",
                web::get().to(handlers::vehicles::get_vehicles_by_type),
            )
            .route(
                "/admin/owner/{ownerId}",
                web::get().to(handlers::vehicles::get_vehicles_by_owner),
            )
            .service(
                web::resource("/{vehicleId}")
                    .route(web::get().to(handlers::vehicles::get_vehicle))
                    .route(web::put().to(handlers::vehicles::update_vehicle))
                    .route(web::delete().to(handlers::vehicles::delete_vehicle)),
            ),
    )
    .route("/health", web::get().to(handlers::health));
}
