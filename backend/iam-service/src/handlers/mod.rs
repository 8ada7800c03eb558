pub mod authentication;
pub mod users;

use actix_web::HttpResponse;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
