pub mod error;
pub mod v1;

use actix_web::http::header;
use actix_web::HttpRequest;

// Admin endpoints take the admin password as a bearer token
pub fn bearer(req: &HttpRequest) -> String {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|it| it.to_str().ok())
        .unwrap_or_default()
        .replace("Bearer ", "")
}
