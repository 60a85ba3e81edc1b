use crate::conf::Conf;
use crate::{db, error, rest, Result};
use actix_web::dev::Service;
use actix_web::web::scope;
use actix_web::web::Data;
use actix_web::web::QueryConfig;
use actix_web::{
    middleware::{Compress, NormalizePath},
    App, HttpServer,
};
use futures_util::future::FutureExt;
use time::OffsetDateTime;
use tracing::info;

pub async fn run() -> Result<()> {
    // All the worker threads are sharing a single connection pool
    let pool = db::pool()?;
    let conf = Conf::select_async(&pool).await?;

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_query_string = req.query_string().to_string();
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                let req_real_ip = req
                    .connection_info()
                    .realip_remote_addr()
                    .unwrap_or_default()
                    .to_string();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
                        if res_time_sec > 5.0 {
                            info!(
                                req_query_string,
                                req_method,
                                req_path,
                                req_real_ip,
                                res_status,
                                res_time_sec,
                            );
                        }
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(conf.clone()))
            .app_data(QueryConfig::default().error_handler(error::query_error_handler))
            .service(
                scope("v1")
                    .service(
                        scope("zones")
                            .service(rest::v1::zones::post)
                            .service(rest::v1::zones::delete_by_id)
                            .service(rest::v1::zones::get),
                    )
                    .service(
                        scope("location")
                            .service(rest::v1::locations::get_ip)
                            .service(rest::v1::locations::post_check_zone),
                    )
                    .service(
                        scope("products")
                            .service(rest::v1::products::post)
                            .service(rest::v1::products::patch_by_id)
                            .service(rest::v1::products::delete_by_id)
                            .service(rest::v1::products::get)
                            .service(rest::v1::products::get_by_id),
                    )
                    .service(
                        scope("delivery-locations")
                            .service(rest::v1::delivery_locations::post)
                            .service(rest::v1::delivery_locations::get_by_id),
                    )
                    .service(
                        scope("orders")
                            .service(rest::v1::orders::post)
                            .service(rest::v1::orders::patch_by_id)
                            .service(rest::v1::orders::get)
                            .service(rest::v1::orders::get_by_uuid),
                    ),
            )
    })
    .bind(("127.0.0.1", 8000))?
    .run()
    .await?;

    Ok(())
}
