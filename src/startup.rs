use crate::configuration::Settings;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/product")
                    // fixed segments before the `{id}` catch-all
                    .service(routes::product::get::list)
                    .service(routes::product::overview::stats)
                    .service(routes::product::search::list)
                    .service(routes::product::similar::list)
                    .service(routes::product::similar::add)
                    .service(routes::product::similar::remove)
                    .service(routes::product::image::add)
                    .service(routes::product::image::remove)
                    .service(routes::product::image::update_thumbnail)
                    .service(routes::product::add::item)
                    .service(routes::product::get::item)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .service(web::scope("/comment").service(routes::comment::add::item))
            .service(
                web::scope("/admin")
                    .service(
                        web::scope("/product")
                            .service(routes::product::get::admin_list)
                            .service(routes::product::get::admin_item)
                            .service(routes::product::update::admin_item)
                            .service(routes::product::delete::admin_item),
                    )
                    .service(
                        web::scope("/comment").service(routes::comment::delete::admin_item),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
