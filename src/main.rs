use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use filament_profiles::{
    api,
    config::Config,
    db::create_pool,
    services::{ProfileMutations, ProfileQueries, Revalidator},
};
use tokio::sync::broadcast;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );
    let db = create_pool(&config)
        .await
        .expect("Failed to create database pool");

    log::info!("Database connection established");

    let revalidator = Revalidator::new();
    let queries = ProfileQueries::new(db.clone());
    let mutations = ProfileMutations::new(db.clone(), revalidator.clone());

    // Stand-in for a rendering layer: report stale paths.
    let mut stale_paths = revalidator.subscribe();
    tokio::spawn(async move {
        loop {
            match stale_paths.recv().await {
                Ok(path) => log::info!("Listing {} is stale", path),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Missed {} revalidation signal(s)", skipped)
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let openapi = api::ApiDoc::openapi();

    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    let app_db = db.clone();
    HttpServer::new(move || {
        let cors = match &config.server.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::default(),
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(app_db.clone()))
            .app_data(web::Data::new(queries.clone()))
            .app_data(web::Data::new(mutations.clone()))
            .route(
                "/api/docs",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/api/docs/"))
                        .finish()
                }),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(api::routes)
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await?;

    log::info!("Server stopped, closing database pool");
    if let Err(e) = db.close().await {
        log::warn!("Failed to close database pool: {:?}", e);
    }
    Ok(())
}
