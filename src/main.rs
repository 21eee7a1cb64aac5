use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{middleware::Logger, web, App, HttpServer};
use address_book::api::routes::{self, AppState};
use address_book::application::AddressService;
use address_book::config::AppConfig;
use address_book::infrastructure::db;
use address_book::infrastructure::repositories::AddressRepositoryImpl;
use address_book::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent, request_id_for,
    REQUEST_ID_HEADER,
};
use address_book::observability::error_tracking::capture_unexpected_5xx;
use address_book::observability::{init_tracing, AppMetrics};
use address_book::security::{cors_middleware, security_headers};
use tracing::{info, warn, Instrument};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("failed to load application configuration: {e}"),
        )
    })?;
    config
        .validate()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    init_tracing(&config.logging);

    let pool = db::open(&config.database)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to open address book store: {e}")))?;

    let address_repo = Arc::new(AddressRepositoryImpl::new(pool.clone()));
    let state = AppState {
        address_service: Arc::new(
            AddressService::new(address_repo)
                .with_distance_formula(config.address_book.distance_formula)
                .with_missing_id_policy(config.address_book.missing_id_policy),
        ),
        security: config.security.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: Some(pool.clone()),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        distance_formula = ?config.address_book.distance_formula,
        missing_id_policy = ?config.address_book.missing_id_policy,
        "starting address book server"
    );

    let server = HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = request_id_for(&req);
                let path = req.path().to_string();
                let method = req.method().to_string();
                let span = create_request_span(
                    &request_id,
                    &method,
                    &path,
                    &get_client_ip(&req),
                    &get_user_agent(&req),
                );
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static(REQUEST_ID_HEADER),
                        HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    metrics.record_request(status, latency_ms);

                    info!(
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        "request completed"
                    );

                    if status >= 500 {
                        if let Err(error) =
                            capture_unexpected_5xx(&path, &method, status, &request_id)
                        {
                            warn!(error = %error, "error capture skipped");
                        }
                    }
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind((bind_host, bind_port))?
    .run();

    let result = server.await;
    db::close(&pool).await;
    result
}
