//! HTTP surface of the mock colorize backend.
//!
//! Two routes: a root banner and `POST /colorize`. The colorize route
//! reads the single `image` form field, sleeps the configured delay to
//! simulate inference latency, and echoes the payload back with the
//! uploaded content type.

use std::io::Write;
use std::time::Duration;

use actix_multipart::Multipart;
use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use futures_util::TryStreamExt;
use serde_json::json;

/// Form field name the image must arrive under.
pub const IMAGE_FIELD: &str = "image";

/// Runtime settings for the mock server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Artificial processing delay before echoing the image back.
    pub delay: Duration,
}

/// One decoded upload: the raw bytes and the declared content type.
struct Upload {
    bytes: Vec<u8>,
    content_type: String,
}

/// Drain the multipart stream and return the `image` field, if present.
///
/// Other fields are read past and ignored.
async fn read_image_field(
    mut payload: Multipart,
) -> Result<Option<Upload>, actix_multipart::MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let content_type = field
            .content_type()
            .map_or_else(|| "application/octet-stream".to_owned(), ToString::to_string);
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some(Upload {
            bytes,
            content_type,
        }));
    }
    Ok(None)
}

/// Service banner, mirroring what the real API's root would report.
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Chromify colorization API is running."
    }))
}

/// Mock colorization: echo the uploaded image after a delay.
#[post("/colorize")]
pub async fn colorize(config: web::Data<ServerConfig>, payload: Multipart) -> HttpResponse {
    let upload = match read_image_field(payload).await {
        Ok(upload) => upload,
        Err(e) => {
            log::error!("failed to read upload: {e}");
            return HttpResponse::InternalServerError().json(json!({
                "error": "Failed to process image"
            }));
        }
    };

    let Some(upload) = upload else {
        return HttpResponse::BadRequest().json(json!({
            "error": "No image provided"
        }));
    };

    log::info!(
        "colorize request: {} bytes ({})",
        upload.bytes.len(),
        upload.content_type
    );

    // Simulated inference latency.
    tokio::time::sleep(config.delay).await;

    // A real deployment would forward the bytes to the colorization
    // service here and stream its output back. The mock echoes the
    // original image instead.
    HttpResponse::Ok()
        .content_type(upload.content_type)
        .body(upload.bytes)
}

/// Run the server until shutdown.
///
/// Responses carry a permissive CORS header so the dev front-end,
/// served from a different origin, can call `/colorize` directly.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub async fn startup(config: ServerConfig) -> std::io::Result<()> {
    init_logging();

    let bind = (config.host.clone(), config.port);
    log::info!("starting mock colorize server at http://{}:{}", bind.0, bind.1);

    let app_state = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*")),
            )
            .app_data(app_state.clone())
            .service(root)
            .service(colorize)
    })
    .bind(bind)?
    .run()
    .await
}

/// Timestamped log format, info level by default.
fn init_logging() {
    let _ = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .try_init();
}
