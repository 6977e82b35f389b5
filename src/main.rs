use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use scope::config::AppConfig;
use scope::handlers;
use scope::search::SearchBackend;
use scope::search::memory::MemoryIndex;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Search index: optional JSON file via SCOPE_SEED, bundled demo
    // fixture otherwise.
    let index = match std::env::var("SCOPE_SEED") {
        Ok(path) => {
            let json =
                std::fs::read_to_string(&path).expect("Failed to read the SCOPE_SEED file");
            MemoryIndex::from_json(&json).expect("Invalid digital file data in SCOPE_SEED")
        }
        Err(_) => MemoryIndex::from_seed().expect("Failed to load the bundled seed data"),
    };
    let backend: web::Data<dyn SearchBackend> =
        web::Data::from(Arc::new(index) as Arc<dyn SearchBackend>);

    // Session encryption key — load from SESSION_KEY env var for stable
    // sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind = config.bind.clone();
    log::info!("Starting server at http://{bind}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(backend.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/search"))
                        .finish()
                }),
            )
            .route("/search", web::get().to(handlers::search_handlers::search))
            .route(
                "/language",
                web::post().to(handlers::language_handlers::set_language),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind)?
    .run()
    .await
}
