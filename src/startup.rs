use std::net::TcpListener;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use anyhow::Context;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::content::SiteContent;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::page_css;
use crate::routes::page_js;
use crate::routes::subscribe;
use crate::routes::templates;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the configured address and build the `Server`. Port 0 picks a
    /// random free port (see `get_port`).
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(&addr).with_context(|| format!("could not bind {addr}"))?;
        let port = listener.local_addr()?.port();

        tracing::info!("listening on {addr} (port {port})");

        let server = run(listener, cfg.site, cfg.application.hmac_secret)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints.
pub fn run(
    listener: TcpListener,
    site: SiteContent,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("hmac_secret must be at least 64 bytes")?;

    // one-shot messages for the next page view (e.g. why an email was rejected)
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    // the whole session (i.e. the subscription form) lives in the cookie, so
    // the server keeps no state between requests
    let tera = web::Data::new(templates().context("could not compile page template")?);
    let site = web::Data::new(site);

    // each worker builds its own `App` with this closure, hence the clones
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::post().to(subscribe))
            .route("/static/page.js", web::get().to(page_js))
            .route("/static/page.css", web::get().to(page_css))
            .app_data(tera.clone())
            .app_data(site.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
