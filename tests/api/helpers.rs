use barnum::configuration::get_configuration;
use barnum::startup::Application;
use barnum::telemetry::get_subscriber;
use barnum::telemetry::init_subscriber;
use once_cell::sync::Lazy;

/// Init the tracing subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // the two sinks are different types, hence the duplicated arms
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber).expect("init tracing");
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber).expect("init tracing");
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Keeps the session cookie between requests, like a browser would; does
    /// not follow redirects
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/", self.addr))
            .send()
            .await
            .expect("execute request")
    }

    pub async fn get_home_html(&self) -> String { self.get_home().await.text().await.unwrap() }

    pub async fn post_subscriptions(
        &self,
        body: String,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/subscriptions", self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("execute request")
    }

    /// A new visitor (or the same one after navigating away): fresh cookie jar
    pub fn remount(&mut self) { self.api_client = api_client(); }
}

fn api_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap()
}

/// Spawn the app on a random port, in the background.
///
/// `addr` uses `localhost` rather than `127.0.0.1`; the session cookie is
/// `Secure`, and the cookie jar only treats `localhost` as a secure origin
/// over plain http.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let cfg = {
        let mut cfg = get_configuration().expect("read configuration");
        // port 0: the OS picks a free port
        cfg.application.port = 0;
        cfg
    };

    let app = Application::build(cfg).await.unwrap();
    let addr = format!("http://localhost:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        api_client: api_client(),
    }
}

pub fn check_redirect(
    resp: &reqwest::Response,
    location: &str,
) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}
