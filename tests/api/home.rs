use chrono::Datelike;

use crate::helpers::spawn_app;

#[tokio::test]
async fn home_renders_every_section() {
    let app = spawn_app().await;
    let resp = app.get_home().await;

    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = resp.text().await.unwrap();
    for section in [r#"class="hero""#, r#"id="shows""#, r#"id="about""#, r#"id="join""#, r#"class="footer""#] {
        assert!(html.contains(section), "{section}");
    }
    for show in ["Rafter Ghosts", "Glass Cathedral", "Coal Dust Waltz"] {
        assert!(html.contains(show), "{show}");
    }
    assert!(html.contains(&format!("© {} Black Barnum", chrono::Utc::now().year())));
}

#[tokio::test]
async fn fresh_visit_shows_form() {
    let app = spawn_app().await;
    let html = app.get_home_html().await;

    assert!(html.contains(r#"<form action="/subscriptions" method="post""#));
    assert!(!html.contains("find you in the shadows soon"));
    assert!(!html.contains(r#"class="form-error""#));
}

#[tokio::test]
async fn initial_interaction_state() {
    let app = spawn_app().await;
    let html = app.get_home_html().await;

    // menu closed, video hidden behind its poster until it can play
    assert!(html.contains(r#"<button class="burger""#));
    assert!(html.contains(r#"<nav class="menu">"#));
    assert!(html.contains(r#"<video class="bg-video""#));
    assert!(html.contains("poster="));
    assert!(html.contains("--mx: 0px; --my: 0px;"));
}
