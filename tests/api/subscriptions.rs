use crate::helpers::check_redirect;
use crate::helpers::spawn_app;

const FORM: &str = r#"<form action="/subscriptions" method="post""#;
const THANKS: &str = "find you in the shadows soon";
const ERROR: &str = r#"class="form-error""#;

#[tokio::test]
async fn subscribe_ok() {
    let app = spawn_app().await;

    let resp = app
        .post_subscriptions("email=dancer%40under.the.bridge".to_owned())
        .await;
    check_redirect(&resp, "/#join");

    let html = app.get_home_html().await;
    assert!(html.contains(THANKS));
    assert!(!html.contains(FORM));
    // the address is not echoed back anywhere
    assert!(!html.contains("dancer@under.the.bridge"));
}

#[tokio::test]
async fn subscribe_invalid() {
    let app = spawn_app().await;

    for (body, msg) in [
        ("email=not-an-email", "no @"),
        ("email=", "empty email"),
        ("", "missing email"),
        ("email=x%40y", "no tld"),
        ("email=a+b%40c.d", "whitespace in local part"),
        ("email=%40foo.com", "no local part"),
        ("email=a%40b%40c.d", "two @"),
    ] {
        let resp = app.post_subscriptions(body.to_owned()).await;
        // rejection is not an http error; the page shows it instead
        check_redirect(&resp, "/#join");

        let html = app.get_home_html().await;
        assert!(html.contains(FORM), "{msg}");
        assert!(!html.contains(THANKS), "{msg}");
        assert!(html.contains(ERROR), "{msg}");
    }
}

#[tokio::test]
async fn rejection_is_explained() {
    let app = spawn_app().await;

    app.post_subscriptions("email=x%40y".to_owned()).await;
    let html = app.get_home_html().await;

    assert!(html.contains("The domain needs a dot, like under.the.bridge"));
    assert!(html.contains(r#"aria-invalid="true""#));
    // kept so it can be corrected
    assert!(html.contains(r#"value="x@y""#));
}

#[tokio::test]
async fn retry_after_rejection() {
    let app = spawn_app().await;

    app.post_subscriptions("email=x%40y".to_owned()).await;
    let resp = app.post_subscriptions("email=x%40y.z".to_owned()).await;
    check_redirect(&resp, "/#join");

    let html = app.get_home_html().await;
    assert!(html.contains(THANKS));
    assert!(!html.contains(ERROR));
}

#[tokio::test]
async fn acknowledged_is_terminal() {
    let app = spawn_app().await;

    app.post_subscriptions("email=a%40b.c".to_owned()).await;

    for body in ["email=", "email=not-an-email", "email=other%40b.c"] {
        let resp = app.post_subscriptions(body.to_owned()).await;
        check_redirect(&resp, "/#join");

        let html = app.get_home_html().await;
        assert!(html.contains(THANKS), "{body}");
        assert!(!html.contains(FORM), "{body}");
    }
}

#[tokio::test]
async fn remount_starts_over() {
    let mut app = spawn_app().await;

    app.post_subscriptions("email=a%40b.c".to_owned()).await;
    assert!(app.get_home_html().await.contains(THANKS));

    app.remount();
    let html = app.get_home_html().await;
    assert!(html.contains(FORM));
    assert!(!html.contains(THANKS));
    assert!(!html.contains(ERROR));
}

#[tokio::test]
async fn rejection_is_flashed() {
    let app = spawn_app().await;

    let resp = app.post_subscriptions("email=x%40y".to_owned()).await;
    check_redirect(&resp, "/#join");
    assert!(resp.cookies().any(|c| c.name() == "_flash"));

    let msg = "The domain needs a dot, like under.the.bridge";
    let html = app.get_home_html().await;
    assert_eq!(html.matches(msg).count(), 1);

    // the flash message is gone, but the form still knows why it was rejected
    let html = app.get_home_html().await;
    assert_eq!(html.matches(msg).count(), 1);
    assert!(html.contains(r#"aria-invalid="true""#));
}
