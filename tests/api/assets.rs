use crate::helpers::spawn_app;

#[tokio::test]
async fn static_assets() {
    let app = spawn_app().await;

    for (path, content_type) in [
        ("/static/page.js", "application/javascript"),
        ("/static/page.css", "text/css"),
    ] {
        let resp = app
            .api_client
            .get(format!("{}{path}", app.addr))
            .send()
            .await
            .expect("execute request");
        assert_eq!(resp.status().as_u16(), 200, "{path}");
        let header = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
        assert!(header.starts_with(content_type), "{path}: {header}");
    }
}

#[tokio::test]
async fn unknown_path() {
    let app = spawn_app().await;
    let resp = app
        .api_client
        .get(format!("{}/static/nope.js", app.addr))
        .send()
        .await
        .expect("execute request");
    assert_eq!(resp.status().as_u16(), 404);
}
