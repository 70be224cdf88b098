use actix_web::HttpResponse;

/// `GET /static/page.js`
///
/// The browser side of `crate::interaction`: menu toggle, hero autoplay and
/// the pointer CSS variables.
pub async fn page_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("./page.js"))
}

/// `GET /static/page.css`
pub async fn page_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("./page.css"))
}
