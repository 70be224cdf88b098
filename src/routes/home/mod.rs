use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web_flash_messages::IncomingFlashMessages;
use actix_web_flash_messages::Level;
use chrono::Datelike;
use chrono::Utc;
use serde::Serialize;
use tera::Context;
use tera::Tera;

use crate::content::SiteContent;
use crate::domain::FormView;
use crate::interaction::HeroVideo;
use crate::interaction::MenuToggle;
use crate::interaction::PointerPosition;
use crate::session_state::TypedSession;
use crate::utils::error_500;

const INDEX: &str = "index.html";

/// Compile the page template. Embedded at compile time (path relative to this
/// file), so the binary does not depend on the working directory.
pub fn templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX, include_str!("./index.html"))?;
    Ok(tera)
}

/// The join section, as the template sees it
#[derive(Serialize)]
struct JoinState {
    /// `collecting`, `rejected` or `acknowledged`
    state: &'static str,
    email_input: String,
    /// Shown under the form
    errors: Vec<String>,
}

impl JoinState {
    /// `flashed` are the error messages sent along with the redirect that
    /// brought the visitor here. On any later view of a rejected form (e.g. a
    /// reload) the reason comes from the form itself.
    fn new(
        view: FormView,
        email_input: &str,
        flashed: Vec<String>,
    ) -> Self {
        let (state, errors) = match view {
            FormView::Collecting => ("collecting", flashed),
            FormView::Rejected(_) if !flashed.is_empty() => ("rejected", flashed),
            FormView::Rejected(reason) => ("rejected", vec![reason.to_string()]),
            FormView::Acknowledged => ("acknowledged", Vec::new()),
        };
        Self {
            state,
            email_input: email_input.to_owned(),
            errors,
        }
    }
}

/// Classes and styles of a freshly mounted page; the client script takes over
/// from there.
#[derive(Serialize)]
struct Initial {
    burger_class: &'static str,
    menu_class: &'static str,
    video_class: &'static str,
    root_style: String,
}

impl Default for Initial {
    fn default() -> Self {
        let menu = MenuToggle::default();
        Self {
            burger_class: menu.burger_class(),
            menu_class: menu.menu_class(),
            video_class: HeroVideo::new().css_class(),
            root_style: PointerPosition::default().css_vars(),
        }
    }
}

/// `GET /`
///
/// Renders the whole page. The join section depends on the visitor's
/// subscription form: the form (possibly with the reason the last attempt was
/// rejected), or the acknowledgement.
#[tracing::instrument(name = "Rendering home page", skip_all)]
pub async fn home(
    session: TypedSession,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    site: web::Data<SiteContent>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = session.get_form().map_err(error_500)?;
    let flashed = flash_messages
        .iter()
        .filter(|m| m.level() == Level::Error)
        .map(|m| m.content().to_owned())
        .collect();

    let mut ctx = Context::new();
    ctx.insert("site", site.get_ref());
    ctx.insert(
        "join_state",
        &JoinState::new(form.view(), form.email_input(), flashed),
    );
    ctx.insert("initial", &Initial::default());
    ctx.insert("year", &Utc::now().year());

    let body = tera.render(INDEX, &ctx).map_err(error_500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
