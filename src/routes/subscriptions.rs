use std::fmt::Debug;

use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web_flash_messages::FlashMessage;
use anyhow::Context;
use serde::Deserialize;

use super::error_chain_fmt;
use crate::session_state::TypedSession;
use crate::utils::redirect;

#[derive(Deserialize)]
pub struct FormData {
    /// A missing field is the same as an empty one: rejected, not a 400
    #[serde(default)]
    email: String,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for SubscribeError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// the default `error_response` is a bare 500
impl ResponseError for SubscribeError {}

/// `POST /subscriptions`
///
/// Feeds the submitted text into the visitor's subscription form and submits
/// it. Either way, the visitor is sent back to the join section with `303`
/// (post/redirect/get), where the page renders the outcome: the
/// acknowledgement, or the form again with the reason it was rejected. The
/// reason also goes out as an error flash message for that next page view.
///
/// Nothing is stored server-side, and the address is never logged.
///
/// # Request example
///
/// ```sh
///     curl -v --data 'email=dancer%40under.the.bridge' http://127.0.0.1:8000/subscriptions
/// ```
#[tracing::instrument(
    name = "Submitting subscription form",
    skip(form, session),
    fields(outcome = tracing::field::Empty)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    session: TypedSession,
) -> Result<HttpResponse, SubscribeError> {
    let mut sub_form = session
        .get_form()
        .context("Failed to read subscription form from session")?;

    sub_form.update_input(form.0.email);

    match sub_form.submit() {
        Ok(_) => {
            tracing::Span::current().record("outcome", "acknowledged");
            // this is where a mailing list service would be called
            tracing::info!("Subscription acknowledged");
        }
        Err(reason) => {
            tracing::Span::current().record("outcome", "rejected");
            tracing::info!(rejection = ?reason, "Subscription rejected");
            FlashMessage::error(reason.to_string()).send();
        }
    }

    session
        .insert_form(&sub_form)
        .context("Failed to store subscription form in session")?;

    Ok(redirect("/#join"))
}
