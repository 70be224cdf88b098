use std::future::ready;
use std::future::Ready;

use actix_session::Session;
use actix_session::SessionExt;
use actix_session::SessionGetError;
use actix_session::SessionInsertError;
use actix_web::FromRequest;

use crate::domain::SubscriptionForm;

/// Wrapper around `actix_session::Session`, for enabling strict typing (keys
/// are methods instead of Strings).
///
/// The session is the "rendering session" of the subscription form: it lives
/// in the visitor's cookie, and a fresh cookie jar starts a fresh form.
pub struct TypedSession(Session);

impl TypedSession {
    const FORM_KEY: &'static str = "subscription_form";

    /// The visitor's form, or a new one if this is their first visit.
    pub fn get_form(&self) -> Result<SubscriptionForm, SessionGetError> {
        Ok(self
            .0
            .get::<SubscriptionForm>(Self::FORM_KEY)?
            .unwrap_or_default())
    }

    pub fn insert_form(
        &self,
        form: &SubscriptionForm,
    ) -> Result<(), SessionInsertError> {
        self.0.insert(Self::FORM_KEY, form)
    }
}

impl FromRequest for TypedSession {
    // reuse the error of `Session`'s own `FromRequest` impl
    type Error = <Session as FromRequest>::Error;

    // session access doesn't require any I/O, so the future is ready at once
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
