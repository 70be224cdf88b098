mod subscriber_email;
mod subscription_form;
// allow external `use` statements to skip `subscription_form` etc
pub use subscriber_email::SubscriberEmail;
pub use subscriber_email::ValidationRejected;
pub use subscription_form::Acknowledged;
pub use subscription_form::FormView;
pub use subscription_form::IntakeStatus;
pub use subscription_form::SubscriptionForm;
