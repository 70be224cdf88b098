// one binary for all api tests; each file below is a module, not a test crate
mod assets;
mod health_check;
mod helpers;
mod home;
mod subscriptions;
