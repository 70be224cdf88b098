mod assets;
mod health_check;
mod home;
mod subscriptions;

pub use assets::*;
pub use health_check::*;
pub use home::*;
pub use subscriptions::*;

/// Print an error followed by its chain of causes. Used for the `Debug` impls
/// of handler errors, so that logs show where a failure came from.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
