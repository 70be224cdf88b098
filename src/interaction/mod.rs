//! Headless models of the page's client-side behaviour. The browser runs the
//! equivalent script (`/static/page.js`); the server uses these to render the
//! initial state.
mod hero;
mod listeners;
mod menu;
mod page;
mod pointer;

pub use hero::HeroVideo;
pub use hero::Playback;
pub use hero::PlaybackError;
pub use listeners::DomEvent;
pub use listeners::EventKind;
pub use listeners::EventTarget;
pub use listeners::ListenerGuard;
pub use menu::MenuToggle;
pub use page::PageSession;
pub use pointer::PointerBroadcast;
pub use pointer::PointerPosition;
