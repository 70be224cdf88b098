use std::future::Future;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Browsers refuse to autoplay until the visitor has interacted with the
    /// page, or when power saving is on.
    #[error("autoplay was not allowed: {0}")]
    NotAllowed(String),
    #[error("no playable source")]
    NoSource,
}

/// Whatever can start the background video.
pub trait Playback {
    fn play(&mut self) -> impl Future<Output = Result<(), PlaybackError>> + Send;
}

/// The hero banner's background video.
///
/// The poster is always rendered; the video itself only becomes visible once
/// it reports that it can play.
#[derive(Debug, Clone, Default)]
pub struct HeroVideo {
    ready: Arc<AtomicBool>,
}

impl HeroVideo {
    pub fn new() -> Self { Self::default() }

    /// Called on the video's `canplay` event.
    pub fn mark_ready(&self) { self.ready.store(true, Ordering::Release); }

    pub fn is_ready(&self) -> bool { self.ready.load(Ordering::Acquire) }

    pub fn css_class(&self) -> &'static str {
        match self.is_ready() {
            true => "bg-video visible",
            false => "bg-video",
        }
    }

    /// Best effort: a refused autoplay is logged and otherwise ignored, and
    /// the poster stays up. Returns whether playback started.
    #[tracing::instrument(name = "Attempting hero autoplay", skip(self, player))]
    pub async fn try_autoplay<P: Playback>(
        &self,
        player: &mut P,
    ) -> bool {
        match player.play().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error.message = %e, "autoplay refused, keeping poster");
                false
            }
        }
    }
}
