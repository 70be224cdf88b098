use std::sync::Arc;

use tokio::sync::watch;

use super::DomEvent;
use super::EventKind;
use super::EventTarget;
use super::HeroVideo;
use super::ListenerGuard;
use super::MenuToggle;
use super::PointerBroadcast;
use super::PointerPosition;

/// Interactive state of one mounted page.
///
/// Mounting attaches a `mousemove` listener to the window (feeding the pointer
/// broadcast) and a `canplay` listener to the hero video. Unmounting, or just
/// dropping the session, detaches both.
pub struct PageSession {
    pub menu: MenuToggle,
    pub hero: HeroVideo,
    pointer: Arc<PointerBroadcast>,
    listeners: Vec<ListenerGuard>,
}

impl PageSession {
    #[tracing::instrument(name = "Mounting page", skip_all)]
    pub fn mount(
        window: &EventTarget,
        video: &EventTarget,
    ) -> Self {
        let pointer = Arc::new(PointerBroadcast::new());
        let hero = HeroVideo::new();

        let on_move = {
            let pointer = Arc::clone(&pointer);
            window.listen(EventKind::MouseMove, move |event| {
                if let DomEvent::MouseMove { x, y } = *event {
                    pointer.update(x, y);
                }
            })
        };
        let on_canplay = {
            let hero = hero.clone();
            video.listen(EventKind::CanPlay, move |_| hero.mark_ready())
        };

        Self {
            menu: MenuToggle::default(),
            hero,
            pointer,
            listeners: vec![on_move, on_canplay],
        }
    }

    pub fn pointer(&self) -> PointerPosition { self.pointer.current() }

    pub fn subscribe_pointer(&self) -> watch::Receiver<PointerPosition> { self.pointer.subscribe() }

    /// Detach every listener. The pointer broadcast closes once the last
    /// handler holding it is gone, ending any subscriptions.
    #[tracing::instrument(name = "Unmounting page", skip_all)]
    pub fn unmount(self) {
        let n = self.listeners.len();
        drop(self.listeners);
        tracing::debug!("released {n} listeners");
    }
}
