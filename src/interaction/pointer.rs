use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Inline style for the document root; the stylesheet reads `--mx` and
    /// `--my` to position the spotlight.
    pub fn css_vars(&self) -> String { format!("--mx: {}px; --my: {}px;", self.x, self.y) }
}

/// Latest pointer position of a mounted page.
///
/// Consumers call `subscribe` and await changes rather than poll. Once the
/// broadcast is dropped (page unmounted), every receiver sees the channel
/// close.
#[derive(Debug)]
pub struct PointerBroadcast {
    tx: watch::Sender<PointerPosition>,
}

impl Default for PointerBroadcast {
    fn default() -> Self { Self::new() }
}

impl PointerBroadcast {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(PointerPosition::default());
        Self { tx }
    }

    /// Publish a new position. Succeeds even when nobody is subscribed.
    pub fn update(
        &self,
        x: i32,
        y: i32,
    ) {
        self.tx.send_replace(PointerPosition { x, y });
    }

    pub fn current(&self) -> PointerPosition { *self.tx.borrow() }

    pub fn subscribe(&self) -> watch::Receiver<PointerPosition> { self.tx.subscribe() }
}
