use tokio::sync::broadcast;

/// Path of the profile listing page.
pub const LISTING_PATH: &str = "/";

/// Publishes "this path is stale" signals to whatever renders the views.
#[derive(Clone)]
pub struct Revalidator {
    sender: broadcast::Sender<String>,
}

impl Revalidator {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Revalidator { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn revalidate_path(&self, path: &str) {
        match self.sender.send(path.to_string()) {
            Ok(receivers) => log::debug!("Revalidating {} ({} subscriber(s))", path, receivers),
            Err(_) => log::debug!("Revalidating {} (no subscribers)", path),
        }
    }
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}
