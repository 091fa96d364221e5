//! Subscriber lists for change notifications

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callbacks notified in subscription order
pub struct Subscribers<F: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<F>)>,
}

impl<F: ?Sized> Default for Subscribers<F> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<F: ?Sized> Subscribers<F> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback
    pub fn subscribe(&mut self, callback: Box<F>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove a callback; returns `false` if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of callbacks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody is listening
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Callbacks in subscription order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.entries.iter_mut().map(|(_, callback)| &mut **callback)
    }
}

impl<F: ?Sized> std::fmt::Debug for Subscribers<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}
