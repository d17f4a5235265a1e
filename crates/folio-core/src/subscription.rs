/// Owned handle to something that must be released: a store subscriber, a
/// DOM listener, an animation frame loop.
///
/// The release action runs exactly once, on [`Subscription::cancel`] or on
/// drop, whichever comes first.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle that holds nothing.
    pub fn empty() -> Self {
        Self { release: None }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Several handles released together.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subs: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    /// Take over every handle in `other`.
    pub fn append(&mut self, mut other: SubscriptionSet) {
        self.subs.append(&mut other.subs);
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Release in reverse acquisition order.
    pub fn clear(&mut self) {
        while let Some(mut sub) = self.subs.pop() {
            sub.cancel();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.clear();
    }
}
