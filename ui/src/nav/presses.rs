use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

/// Fans document pointer presses out to subscribed components.
///
/// The app installs one document listener that calls [`PressHub::press`];
/// each mounted navigation bar holds a [`Subscription`] for as long as it
/// lives. Handlers run with the hub unlocked, so they may subscribe or
/// drop subscriptions themselves; a handler dropped mid-press is skipped.
pub struct PressHub<T> {
    inner: Arc<Mutex<Listeners<T>>>,
}

impl<T> Clone for PressHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> PressHub<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Listeners<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let mut listeners = self.listeners();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, Arc::new(handler)));

        Subscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers a press on `target` to every live subscriber.
    pub fn press(&self, target: &T) {
        let snapshot: Vec<(u64, Handler<T>)> = self.listeners().handlers.clone();

        for (id, handler) in snapshot {
            let live = self.listeners().handlers.iter().any(|(h, _)| *h == id);
            if live {
                handler(target);
            }
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.listeners().handlers.len()
    }
}

/// Keeps a handler registered; dropping it deregisters.
#[must_use = "dropping a Subscription deregisters its handler"]
pub struct Subscription<T> {
    hub: Weak<Mutex<Listeners<T>>>,
    id: u64,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            let mut listeners = hub.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(&u32) + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        (hits, move |_: &u32| {
            h.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn presses_reach_live_subscribers() {
        let hub = PressHub::new();
        let (a_hits, a) = counter();
        let (b_hits, b) = counter();
        let _a = hub.subscribe(a);
        let _b = hub.subscribe(b);

        hub.press(&7);
        hub.press(&8);

        assert_eq!(a_hits.load(Ordering::SeqCst), 2);
        assert_eq!(b_hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let hub = PressHub::new();
        let (hits, handler) = counter();
        let sub = hub.subscribe(handler);
        hub.press(&1);

        drop(sub);
        hub.press(&2);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_removes_only_its_own_handler() {
        let hub = PressHub::new();
        let (kept_hits, kept) = counter();
        let (_, gone) = counter();
        let _kept = hub.subscribe(kept);
        drop(hub.subscribe(gone));

        hub.press(&0);

        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(kept_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscription_outliving_hub_drops_cleanly() {
        let hub = PressHub::<u32>::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        drop(sub);
    }

    #[test]
    fn handler_may_drop_another_subscription_mid_press() {
        let hub = PressHub::<u32>::new();
        let (late_hits, late) = counter();
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));

        let dropper = {
            let slot = Arc::clone(&slot);
            hub.subscribe(move |_| {
                slot.lock().unwrap().take();
            })
        };
        *slot.lock().unwrap() = Some(hub.subscribe(late));

        hub.press(&1);
        hub.press(&2);

        assert_eq!(late_hits.load(Ordering::SeqCst), 0);
        assert_eq!(hub.subscriber_count(), 1);
        drop(dropper);
    }

    #[test]
    fn handler_may_subscribe_mid_press() {
        let hub = PressHub::<u32>::new();
        let added: Arc<Mutex<Vec<Subscription<u32>>>> = Arc::new(Mutex::new(Vec::new()));

        let _adder = {
            let hub2 = hub.clone();
            let added = Arc::clone(&added);
            hub.subscribe(move |_| {
                added.lock().unwrap().push(hub2.subscribe(|_| {}));
            })
        };

        hub.press(&1);

        assert_eq!(hub.subscriber_count(), 2);
        added.lock().unwrap().clear();
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn handler_may_drop_its_own_subscription() {
        let hub = PressHub::<u32>::new();
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));
        let own = Arc::clone(&slot);
        *slot.lock().unwrap() = Some(hub.subscribe(move |_| {
            own.lock().unwrap().take();
        }));

        hub.press(&1);

        assert_eq!(hub.subscriber_count(), 0);
    }
}
