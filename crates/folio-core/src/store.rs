use crate::subscription::Subscription;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: FnvHashMap<u64, Listener<T>>,
}

/// Single-threaded observable value shared down the view tree.
///
/// Cloning a `Store` clones the handle, not the value.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: FnvHashMap::default(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Register `f`; it runs after every change until the handle is dropped.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, Rc::new(f));
            id
        };
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(&id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    // No borrow is held while listeners run: they may read or set the store
    // and drop subscriptions, their own included.
    fn notify(&self) {
        let value = self.get();
        let mut listeners: Vec<(u64, Listener<T>)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, l.clone()))
            .collect();
        listeners.sort_by_key(|(id, _)| *id);
        for (id, listener) in listeners {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            listener(&value);
        }
    }
}
