//! Last-value-wins state holder with synchronous observers.
//!
//! A single owner replaces the held snapshot; every registered observer is called
//! with the new value right away. New observers receive the current value on
//! subscription, then every later change.

pub type SubscriptionId = usize;

type Observer<T> = Box<dyn FnMut(&T)>;

pub struct StateHolder<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: SubscriptionId,
}

impl<T: PartialEq> StateHolder<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the snapshot and notify observers.
    ///
    /// Setting a value equal to the current one is conflated: nothing is emitted and
    /// `false` is returned.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
        true
    }

    /// Derive the next snapshot from the current one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        observer(&self.value);
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: PartialEq + std::fmt::Debug> std::fmt::Debug for StateHolder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateHolder")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
