//! A single-writer, multi-reader value holder with synchronous delivery.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Holds the latest value and pushes every change to current subscribers.
///
/// A new subscriber is called with the current value immediately, so it never has to
/// wait for the next change to learn the state.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and deliver it to every subscriber, in subscription order.
    pub fn publish(&self, value: T) {
        let listeners: Vec<Listener<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };

        // No borrow is held while listeners run, so they may read or subscribe.
        for listener in listeners {
            (&mut *listener.borrow_mut())(&value);
        }
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.value.clone())
        };

        (&mut *listener.borrow_mut())(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(i, _)| *i != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v: &T| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn late_subscriber_gets_current_value() {
        let value = Observable::new(1);
        value.publish(2);

        let (seen, listener) = recorder();
        let _sub = value.subscribe(listener);

        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn publishes_in_order_to_all_subscribers() {
        let value = Observable::new(None::<&str>);
        let (a, la) = recorder();
        let (b, lb) = recorder();
        let _sa = value.subscribe(la);
        let _sb = value.subscribe(lb);

        value.publish(Some("x"));
        value.publish(None);

        assert_eq!(*a.borrow(), vec![None, Some("x"), None]);
        assert_eq!(*b.borrow(), vec![None, Some("x"), None]);
        assert_eq!(value.get(), None);
    }

    #[test]
    fn dropping_subscription_stops_delivery() {
        let value = Observable::new(0);
        let (seen, listener) = recorder();
        let sub = value.subscribe(listener);
        assert_eq!(value.subscriber_count(), 1);

        drop(sub);
        value.publish(5);

        assert_eq!(*seen.borrow(), vec![0]);
        assert_eq!(value.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_read_during_delivery() {
        let value = Observable::new(0);
        let reader = value.clone();
        let (seen, mut record) = recorder();
        let _sub = value.subscribe(move |_| record(&reader.get()));

        value.publish(3);

        assert_eq!(*seen.borrow(), vec![0, 3]);
    }
}
