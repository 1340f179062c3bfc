//! # Notifications
//!
//! A minimal synchronous pub/sub capability. Every model type and every
//! instance *owns* an [`Emitter`] (composition, not inheritance), so model
//! scope and instance scope are independent topic namespaces: a listener
//! registered on one is never invoked via the other.
//!
//! Listeners fire synchronously, in registration order, before the call
//! that triggered the event returns.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::model::{Attributes, Instance};
use crate::value::Value;

/// Event topic. [`Topic::ChangeOf`] narrows [`Topic::Change`] to a single
/// property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Fired once per instantiation with an attribute bag, at model scope
    /// only.
    Construct,
    /// Fired on every successful assignment, at model and instance scope.
    Change,
    /// Like `Change`, but only for the named property.
    ChangeOf(String),
}

impl Topic {
    pub fn change_of(name: impl Into<String>) -> Self {
        Self::ChangeOf(name.into())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construct => write!(f, "construct"),
            Self::Change => write!(f, "change"),
            Self::ChangeOf(name) => write!(f, "change {name}"),
        }
    }
}

/// Payload delivered to listeners.
#[derive(Debug, Clone)]
pub enum Event {
    Construct {
        instance: Instance,
        attributes: Attributes,
    },
    Change {
        instance: Instance,
        property: String,
        value: Value,
    },
}

/// Registered listener. Stored behind `Rc` so an in-flight emit works on a
/// snapshot of the list.
pub type Listener = Rc<dyn Fn(&Event)>;

/// Synchronous event emitter.
#[derive(Default)]
pub struct Emitter {
    listeners: RefCell<HashMap<Topic, Vec<Listener>>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `topic`. Listeners fire in registration
    /// order and are never removed.
    pub fn on(&self, topic: Topic, listener: impl Fn(&Event) + 'static) {
        self.listeners
            .borrow_mut()
            .entry(topic)
            .or_default()
            .push(Rc::new(listener));
    }

    /// Invoke every listener registered for `topic`, in registration order.
    ///
    /// Emission iterates a snapshot, so a listener may register further
    /// listeners without invalidating the in-flight dispatch.
    pub fn emit(&self, topic: &Topic, event: &Event) {
        let snapshot = {
            let listeners = self.listeners.borrow();
            match listeners.get(topic) {
                Some(list) => list.clone(),
                None => return,
            }
        };
        for listener in &snapshot {
            listener(event);
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("topics", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelType;

    fn change_event() -> Event {
        let model = ModelType::new("Probe").unwrap();
        Event::Change {
            instance: model.create(),
            property: "p".to_string(),
            value: Value::Number(1.0),
        }
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let emitter = Emitter::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            emitter.on(Topic::Change, move |_| order.borrow_mut().push(tag));
        }

        emitter.emit(&Topic::Change, &change_event());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn topics_are_independent() {
        let emitter = Emitter::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = fired.clone();
            emitter.on(Topic::change_of("name"), move |_| *fired.borrow_mut() += 1);
        }

        emitter.emit(&Topic::Change, &change_event());
        emitter.emit(&Topic::change_of("email"), &change_event());
        assert_eq!(*fired.borrow(), 0);

        emitter.emit(&Topic::change_of("name"), &change_event());
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn listener_may_register_listeners_mid_emit() {
        let emitter = Rc::new(Emitter::new());
        let fired = Rc::new(RefCell::new(0));
        {
            let registrar = emitter.clone();
            let fired = fired.clone();
            emitter.on(Topic::Change, move |_| {
                let fired = fired.clone();
                registrar.on(Topic::Change, move |_| *fired.borrow_mut() += 1);
            });
        }

        // Must not panic, and the new listener only sees later emits.
        emitter.emit(&Topic::Change, &change_event());
        assert_eq!(*fired.borrow(), 0);
        emitter.emit(&Topic::Change, &change_event());
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn topic_display_matches_the_subscription_surface() {
        assert_eq!(Topic::Construct.to_string(), "construct");
        assert_eq!(Topic::Change.to_string(), "change");
        assert_eq!(Topic::change_of("email").to_string(), "change email");
    }
}
