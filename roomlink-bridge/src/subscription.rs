/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Subscription lifecycle management.
//!
//! Owns the set of native event subscriptions for the bridge's mounted
//! lifetime.  One listener is registered per recognized native event name,
//! whether or not the caller supplied a handler; filtering is the event
//! normalizer's job, not this layer's.
//!
//! The module platform requires this explicit two-phase protocol (listening
//! flag plus per-event subscriptions).  The view-command platform delivers
//! events as direct view callbacks instead, so there this manager is
//! constructed passive and both transitions degrade to pure state flips.

use crate::event::RoomEvent;
use crate::host::{EventStream, SubscriptionHandle};
use log::debug;
use roomlink_types::Callback;
use serde_json::Value;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Inactive,
    Active,
}

pub struct SubscriptionLifecycle {
    stream: Option<Rc<dyn EventStream>>,
    state: State,
    handles: Vec<SubscriptionHandle>,
}

impl SubscriptionLifecycle {
    /// Lifecycle bound to a persistent native event stream.
    pub fn for_stream(stream: Rc<dyn EventStream>) -> Self {
        Self {
            stream: Some(stream),
            state: State::Inactive,
            handles: Vec::new(),
        }
    }

    /// Passive lifecycle for the platform without stream subscriptions.
    pub fn passive() -> Self {
        Self {
            stream: None,
            state: State::Inactive,
            handles: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    /// Number of subscription handles currently held.
    pub fn subscription_count(&self) -> usize {
        self.handles.len()
    }

    /// Transition Inactive → Active: enable native delivery, then register
    /// one listener per recognized event name, routing every occurrence into
    /// `deliver` as `(native_name, payload)`.
    ///
    /// Returns `false` without touching the native layer if already active.
    pub fn activate(&mut self, deliver: Callback<(&'static str, Value)>) -> bool {
        if self.state == State::Active {
            debug!("subscription lifecycle already active; ignoring duplicate activation");
            return false;
        }
        self.state = State::Active;

        let Some(stream) = &self.stream else {
            return true;
        };
        stream.set_listening(true);
        for event in RoomEvent::ALL {
            let native_name = event.native_name();
            let deliver = deliver.clone();
            let handle = stream.subscribe(
                native_name,
                Callback::from(move |payload| deliver.emit((native_name, payload))),
            );
            self.handles.push(handle);
        }
        true
    }

    /// Transition Active → Inactive: disable native delivery first to bound
    /// in-flight events, then release every held subscription handle.
    ///
    /// Returns `false` without touching the native layer if already inactive.
    pub fn deactivate(&mut self) -> bool {
        if self.state == State::Inactive {
            debug!("subscription lifecycle already inactive; ignoring duplicate deactivation");
            return false;
        }
        self.state = State::Inactive;

        if let Some(stream) = &self.stream {
            stream.set_listening(false);
        }
        // Dropping each handle runs its release closure.
        self.handles.clear();
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::fake_host::FakeEventStream;

    fn sink() -> Callback<(&'static str, Value)> {
        Callback::from(|_| ())
    }

    #[test]
    fn activation_registers_one_listener_per_recognized_event() {
        let stream = Rc::new(FakeEventStream::default());
        let mut lifecycle = SubscriptionLifecycle::for_stream(stream.clone());

        assert!(lifecycle.activate(sink()));

        assert!(lifecycle.is_active());
        assert_eq!(lifecycle.subscription_count(), RoomEvent::ALL.len());
        assert_eq!(stream.listener_count(), RoomEvent::ALL.len());
        assert_eq!(stream.listening_log(), vec![true]);
    }

    #[test]
    fn deactivation_disables_listening_then_releases_every_handle() {
        let stream = Rc::new(FakeEventStream::default());
        let mut lifecycle = SubscriptionLifecycle::for_stream(stream.clone());

        lifecycle.activate(sink());
        assert!(lifecycle.deactivate());

        assert!(!lifecycle.is_active());
        assert_eq!(lifecycle.subscription_count(), 0);
        assert_eq!(stream.listener_count(), 0);
        assert_eq!(stream.listening_log(), vec![true, false]);
    }

    #[test]
    fn deactivation_without_activation_is_a_noop() {
        let stream = Rc::new(FakeEventStream::default());
        let mut lifecycle = SubscriptionLifecycle::for_stream(stream.clone());

        assert!(!lifecycle.deactivate());

        assert!(stream.listening_log().is_empty());
        assert_eq!(lifecycle.subscription_count(), 0);
    }

    #[test]
    fn duplicate_transitions_do_not_reach_the_native_layer() {
        let stream = Rc::new(FakeEventStream::default());
        let mut lifecycle = SubscriptionLifecycle::for_stream(stream.clone());

        assert!(lifecycle.activate(sink()));
        assert!(!lifecycle.activate(sink()));
        assert_eq!(lifecycle.subscription_count(), RoomEvent::ALL.len());

        assert!(lifecycle.deactivate());
        assert!(!lifecycle.deactivate());
        assert_eq!(stream.listening_log(), vec![true, false]);
    }

    #[test]
    fn passive_lifecycle_flips_state_without_handles() {
        let mut lifecycle = SubscriptionLifecycle::passive();

        assert!(lifecycle.activate(sink()));
        assert!(lifecycle.is_active());
        assert_eq!(lifecycle.subscription_count(), 0);

        assert!(lifecycle.deactivate());
        assert!(!lifecycle.is_active());
    }
}
