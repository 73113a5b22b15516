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

//! Traits the host platform integration implements.
//!
//! The bridge never reaches for a global native handle; whichever of the two
//! native address spaces exists on the current platform is injected at
//! construction through [`HostBinding`].  Test doubles implement the same
//! traits.

use futures::future::LocalBoxFuture;
use roomlink_types::Callback;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Opaque reference to a mounted native view instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

/// Failure reported by the native module for a deferred call.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("native module rejected {method}: {reason}")]
    Rejected { method: String, reason: String },
    #[error("native module returned an unexpected value for {method}")]
    UnexpectedValue { method: String },
}

/// Result of a deferred module invocation, resolved on the host's own
/// timeline.  Single-threaded by design, hence the local future.
pub type DeferredValue = LocalBoxFuture<'static, Result<Value, HostError>>;

/// Command channel addressing a mounted native view by handle.
///
/// Delivery is fire-and-forget; effects are observed only through later
/// events.
pub trait ViewCommandChannel {
    fn dispatch(&self, view: ViewHandle, code: u8, args: Vec<Value>);
}

/// Direct invocation surface of the native module.
pub trait NativeModule {
    /// Fire-and-forget method call.
    fn invoke(&self, method: &str, args: Vec<Value>);

    /// Method call with a deferred result.
    fn invoke_deferred(&self, method: &str, args: Vec<Value>) -> DeferredValue;
}

/// Persistent native event stream (module platform only).
///
/// `set_listening(false)` bounds in-flight delivery; individual listeners are
/// released by dropping their [`SubscriptionHandle`].
pub trait EventStream {
    fn set_listening(&self, listening: bool);
    fn subscribe(&self, native_name: &'static str, handler: Callback<Value>)
        -> SubscriptionHandle;
}

/// The native surface the bridge talks to, selected once at construction by
/// platform capability and never branched on per call.
#[derive(Clone)]
pub enum HostBinding {
    /// The platform models the bridge as a custom native view with command
    /// dispatch support; events arrive as direct view callbacks.
    View(Rc<dyn ViewCommandChannel>),
    /// The platform exposes a native module plus a persistent event stream.
    Module {
        module: Rc<dyn NativeModule>,
        events: Rc<dyn EventStream>,
    },
}

impl fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostBinding::View(_) => f.write_str("HostBinding::View"),
            HostBinding::Module { .. } => f.write_str("HostBinding::Module"),
        }
    }
}

/// Opaque per-listener token.  Dropping it runs the host-supplied release
/// closure exactly once.
pub struct SubscriptionHandle {
    remove: Option<Box<dyn FnOnce()>>,
}

impl SubscriptionHandle {
    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubscriptionHandle")
    }
}
