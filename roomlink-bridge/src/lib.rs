//! This crate provides a platform-agnostic bridge to a native real-time room
//! runtime (room connect/disconnect, track publish/subscribe, camera control,
//! data-track messaging, network-quality telemetry).  The bridge does not
//! implement any media transport itself; it translates a declarative
//! configuration into native invocation sequences and normalizes the two
//! divergent native surfaces — a view-command channel and a module-call
//! surface with a persistent event stream — into one consistent
//! event/operation contract.
//!
//! This crate intends to make no assumptions about the UI framework of the
//! client app.  The host integration injects the native surface through
//! [`HostBinding`] and wires [`RoomBridge::activate`]/[`RoomBridge::deactivate`]
//! into whatever mount/unmount lifecycle it has.
//!
//! # Outline of usage
//!
//! ```no_run
//! # use roomlink_bridge::*;
//! # use roomlink_types::{Callback, ConnectOptions};
//! # fn host_binding() -> HostBinding { unimplemented!() }
//! let mut handlers = RoomEventHandlers::default();
//! handlers.on_room_did_connect = Some(Callback::from(|_payload| {
//!     // room joined
//! }));
//!
//! let bridge = RoomBridge::new(RoomBridgeOptions::new(host_binding(), handlers));
//! bridge.activate();
//! bridge.connect(ConnectOptions {
//!     room_name: "standup".into(),
//!     access_token: "…".into(),
//!     ..Default::default()
//! });
//! // …
//! bridge.disconnect();
//! bridge.deactivate();
//! ```
//!
//! Several "set enabled" operations resolve with the requested value rather
//! than a confirmed native state when their transport is fire-and-forget;
//! each affected method documents this optimistic echo.  Corroborate through
//! events where ground truth matters.

pub mod bridge;
pub mod codec;
pub mod command;
pub mod dispatch;
pub mod event;
pub mod host;
pub mod normalizer;
pub mod subscription;

#[cfg(test)]
mod tests;

pub use bridge::{RoomBridge, RoomBridgeOptions};
pub use command::Command;
pub use event::RoomEvent;
pub use host::{
    DeferredValue, EventStream, HostBinding, HostError, NativeModule, SubscriptionHandle,
    ViewCommandChannel, ViewHandle,
};
pub use normalizer::{EventNormalizer, RoomEventHandlers};
