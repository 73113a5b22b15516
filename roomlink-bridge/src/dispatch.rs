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

//! Command dispatch over the two native address spaces.
//!
//! The delivery mechanism is picked once at construction from the platform's
//! [`HostBinding`] and never branched on per call.  The dispatcher tracks no
//! native state; effects come back, if at all, through the event normalizer.

use crate::command::Command;
use crate::host::{HostError, NativeModule, ViewCommandChannel, ViewHandle};
use log::debug;
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;

/// Issues [`Command`]s to whichever native surface exists on this platform.
pub enum CommandDispatcher {
    View {
        channel: Rc<dyn ViewCommandChannel>,
        view: Cell<Option<ViewHandle>>,
    },
    Module {
        module: Rc<dyn NativeModule>,
    },
}

impl CommandDispatcher {
    pub fn view(channel: Rc<dyn ViewCommandChannel>) -> Self {
        CommandDispatcher::View {
            channel,
            view: Cell::new(None),
        }
    }

    pub fn module(module: Rc<dyn NativeModule>) -> Self {
        CommandDispatcher::Module { module }
    }

    /// Point the dispatcher at a freshly mounted native view.  No-op on the
    /// module platform.
    pub fn attach_view(&self, handle: ViewHandle) {
        if let CommandDispatcher::View { view, .. } = self {
            view.set(Some(handle));
        }
    }

    /// Forget the native view (unmounted or in a transitional render state).
    pub fn detach_view(&self) {
        if let CommandDispatcher::View { view, .. } = self {
            view.set(None);
        }
    }

    /// Fire-and-forget dispatch.
    ///
    /// An unresolved view handle is a benign lifecycle race, not an error:
    /// the command is dropped silently.  A command without a module
    /// counterpart is likewise dropped on the module platform.
    pub fn dispatch(&self, command: Command) {
        match self {
            CommandDispatcher::View { channel, view } => match view.get() {
                Some(handle) => {
                    channel.dispatch(handle, command.view_code(), command.view_args())
                }
                None => debug!("dropping {} command: no native view attached", command.name()),
            },
            CommandDispatcher::Module { module } => match command.module_call() {
                Some((method, args)) => module.invoke(method, args),
                None => debug!("command {} has no module counterpart", command.name()),
            },
        }
    }

    /// Dispatch a command whose caller expects a resolved value.
    ///
    /// On a fire-and-forget transport (the view channel, or a command the
    /// module has no counterpart for) this resolves immediately with `echo`:
    /// an optimistic echo of the requested value, not a confirmed native
    /// acknowledgment.  Callers needing ground truth must corroborate through
    /// events.
    pub async fn dispatch_deferred(
        &self,
        command: Command,
        echo: Value,
    ) -> Result<Value, HostError> {
        match self {
            CommandDispatcher::View { .. } => {
                self.dispatch(command);
                Ok(echo)
            }
            CommandDispatcher::Module { module } => match command.module_call() {
                Some((method, args)) => module.invoke_deferred(method, args).await,
                None => Ok(echo),
            },
        }
    }
}

/// Interpret a deferred result as the boolean the "set enabled" operations
/// resolve with.
pub(crate) fn value_as_bool(method: &str, value: Value) -> Result<bool, HostError> {
    value.as_bool().ok_or_else(|| HostError::UnexpectedValue {
        method: method.to_string(),
    })
}
