//! End-to-end scenario tests for the facade, driven through the fake hosts.

use super::fake_host::{FakeEventStream, FakeModule, FakeViewChannel};
use crate::bridge::{RoomBridge, RoomBridgeOptions};
use crate::host::{HostBinding, ViewHandle};
use crate::normalizer::RoomEventHandlers;
use futures::executor::block_on;
use roomlink_types::{Callback, CameraSource, ConnectOptions};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

fn module_bridge(
    handlers: RoomEventHandlers,
) -> (RoomBridge, Rc<FakeModule>, Rc<FakeEventStream>) {
    super::init_test_logging();
    let module = Rc::new(FakeModule::default());
    let events = Rc::new(FakeEventStream::default());
    let bridge = RoomBridge::new(RoomBridgeOptions::new(
        HostBinding::Module {
            module: module.clone(),
            events: events.clone(),
        },
        handlers,
    ));
    (bridge, module, events)
}

fn view_bridge(handlers: RoomEventHandlers) -> (RoomBridge, Rc<FakeViewChannel>) {
    super::init_test_logging();
    let channel = Rc::new(FakeViewChannel::default());
    let bridge = RoomBridge::new(RoomBridgeOptions::new(
        HostBinding::View(channel.clone()),
        handlers,
    ));
    (bridge, channel)
}

fn recording_handler() -> (Callback<Value>, Rc<RefCell<Vec<Value>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let handler = {
        let seen = seen.clone();
        Callback::from(move |payload| seen.borrow_mut().push(payload))
    };
    (handler, seen)
}

#[test]
fn connect_then_room_did_connect_reaches_only_the_registered_handler() {
    let (connected, connected_seen) = recording_handler();
    let (disconnected, disconnected_seen) = recording_handler();
    let (bridge, module, events) = module_bridge(RoomEventHandlers {
        on_room_did_connect: Some(connected),
        on_room_did_disconnect: Some(disconnected),
        ..Default::default()
    });

    bridge.activate();
    bridge.connect(ConnectOptions {
        room_name: "R1".into(),
        access_token: "T".into(),
        ..Default::default()
    });

    let connect_call = module
        .calls()
        .into_iter()
        .find(|(method, _)| method == "connect")
        .expect("connect was never invoked on the module");
    assert_eq!(connect_call.1[0], json!("T"));
    assert_eq!(connect_call.1[1], json!("R1"));

    let payload = json!({
        "roomName": "R1",
        "roomSid": "S1",
        "participants": [],
        "localParticipant": {"sid": "L1", "identity": "me"},
    });
    events.emit("roomDidConnect", payload.clone());

    assert_eq!(*connected_seen.borrow(), vec![payload]);
    assert!(disconnected_seen.borrow().is_empty());
}

#[test]
fn send_data_issues_the_command_and_synthesizes_no_event() {
    let (handler, seen) = recording_handler();
    let (bridge, channel) = view_bridge(RoomEventHandlers {
        on_data_track_message_received: Some(handler),
        ..Default::default()
    });
    bridge.activate();
    bridge.attach_view(ViewHandle(3));

    bridge.send_data("hello");

    assert_eq!(
        channel.commands(),
        vec![(ViewHandle(3), 12, vec![json!("hello")])]
    );
    assert!(seen.borrow().is_empty());
}

#[test]
fn disabling_local_video_stops_capture_before_notifying_the_module() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());
    module.script_result("setLocalVideoEnabled", Ok(json!(false)));

    let enabled = block_on(bridge.set_local_video_enabled(false, Some(CameraSource::Front)))
        .unwrap();

    assert!(!enabled);
    assert_eq!(
        module.invocations(),
        vec!["stopLocalVideo".to_string(), "setLocalVideoEnabled".to_string()]
    );
}

#[test]
fn enabling_local_video_issues_only_the_enable_notification() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());
    module.script_result("setLocalVideoEnabled", Ok(json!(true)));

    let enabled =
        block_on(bridge.set_local_video_enabled(true, Some(CameraSource::Back))).unwrap();

    assert!(enabled);
    assert_eq!(module.invocations(), vec!["setLocalVideoEnabled".to_string()]);
    let (_, args) = &module.calls()[0];
    assert_eq!(args[0], json!(true));
    assert_eq!(args[1], json!("back"));
}

#[test]
fn set_local_audio_enabled_echoes_on_the_view_platform() {
    let (bridge, channel) = view_bridge(RoomEventHandlers::default());
    bridge.attach_view(ViewHandle(1));

    let enabled = block_on(bridge.set_local_audio_enabled(false)).unwrap();

    assert!(!enabled);
    assert_eq!(channel.commands(), vec![(ViewHandle(1), 5, vec![json!(false)])]);
}

#[test]
fn set_remote_audio_enabled_echoes_without_touching_the_module() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());

    let enabled = block_on(bridge.set_remote_audio_enabled(true)).unwrap();

    assert!(enabled);
    assert!(module.invocations().is_empty());
}

#[test]
fn rejected_deferred_call_surfaces_as_an_error() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());
    module.script_result(
        "setLocalAudioEnabled",
        Err("microphone permission denied".into()),
    );

    let result = block_on(bridge.set_local_audio_enabled(true));

    assert!(result.is_err());
}

#[test]
fn activation_starts_local_capture_on_the_module_platform() {
    let (bridge, module, events) = module_bridge(RoomEventHandlers::default());

    bridge.activate();

    assert_eq!(
        module.invocations(),
        vec![
            "setLocalVideoTrackName".to_string(),
            "startLocalVideo".to_string(),
            "startLocalAudio".to_string(),
        ]
    );
    assert_eq!(events.listening_log(), vec![true]);

    // Duplicate mount signals from the host must not re-run activation.
    bridge.activate();
    assert_eq!(module.invocations().len(), 3);
}

#[test]
fn activation_honors_auto_initialize_camera_false() {
    let module = Rc::new(FakeModule::default());
    let events = Rc::new(FakeEventStream::default());
    let mut options = RoomBridgeOptions::new(
        HostBinding::Module {
            module: module.clone(),
            events,
        },
        RoomEventHandlers::default(),
    );
    options.auto_initialize_camera = false;
    let bridge = RoomBridge::new(options);

    bridge.activate();

    assert_eq!(
        module.invocations(),
        vec!["setLocalVideoTrackName".to_string(), "startLocalAudio".to_string()]
    );
}

#[test]
fn deactivation_stops_capture_and_event_delivery() {
    let (handler, seen) = recording_handler();
    let (bridge, module, events) = module_bridge(RoomEventHandlers {
        on_room_did_disconnect: Some(handler),
        ..Default::default()
    });

    bridge.activate();
    bridge.deactivate();

    assert!(!bridge.is_active());
    assert_eq!(events.listening_log(), vec![true, false]);
    assert_eq!(events.listener_count(), 0);
    let invocations = module.invocations();
    assert!(invocations.contains(&"stopLocalVideo".to_string()));
    assert!(invocations.contains(&"stopLocalAudio".to_string()));

    // Listeners are gone, so a late native emission reaches nobody.
    events.emit("roomDidDisconnect", json!({"roomName": "R1"}));
    assert!(seen.borrow().is_empty());
}

#[test]
fn deactivation_without_activation_touches_nothing() {
    let (bridge, module, events) = module_bridge(RoomEventHandlers::default());

    bridge.deactivate();

    assert!(module.invocations().is_empty());
    assert!(events.listening_log().is_empty());
}

#[test]
fn view_platform_deactivation_releases_the_native_view() {
    let (bridge, channel) = view_bridge(RoomEventHandlers::default());
    bridge.attach_view(ViewHandle(9));

    bridge.activate();
    bridge.deactivate();

    assert_eq!(channel.commands(), vec![(ViewHandle(9), 10, vec![])]);

    // But never without a prior activation.
    let (bridge, channel) = view_bridge(RoomEventHandlers::default());
    bridge.attach_view(ViewHandle(9));
    bridge.deactivate();
    assert!(channel.commands().is_empty());
}

#[test]
fn view_platform_events_arrive_through_deliver_native_event() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let handler = {
        let seen = seen.clone();
        Callback::from(move |message: roomlink_types::BinaryMessage| {
            seen.borrow_mut().push(message)
        })
    };
    let (bridge, _channel) = view_bridge(RoomEventHandlers {
        on_data_track_binary_message_received: Some(handler),
        ..Default::default()
    });
    bridge.activate();

    bridge.deliver_native_event(
        "dataTrackBinaryMessageReceived",
        json!({"message": crate::codec::encode_binary_message(&[0, 255, 16]), "trackSid": "MT1"}),
    );

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, vec![0, 255, 16]);
    assert_eq!(seen[0].track_sid(), Some("MT1"));
}

#[test]
fn prepare_to_rebuild_renames_the_track_on_both_surfaces() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());
    bridge.prepare_to_rebuild_local_video_track("screen");
    assert_eq!(
        module.calls(),
        vec![
            ("setLocalVideoTrackName".to_string(), vec![json!("screen")]),
            ("prepareToRebuildLocalVideoTrack".to_string(), vec![]),
        ]
    );

    let (bridge, channel) = view_bridge(RoomEventHandlers::default());
    bridge.attach_view(ViewHandle(2));
    bridge.prepare_to_rebuild_local_video_track("screen");
    assert_eq!(
        channel.commands(),
        vec![(ViewHandle(2), 15, vec![json!("screen")])]
    );
}

#[test]
fn set_local_video_track_name_renames_without_a_rebuild() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());

    bridge.set_local_video_track_name("screen");

    assert_eq!(
        module.calls(),
        vec![("setLocalVideoTrackName".to_string(), vec![json!("screen")])]
    );

    // The rename sticks: activation announces the new name.
    bridge.activate();
    assert_eq!(
        module.calls()[1],
        ("setLocalVideoTrackName".to_string(), vec![json!("screen")])
    );
}

#[test]
fn set_remote_audio_playback_targets_one_participant() {
    let (bridge, module, _events) = module_bridge(RoomEventHandlers::default());

    bridge.set_remote_audio_playback("PA7", false);

    assert_eq!(
        module.calls(),
        vec![(
            "setRemoteAudioPlayback".to_string(),
            vec![json!("PA7"), json!(false)]
        )]
    );
}
