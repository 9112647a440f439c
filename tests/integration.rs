// SPDX-License-Identifier: MPL-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;
use toastkit::config::{self, Config};
use toastkit::domain::toast::{ToastDuration, Zone};
use toastkit::notifications::{
    CloseReason, ManualClock, Manager, Phase, ToastEventKind, ToastId, ToastProvider,
};

const TICK: Duration = Duration::from_millis(10);

fn tick_for(manager: &mut Manager<ManualClock>, clock: &ManualClock, total: Duration) {
    for _ in 0..(total.as_millis() / TICK.as_millis()) {
        clock.advance(TICK);
        manager.tick();
    }
}

fn phase(manager: &Manager<ManualClock>, id: ToastId) -> Option<Phase> {
    manager.view(id).map(|view| view.phase)
}

#[test]
fn expiry_and_removal_follow_the_schedule_for_many_durations() {
    for duration_ms in [10_u64, 100, 1000, 2500, 3000] {
        let clock = ManualClock::new();
        let mut manager = Manager::with_clock(clock.clone());
        let removed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&removed);
        let id = manager.show_with_callback(
            "scheduled",
            Zone::TopLeft,
            ToastDuration::from_millis(duration_ms),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        tick_for(&mut manager, &clock, Duration::from_millis(duration_ms) - TICK);
        assert_eq!(phase(&manager, id), Some(Phase::Visible), "{duration_ms} ms");
        tick_for(&mut manager, &clock, TICK);
        assert_eq!(phase(&manager, id), Some(Phase::Closing), "{duration_ms} ms");

        tick_for(&mut manager, &clock, Duration::from_millis(290));
        assert_eq!(phase(&manager, id), Some(Phase::Closing), "{duration_ms} ms");
        tick_for(&mut manager, &clock, TICK);
        assert_eq!(phase(&manager, id), None, "{duration_ms} ms");

        tick_for(&mut manager, &clock, Duration::from_secs(1));
        assert_eq!(removed.load(Ordering::SeqCst), 1, "{duration_ms} ms");
    }
}

#[test]
fn persistent_toast_never_leaves_visible() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());
    let id = manager.show("forever", Zone::BottomCenter, ToastDuration::PERSISTENT);

    tick_for(&mut manager, &clock, Duration::from_secs(30));
    clock.advance(Duration::from_secs(3600));
    manager.tick();

    assert_eq!(phase(&manager, id), Some(Phase::Visible));
}

#[test]
fn hover_excludes_time_from_countdown() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());
    let id = manager.show("hover me", Zone::TopRight, ToastDuration::from_millis(1000));

    tick_for(&mut manager, &clock, Duration::from_millis(500));
    manager.hover_start(id);
    tick_for(&mut manager, &clock, Duration::from_millis(2000));
    manager.hover_end(id);

    tick_for(&mut manager, &clock, Duration::from_millis(490));
    assert_eq!(phase(&manager, id), Some(Phase::Visible));
    tick_for(&mut manager, &clock, TICK);
    assert_eq!(phase(&manager, id), Some(Phase::Closing));
}

#[test]
fn close_request_skips_countdown() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());
    let id = manager.show("close me", Zone::TopRight, ToastDuration::from_millis(1000));
    tick_for(&mut manager, &clock, Duration::from_millis(100));

    manager.dismiss(id);
    assert_eq!(phase(&manager, id), Some(Phase::Closing));

    tick_for(&mut manager, &clock, Duration::from_secs(5));
    let closing: Vec<_> = manager
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e.kind, ToastEventKind::Closing(_)))
        .collect();
    assert_eq!(closing.len(), 1);
    assert_eq!(closing[0].kind, ToastEventKind::Closing(CloseReason::Requested));
}

#[test]
fn stacking_order_depends_on_vertical_anchor() {
    let mut manager = Manager::with_clock(ManualClock::new());
    let bottom: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|m| manager.show(*m, Zone::BottomRight, ToastDuration::default()))
        .collect();
    let top: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|m| manager.show(*m, Zone::TopRight, ToastDuration::default()))
        .collect();

    let listed = |zone: Zone| -> Vec<ToastId> {
        manager.list_by_zone(zone).iter().map(|r| r.id()).collect()
    };
    assert_eq!(listed(Zone::BottomRight), vec![bottom[2], bottom[1], bottom[0]]);
    assert_eq!(listed(Zone::TopRight), top);
    assert!(listed(Zone::TopLeft).is_empty());
}

#[test]
fn remove_all_then_list_is_empty_everywhere() {
    let mut manager = Manager::with_clock(ManualClock::new());
    for zone in Zone::ALL {
        manager.show("x", zone, ToastDuration::default());
        manager.show("y", zone, ToastDuration::PERSISTENT);
    }
    manager.remove_all();
    manager.remove_all();

    for zone in Zone::ALL {
        assert!(manager.list_by_zone(zone).is_empty());
    }
}

#[test]
fn provider_uses_configured_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut saved = Config::default();
    saved.toasts.default_zone = Some(Zone::BottomLeft);
    saved.toasts.default_duration_ms = Some(1500);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let provider = ToastProvider::new(Manager::with_clock(ManualClock::new()).with_defaults(&loaded));
    let handle = provider.handle();
    let id = handle.show_default("from config").expect("provider is alive");

    let listed = handle.list_by_zone(Zone::BottomLeft).expect("provider is alive");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), id);
    assert_eq!(listed[0].duration().as_millis(), 1500);

    dir.close().expect("Failed to close temporary directory");
}
