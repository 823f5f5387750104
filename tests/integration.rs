// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, ToastPosition, ToastsConfig};
use iced_toasts::queue::{ActiveToast, ManualScheduler, ToastQueue};
use iced_toasts::toast::{Alert, Toast};
use std::time::Duration;
use tempfile::tempdir;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn saved_toast_scenario() {
    let mut queue = ToastQueue::new(ManualScheduler::new());
    queue.push(Toast::new(Alert::Success, "Saved"));

    let snapshot: Vec<_> = queue
        .iter()
        .map(|entry| (entry.id().value(), entry.content().to_string(), entry.alert()))
        .collect();
    assert_eq!(snapshot, vec![(0, "Saved".to_string(), Alert::Success)]);

    queue.advance(ms(2500));
    assert!(queue.is_empty());
}

#[test]
fn long_and_short_toast_scenario() {
    let mut queue = ToastQueue::new(ManualScheduler::new());
    queue.push(Toast::info("A").with_duration_ms(5000));
    queue.push(Toast::info("B").with_duration_ms(1000));

    queue.advance(ms(1000));
    let remaining: Vec<_> = queue.iter().map(ActiveToast::content).collect();
    assert_eq!(remaining, ["A"]);

    queue.advance(ms(4000));
    assert!(queue.is_empty());
}

#[test]
fn toast_present_until_its_duration_elapses() {
    for duration in [1, 250, 2500, 10_000] {
        let mut queue = ToastQueue::new(ManualScheduler::new());
        let id = queue.push(Toast::plain("tick").with_duration_ms(duration));

        queue.advance(ms(duration - 1));
        assert!(queue.contains(id), "toast gone before {duration}ms");
        queue.advance(ms(1));
        assert!(!queue.contains(id), "toast still queued at {duration}ms");
    }
}

#[test]
fn removals_keep_remaining_order() {
    let mut queue = ToastQueue::new(ManualScheduler::new());
    let a = queue.push(Toast::plain("a").with_duration_ms(3000));
    let _b = queue.push(Toast::plain("b").with_duration_ms(1000));
    let c = queue.push(Toast::plain("c").with_duration_ms(3000));
    let d = queue.push(Toast::plain("d"));

    queue.advance(ms(1000));
    assert_eq!(queue.ids(), vec![a, c, d]);

    queue.advance(ms(1500));
    assert_eq!(queue.ids(), vec![a, c]);
}

#[test]
fn configured_default_duration_drives_queue() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        toasts: ToastsConfig {
            default_duration_ms: Some(800),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut queue = ToastQueue::from_config(ManualScheduler::new(), &loaded.toasts);
    queue.push(Toast::warning("Battery low"));
    queue.advance(ms(799));
    assert_eq!(queue.len(), 1);
    queue.advance(ms(1));
    assert!(queue.is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn position_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.display.position = Some(ToastPosition::TopRight);
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let content = std::fs::read_to_string(&path).expect("Failed to read config file");
    assert!(content.contains("top-right"));

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.display.position, Some(ToastPosition::TopRight));
}
