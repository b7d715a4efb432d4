// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap, long press, and programmatic tooltips.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_tap`

use core::time::Duration;

use understory_tooltip::{DeviceId, Phase, TooltipConfig, Tooltips, TriggerMode};

fn main() {
    let mut tooltips = Tooltips::new();
    let tap = tooltips.mount(TooltipConfig::default().with_trigger_mode(TriggerMode::Tap));
    let press = tooltips.mount(TooltipConfig::default());
    let manual = tooltips.mount(TooltipConfig::default().with_trigger_mode(TriggerMode::Manual));
    tooltips.set_on_triggered(tap, Some(Box::new(|id| println!("  triggered {id:?}"))));

    let finger = DeviceId(1);

    println!("== tap ==");
    tooltips.tap_down(tap, finger);
    for (ms, expected) in [(150, Phase::Visible), (850, Phase::FadingOut), (75, Phase::Dismissed)] {
        tooltips.tick(Duration::from_millis(ms));
        println!("  +{ms}ms {:?}", tooltips.phase(tap));
        assert_eq!(tooltips.phase(tap), Some(expected));
    }

    println!("== long press ==");
    tooltips.long_press(press, finger);
    tooltips.tick(Duration::from_secs(2));
    assert_eq!(tooltips.phase(press), Some(Phase::Visible));
    tooltips.long_press_up(press);
    println!("  released, pending {:?}", tooltips.pending_timer(press));

    println!("== ensure visible, then dismiss all ==");
    assert!(tooltips.ensure_visible(manual));
    println!("  open: {:?}", tooltips.registry().iter().collect::<Vec<_>>());
    assert!(tooltips.dismiss_all());
    tooltips.tick(Duration::from_millis(75));
    assert!(tooltips.registry().is_empty());

    for event in tooltips.take_events() {
        println!("  {event:?}");
    }
}
