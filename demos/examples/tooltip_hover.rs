// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-driven tooltips on nested triggers.
//!
//! A toolbar trigger contains a button trigger. Hovering the button shows only
//! the button's tooltip; moving back out onto the toolbar swaps to the
//! toolbar's tooltip without waiting for the hover delay.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_hover`

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_hit_region::{HoverTracker, PointerId, Region, RegionId, RegionTree};
use understory_tooltip::adapters::hit_region::{pointer_left, pointer_moved, trigger_anchor};
use understory_tooltip::{Phase, PointerKind, TooltipConfig, TooltipEvent, TooltipId, Tooltips};

const FRAME: Duration = Duration::from_millis(16);

fn run_frames(tooltips: &mut Tooltips, frames: u32) {
    for _ in 0..frames {
        tooltips.tick(FRAME);
    }
}

fn report(tooltips: &mut Tooltips, tree: &RegionTree, triggers: &[(RegionId, TooltipId, &str)]) {
    for event in tooltips.take_events() {
        match event {
            TooltipEvent::OverlayShown(id) => {
                let Some(&(region, _, name)) = triggers.iter().find(|t| t.1 == id) else {
                    continue;
                };
                let anchor = trigger_anchor(tree, region).unwrap();
                tooltips.place_overlay(id, anchor);
                let offset = tooltips.reposition_overlay(id, Size::new(80.0, 24.0));
                println!("  show {name} at {offset:?}");
            }
            TooltipEvent::OverlayHidden(id) => {
                let name = triggers.iter().find(|t| t.1 == id).map_or("?", |t| t.2);
                println!("  hide {name}");
            }
            TooltipEvent::PhaseChanged { tooltip, from, to } => {
                let name = triggers.iter().find(|t| t.1 == tooltip).map_or("?", |t| t.2);
                println!("  {name}: {from:?} -> {to:?}");
            }
            other => println!("  {other:?}"),
        }
    }
}

fn main() {
    let mut tree = RegionTree::new();
    let toolbar_r = tree.insert(None, Region::exclusive(Rect::new(0.0, 0.0, 400.0, 40.0)));
    let button_r = tree.insert(
        Some(toolbar_r),
        Region::exclusive(Rect::new(10.0, 5.0, 40.0, 35.0)),
    );

    let mut tooltips = Tooltips::new();
    let config = TooltipConfig::default().with_wait_delay(Duration::from_millis(300));
    let toolbar_t = tooltips.mount(config.clone());
    let button_t = tooltips.mount(config);

    let triggers = [(toolbar_r, toolbar_t, "toolbar"), (button_r, button_t, "button")];
    let lookup = |r: RegionId| triggers.iter().find(|t| t.0 == r).map(|t| t.1);

    let mouse = PointerId(0);
    let mut tracker = HoverTracker::new();

    println!("== pointer over the button ==");
    pointer_moved(&tree, &mut tracker, &mut tooltips, &lookup, mouse, Point::new(20.0, 20.0), PointerKind::Mouse);
    run_frames(&mut tooltips, 30);
    report(&mut tooltips, &tree, &triggers);
    assert_eq!(tooltips.phase(button_t), Some(Phase::Visible));
    assert_eq!(tooltips.phase(toolbar_t), Some(Phase::Dismissed));

    println!("== pointer back onto the toolbar ==");
    pointer_moved(&tree, &mut tracker, &mut tooltips, &lookup, mouse, Point::new(200.0, 20.0), PointerKind::Mouse);
    run_frames(&mut tooltips, 10);
    report(&mut tooltips, &tree, &triggers);
    assert_eq!(tooltips.phase(button_t), Some(Phase::Dismissed));
    assert_eq!(tooltips.phase(toolbar_t), Some(Phase::Visible));

    println!("== pointer leaves the window ==");
    pointer_left(&mut tracker, &mut tooltips, &lookup, mouse, PointerKind::Mouse);
    run_frames(&mut tooltips, 20);
    report(&mut tooltips, &tree, &triggers);
    assert!(tooltips.registry().is_empty());
}
