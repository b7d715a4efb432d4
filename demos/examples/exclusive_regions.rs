// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive hover regions.
//!
//! Three nested exclusive regions A ⊃ B ⊃ C and one plain region beside them.
//! Moving a pointer inward only ever reports the innermost exclusive region as
//! hovered, while the plain region behaves like ordinary hover.
//!
//! Run:
//! - `cargo run -p understory_demos --example exclusive_regions`

use kurbo::{Point, Rect};
use understory_hit_region::{HoverEvent, HoverTracker, PointerId, Region, RegionTree};

fn main() {
    let mut tree = RegionTree::new();
    let a = tree.insert(None, Region::exclusive(Rect::new(0.0, 0.0, 300.0, 300.0)));
    let b = tree.insert(Some(a), Region::exclusive(Rect::new(50.0, 50.0, 250.0, 250.0)));
    let c = tree.insert(Some(b), Region::exclusive(Rect::new(100.0, 100.0, 200.0, 200.0)));
    let plain = tree.insert(None, Region {
        local_bounds: Rect::new(400.0, 0.0, 500.0, 100.0),
        ..Region::default()
    });
    let plain_child = tree.insert(Some(plain), Region {
        local_bounds: Rect::new(420.0, 20.0, 480.0, 80.0),
        ..Region::default()
    });

    let mouse = PointerId(0);
    let mut hover = HoverTracker::new();
    let mut step = |label: &str, pt: Point| {
        let hit = tree.hit_test(pt);
        let events = hover.update(mouse, &hit.hover_targets);
        println!("== {label} at {pt:?} ==\n  path {:?}\n  {events:?}", hit.path);
        events
    };

    assert_eq!(step("A", Point::new(10.0, 10.0)), vec![HoverEvent::Enter(mouse, a)]);
    assert_eq!(
        step("B", Point::new(60.0, 60.0)),
        vec![HoverEvent::Exit(mouse, a), HoverEvent::Enter(mouse, b)]
    );
    assert_eq!(
        step("C", Point::new(150.0, 150.0)),
        vec![HoverEvent::Exit(mouse, b), HoverEvent::Enter(mouse, c)]
    );
    // Plain regions report the whole chain, outer first.
    assert_eq!(
        step("plain", Point::new(450.0, 50.0)),
        vec![
            HoverEvent::Exit(mouse, c),
            HoverEvent::Enter(mouse, plain),
            HoverEvent::Enter(mouse, plain_child),
        ]
    );
}
