use std::time::{Duration, Instant};

use table_container::{Container, ContainerConfig, DragPhase, Lifecycle};
use tabledom::{
    CssSize, DeltaMode, Document, Element, Event, EventKind, EventResult, Host, LayoutMetrics,
    Style,
};

fn table() -> Element {
    Element::table()
        .child(Element::thead().child(Element::tr().child(Element::th("Id"))))
        .child(
            Element::tbody()
                .children((0..30).map(|i| Element::tr().child(Element::td(format!("row {i}"))))),
        )
}

fn app_style(size: f32) -> Style {
    Style::new()
        .width(CssSize::Px(size))
        .height(CssSize::Px(size))
}

/// A container filling a `size` x `size` parent.
fn fill_parent(size: f32) -> (Container, Document) {
    let mut doc = Document::new(1200.0, 900.0)
        .with_metrics(LayoutMetrics::unpadded(10.0, 20.0))
        .with_app_style(app_style(size));
    let config = ContainerConfig::parse("100%", "100%").unwrap();
    let mut container = Container::new(config, table());
    container.attach(&mut doc).unwrap();
    (container, doc)
}

fn resize() -> Event {
    Event::Resize {
        width: 1000.0,
        height: 800.0,
    }
}

// ============================================================================
// Mount and Unmount
// ============================================================================

#[test]
fn test_mount_registers_listeners() {
    let mut doc = Document::new(800.0, 600.0);
    let config = ContainerConfig::new(CssSize::Px(100.0), CssSize::Px(100.0));
    let mut container = Container::new(config, table());
    assert_eq!(container.lifecycle(), Lifecycle::Unmounted);
    assert!(!container.listens(EventKind::Wheel));

    doc.commit(container.render().unwrap());
    container.mount(&doc);

    assert_eq!(container.lifecycle(), Lifecycle::Mounted(DragPhase::Idle));
    for kind in [
        EventKind::Wheel,
        EventKind::TouchStart,
        EventKind::TouchMove,
        EventKind::TouchEnd,
        EventKind::TouchCancel,
        EventKind::Resize,
        EventKind::PointerDown,
    ] {
        assert!(container.listens(kind), "{kind:?} not registered");
    }
    assert_eq!(container.dimensions().container_width, 100.0);
}

#[test]
fn test_mount_before_commit_uses_zero_dimensions() {
    let doc = Document::new(800.0, 600.0);
    let config = ContainerConfig::new(CssSize::Px(100.0), CssSize::Px(100.0));
    let mut container = Container::new(config, table());

    container.mount(&doc);

    assert!(container.is_mounted());
    assert_eq!(container.dimensions().max_scroll_top(), 0.0);
    assert!(!container.vertical_scrollbar().is_scrollable());
}

#[test]
fn test_unmount_removes_listeners_and_pending_resize() {
    let (mut container, mut doc) = fill_parent(300.0);
    let now = Instant::now();
    container.handle_event(&resize(), now, &mut doc);
    assert!(container.resize_pending());

    container.unmount();

    assert_eq!(container.lifecycle(), Lifecycle::Unmounted);
    assert!(!container.resize_pending());
    assert!(!container.listens(EventKind::Wheel));

    let wheel = Event::Wheel {
        target: Some(container.ids().main_table.clone()),
        delta_x: 0.0,
        delta_y: 5.0,
        mode: DeltaMode::Line,
    };
    assert_eq!(container.handle_event(&wheel, now, &mut doc), EventResult::Ignored);
    assert_eq!(container.scroll_state().margin_top, 0.0);

    doc.set_app_style(app_style(100.0));
    assert!(!container.tick(now + Duration::from_millis(50), &doc));
}

#[test]
fn test_unmount_ends_drags() {
    let (mut container, mut doc) = fill_parent(300.0);
    let down = Event::PointerDown {
        target: Some(container.ids().vertical_thumb.clone()),
        x: 0.0,
        y: 0.0,
        button: tabledom::MouseButton::Left,
    };
    container.handle_event(&down, Instant::now(), &mut doc);
    container.on_touch_start(1.0, 1.0);
    assert!(container.vertical_scrollbar().is_dragging());

    container.unmount();

    assert!(!container.vertical_scrollbar().is_dragging());
    assert!(!container.lifecycle().is_dragging());
}

// ============================================================================
// Debounced Resize
// ============================================================================

#[test]
fn test_resize_is_debounced() {
    let (mut container, mut doc) = fill_parent(300.0);
    assert_eq!(container.dimensions().container_height, 300.0);
    let t0 = Instant::now();

    assert_eq!(container.handle_event(&resize(), t0, &mut doc), EventResult::Ignored);
    doc.set_app_style(app_style(200.0));

    assert!(!container.tick(t0 + Duration::from_millis(10), &doc), "still inside 16 ms");
    container.handle_event(&resize(), t0 + Duration::from_millis(10), &mut doc);
    assert!(!container.tick(t0 + Duration::from_millis(20), &doc), "restarted by the second resize");

    assert!(container.tick(t0 + Duration::from_millis(26), &doc));
    assert_eq!(container.dimensions().container_height, 200.0);
    assert!(!container.tick(t0 + Duration::from_millis(100), &doc), "fires once per burst");
}

#[test]
fn test_resize_clamps_scroll() {
    let (mut container, mut doc) = fill_parent(300.0);
    // 31 rows of 20 px: 620 px in a 300 px box.
    container.on_vertical_scroll(1.0);
    assert_eq!(container.scroll_state().margin_top, 320.0);

    let t0 = Instant::now();
    container.handle_event(&resize(), t0, &mut doc);
    doc.set_app_style(app_style(500.0));
    container.tick(t0 + Duration::from_millis(16), &doc);

    assert_eq!(container.scroll_state().margin_top, 120.0);
    assert_eq!(container.scroll_state().vertical_fraction, 1.0);
    assert!(container.needs_render());
}

#[test]
fn test_resize_without_change_reports_false() {
    let (mut container, mut doc) = fill_parent(300.0);
    let t0 = Instant::now();
    container.handle_event(&resize(), t0, &mut doc);
    assert!(!container.tick(t0 + Duration::from_millis(16), &doc));
    assert!(!container.resize_pending());
}

// ============================================================================
// Flush
// ============================================================================

#[test]
fn test_flush_is_noop_when_clean() {
    let (mut container, mut doc) = fill_parent(300.0);
    let commits = doc.commits();
    assert_eq!(container.flush(&mut doc).unwrap(), 0);
    assert_eq!(doc.commits(), commits);
}

#[test]
fn test_flush_commits_after_scroll() {
    let (mut container, mut doc) = fill_parent(300.0);
    container.on_vertical_scroll(0.5);
    assert!(container.needs_render());

    let passes = container.flush(&mut doc).unwrap();

    assert_eq!(passes, 1);
    assert!(!container.needs_render());
    let margin = doc.style_of(&container.ids().main_table).unwrap().margin_top;
    assert_eq!(margin, Some(-160.0));
}
