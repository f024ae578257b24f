//! Replays a scripted mouse session against an in-memory document and
//! prints the scroll state after each event.

use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use table_container::{Container, ContainerConfig};
use tabledom::{Document, Element, Event, Host, LayoutMetrics};

/// One terminal cell in pixels.
const CELL_WIDTH: f32 = 8.0;
const CELL_HEIGHT: f32 = 20.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let metrics = LayoutMetrics {
        char_width: CELL_WIDTH,
        line_height: CELL_HEIGHT,
        ..LayoutMetrics::default()
    };
    let mut doc = Document::new(800.0, 480.0).with_metrics(metrics);

    let config = ContainerConfig::from_json(
        r##"{
            "width": "320px",
            "height": "200px",
            "className": "orders",
            "scrollbarStyle": { "foregroundFocus": { "backgroundColor": "#44475A" } }
        }"##,
    )?;
    let mut container = Container::new(config, orders());
    container.attach(&mut doc)?;
    report("attached", &container, &doc);

    let mut now = Instant::now();
    for (label, raw) in script() {
        let Some(event) = Event::from_crossterm(&raw, CELL_WIDTH, CELL_HEIGHT) else {
            continue;
        };
        let event = if matches!(event, Event::Wheel { .. } | Event::PointerDown { .. }) {
            let (x, y) = position(&raw);
            event.with_target(doc.target_at(x, y))
        } else {
            event
        };

        let result = container.handle_event(&event, now, &mut doc);
        now += Duration::from_millis(20);
        container.tick(now, &doc);
        container.flush(&mut doc)?;
        report(&format!("{label} ({result:?})"), &container, &doc);
    }

    container.unmount();
    Ok(())
}

fn orders() -> Element {
    let header = Element::thead().child(
        Element::tr()
            .child(Element::th("Order"))
            .child(Element::th("Customer"))
            .child(Element::th("Status"))
            .child(Element::th("Total")),
    );
    let rows = (1..=40).map(|i| {
        Element::tr()
            .child(Element::td(format!("#{:05}", 1000 + i)))
            .child(Element::td(format!("Customer number {i}")))
            .child(Element::td(if i % 3 == 0 { "shipped" } else { "pending" }))
            .child(Element::td(format!("{}.{:02}", i * 17, i % 100)))
    });
    Element::table()
        .child(header)
        .child(Element::tbody().children(rows))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn position(raw: &CrosstermEvent) -> (f32, f32) {
    match raw {
        CrosstermEvent::Mouse(m) => (m.column as f32 * CELL_WIDTH, m.row as f32 * CELL_HEIGHT),
        _ => (0.0, 0.0),
    }
}

fn script() -> Vec<(&'static str, CrosstermEvent)> {
    vec![
        ("wheel down", mouse(MouseEventKind::ScrollDown, 10, 4)),
        ("wheel down", mouse(MouseEventKind::ScrollDown, 10, 4)),
        ("wheel right", mouse(MouseEventKind::ScrollRight, 10, 4)),
        ("grab vertical thumb", mouse(MouseEventKind::Down(MouseButton::Left), 39, 2)),
        ("drag", mouse(MouseEventKind::Drag(MouseButton::Left), 39, 5)),
        ("release", mouse(MouseEventKind::Up(MouseButton::Left), 39, 5)),
        ("wheel up past the top", mouse(MouseEventKind::ScrollUp, 10, 4)),
        ("resize", CrosstermEvent::Resize(80, 20)),
    ]
}

fn report(label: &str, container: &Container, doc: &Document) {
    let state = container.scroll_state();
    let (window_x, window_y) = doc.window_scroll();
    println!(
        "{label:<32} top {:>6.1} ({:.2})  left {:>6.1} ({:.2})  window ({window_x}, {window_y})",
        state.margin_top, state.vertical_fraction, state.margin_left, state.horizontal_fraction,
    );
    if let Some(root) = doc.root() {
        log::debug!("[demo] committed {}", root.id);
    }
}
