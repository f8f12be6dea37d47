//! Pointer-reactive dock.
//!
//! The [`Dock`] container tracks the pointer along one axis and hands the
//! coordinate to its [`DockIcon`] entries, which grow toward the pointer
//! and relax back when it leaves. The size math lives in `folio-motion`;
//! this module owns the event plumbing and rendering.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use folio_motion::{
    Axis, MagnifyCurve, Rect, Spring, SpringConfig, DEFAULT_DISTANCE, DEFAULT_MAGNIFICATION,
    RESTING_SIZE,
};

/// Frame interval for the spring loop.
const FRAME: Duration = Duration::from_millis(16);
const FRAME_DT: f64 = 0.016;

/// Cross-axis alignment of dock entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockDirection {
    Start,
    #[default]
    Middle,
    End,
}

impl DockDirection {
    fn align_items(self) -> &'static str {
        match self {
            DockDirection::Start => "flex-start",
            DockDirection::Middle => "center",
            DockDirection::End => "flex-end",
        }
    }
}

/// One slot in the dock.
///
/// Only `Icon` entries are wired to the pointer; anything else passes
/// through exactly as given, with no tracking props attached.
#[derive(Clone, PartialEq)]
pub enum DockItem {
    Icon { label: String, body: Element },
    Static(Element),
}

/// Container that owns the pointer-position scalar for its icons.
///
/// The coordinate starts at the `f64::INFINITY` sentinel (pointer absent)
/// and returns to it on pointer-leave, so every icon relaxes to the
/// resting size.
#[component]
pub fn Dock(
    #[props(default = DEFAULT_MAGNIFICATION)] magnification: f64,
    #[props(default = DEFAULT_DISTANCE)] distance: f64,
    #[props(default)] direction: DockDirection,
    #[props(default)] orientation: Axis,
    items: Vec<DockItem>,
) -> Element {
    let mut pointer: Signal<f64> = use_signal(|| f64::INFINITY);

    let flow = match orientation {
        Axis::Horizontal => "row",
        Axis::Vertical => "column",
    };
    let align = direction.align_items();

    let entries = items.iter().map(|item| match item {
        DockItem::Icon { label, body } => rsx! {
            DockIcon {
                pointer,
                magnification,
                distance,
                orientation,
                label: label.clone(),
                children: body.clone(),
            }
        },
        DockItem::Static(element) => rsx! {
            {element.clone()}
        },
    });

    rsx! {
        div {
            class: "dock",
            style: "flex-direction: {flow}; align-items: {align};",
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                pointer.set(orientation.pick(point.x, point.y));
            },
            onmouseleave: move |_| pointer.set(f64::INFINITY),
            {entries}
        }
    }
}

/// A single dock icon whose size follows pointer proximity.
///
/// Rendered outside a [`Dock`] (no pointer source supplied), the default
/// signal holds a stationary 0.0 and the icon sits at its resting size.
#[component]
pub fn DockIcon(
    // A stationary fallback coordinate keeps stray icons at rest.
    #[props(default = ReadOnlySignal::new(Signal::new(0.0)))] pointer: ReadOnlySignal<f64>,
    #[props(default = DEFAULT_MAGNIFICATION)] magnification: f64,
    #[props(default = DEFAULT_DISTANCE)] distance: f64,
    // Reactive so the measurement effect re-runs when the dock flips
    // orientation at the layout breakpoint.
    #[props(default = ReadOnlySignal::new(Signal::new(Axis::Horizontal)))] orientation: ReadOnlySignal<Axis>,
    #[props(default)] label: String,
    children: Element,
) -> Element {
    let mut anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut target: Signal<f64> = use_signal(|| RESTING_SIZE);
    let mut size: Signal<f64> = use_signal(|| RESTING_SIZE);

    let curve = MagnifyCurve::new(magnification, distance);

    // Re-derive the target size on every pointer move. Geometry is read
    // back from the live layout each time, never cached; an icon that has
    // not been measured yet counts as a zero box at the origin and stays
    // at rest.
    use_effect(move || {
        let coordinate = pointer();
        let axis = orientation();
        spawn(async move {
            let rect = match anchor() {
                Some(element) => match element.get_client_rect().await {
                    Ok(bounds) => Rect::new(
                        bounds.origin.x,
                        bounds.origin.y,
                        bounds.size.width,
                        bounds.size.height,
                    ),
                    Err(_) => Rect::ZERO,
                },
                None => Rect::ZERO,
            };
            let center = rect.center(axis);
            target.set(curve.target_size(coordinate - center));
        });
    });

    // Spring loop: chase whatever the latest target is. While settled the
    // loop idles without touching the size signal, so a static pointer
    // costs no re-renders.
    use_future(move || async move {
        let mut spring = Spring::new(RESTING_SIZE, SpringConfig::DOCK);
        let mut frames = tokio::time::interval(FRAME);
        loop {
            frames.tick().await;
            spring.set_target(*target.peek());
            if spring.is_settled() {
                continue;
            }
            spring.tick(FRAME_DT);
            size.set(spring.value());
        }
    });

    rsx! {
        div {
            class: "dock-icon",
            style: "width: {size()}px; height: {size()}px;",
            title: "{label}",
            "aria-label": "{label}",
            onmounted: move |evt| anchor.set(Some(evt.data())),
            {children}
        }
    }
}
