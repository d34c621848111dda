use wasm_bindgen::JsCast;
use web_sys::EventTarget;
use yew::prelude::*;

use crate::catalog::{self, Theme};
use crate::input::{ListenerGuard, changed_touch_point, globe_rect, mouse_point, touch_point};
use crate::model::{DragTarget, GlobeAction, GlobeState, PlacedObject};
use crate::particles::Snowflake;
use crate::state::{DragMode, PointerKind};
use crate::util::object_count_label;

#[derive(Properties, PartialEq, Clone)]
pub struct GlobeViewProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Document listeners for the gesture currently in progress, one set per
/// device. Mouse placement uses native drag-and-drop and needs none.
fn gesture_listeners(
    mode: DragMode,
    doc: &EventTarget,
    dispatcher: &UseReducerDispatcher<GlobeState>,
    globe_ref: &NodeRef,
) -> Vec<ListenerGuard> {
    let touch_move = {
        let d = dispatcher.clone();
        let r = globe_ref.clone();
        move |e: web_sys::Event| {
            // keeps the page from scrolling under the finger
            e.prevent_default();
            if let Some(p) = e.dyn_ref::<TouchEvent>().and_then(touch_point) {
                d.dispatch(GlobeAction::UpdateDrag { point: p, rect: globe_rect(&r) });
            }
        }
    };
    let touch_end = {
        let d = dispatcher.clone();
        let r = globe_ref.clone();
        move |e: web_sys::Event| {
            // no synthetic mouse events or click after a touch gesture
            e.prevent_default();
            let point = e.dyn_ref::<TouchEvent>().and_then(changed_touch_point);
            d.dispatch(GlobeAction::EndDrag { point, rect: globe_rect(&r) });
        }
    };

    let guards = match mode {
        DragMode::Idle | DragMode::Placing(PointerKind::Mouse) => Vec::new(),
        DragMode::Placing(PointerKind::Touch) => {
            let d = dispatcher.clone();
            vec![
                ListenerGuard::attach(doc, "touchmove", false, touch_move),
                ListenerGuard::attach(doc, "touchend", false, touch_end),
                ListenerGuard::attach(doc, "touchcancel", true, move |_| {
                    d.dispatch(GlobeAction::CancelPlacement)
                }),
            ]
        }
        DragMode::Repositioning(PointerKind::Mouse) => {
            let mouse_move = {
                let d = dispatcher.clone();
                let r = globe_ref.clone();
                move |e: web_sys::Event| {
                    if let Some(m) = e.dyn_ref::<MouseEvent>() {
                        d.dispatch(GlobeAction::UpdateDrag { point: mouse_point(m), rect: globe_rect(&r) });
                    }
                }
            };
            let mouse_up = {
                let d = dispatcher.clone();
                let r = globe_ref.clone();
                move |e: web_sys::Event| {
                    let point = e.dyn_ref::<MouseEvent>().map(mouse_point);
                    d.dispatch(GlobeAction::EndDrag { point, rect: globe_rect(&r) });
                }
            };
            vec![
                ListenerGuard::attach(doc, "mousemove", true, mouse_move),
                ListenerGuard::attach(doc, "mouseup", true, mouse_up),
            ]
        }
        DragMode::Repositioning(PointerKind::Touch) => {
            let d = dispatcher.clone();
            vec![
                ListenerGuard::attach(doc, "touchmove", false, touch_move),
                ListenerGuard::attach(doc, "touchend", false, touch_end),
                ListenerGuard::attach(doc, "touchcancel", true, move |_| {
                    d.dispatch(GlobeAction::CancelDrag)
                }),
            ]
        }
    };
    guards.into_iter().flatten().collect()
}

#[function_component(GlobeView)]
pub fn globe_view(props: &GlobeViewProps) -> Html {
    let g = &props.globe;
    let globe_ref = use_node_ref();

    // Listeners live exactly as long as one gesture mode.
    {
        let dispatcher = g.dispatcher();
        let globe_ref = globe_ref.clone();
        use_effect_with(g.gestures.mode(), move |mode| {
            let guards = web_sys::window()
                .and_then(|w| w.document())
                .map(|doc| gesture_listeners(*mode, &doc, &dispatcher, &globe_ref))
                .unwrap_or_default();
            if !guards.is_empty() {
                log::debug!("gesture {:?}: {} listeners", mode, guards.len());
            }
            move || drop(guards)
        });
    }

    let ondragover = Callback::from(|e: DragEvent| {
        e.prevent_default();
        if let Some(dt) = e.data_transfer() {
            dt.set_drop_effect("copy");
        }
    });
    let ondrop = {
        let dispatcher = g.dispatcher();
        let globe_ref = globe_ref.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dispatcher.dispatch(GlobeAction::EndDrag {
                point: Some(mouse_point(&e)),
                rect: globe_rect(&globe_ref),
            });
        })
    };

    let theme = g.theme;
    let shaking = g.is_shaking();
    let dragged = g.gestures.dragged_object();
    let rim = if theme.is_dark() { "rgba(203,213,225,0.3)" } else { "#000" };
    let filter = if g.is_whiteout() {
        "drop-shadow(0 20px 40px rgba(0,0,0,0.3)) brightness(3) contrast(0.1)"
    } else {
        "drop-shadow(0 20px 40px rgba(0,0,0,0.3))"
    };
    let globe_style = format!(
        "position:relative; width:min(80vw, 384px); aspect-ratio:1; border-radius:50%; overflow:hidden; border:8px solid {}; filter:{}; cursor:{}; {} {}",
        rim,
        filter,
        if shaking { "default" } else { "crosshair" },
        if shaking { "pointer-events:none; opacity:0.9;" } else { "" },
        catalog::background(g.background).style(theme),
    );

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:16px;">
            <div style="perspective:1000px;">
                <div ref={globe_ref.clone()} class={classes!("globe", shaking.then_some("shaking"))}
                    style={globe_style} {ondragover} {ondrop}>
                    { if g.is_whiteout() { html! {
                        <div class="whiteout" style="position:absolute; inset:0; background:#fff; opacity:0.95; z-index:50;"></div>
                    } } else { html! {} } }
                    { for g.objects.iter().map(|o| object_view(g, &globe_ref, o, dragged == Some(o.id), theme)) }
                    { for g.globe_snow.iter().map(globe_flake) }
                    <div style="position:absolute; inset:0; border-radius:50%; pointer-events:none; background:linear-gradient(135deg, rgba(255,255,255,0.3), transparent 50%);"></div>
                    <div style="position:absolute; top:32px; left:32px; width:64px; height:64px; border-radius:50%; background:rgba(255,255,255,0.4); filter:blur(16px); pointer-events:none;"></div>
                    <div style="position:absolute; bottom:48px; right:48px; width:32px; height:32px; border-radius:50%; background:rgba(255,255,255,0.3); filter:blur(12px); pointer-events:none;"></div>
                    { if g.gestures.is_placing() { html! {
                        <div style="position:absolute; inset:16px; border:4px dashed rgba(255,255,255,0.6); border-radius:50%; display:flex; align-items:center; justify-content:center; pointer-events:none;">
                            <span style="color:rgba(255,255,255,0.8); font-size:18px; font-weight:600;">{ "Drop Here" }</span>
                        </div>
                    } } else { html! {} } }
                </div>
            </div>
            <div style={format!("width:60%; height:28px; margin-top:-24px; border-radius:0 0 40px 40px; background:{};", if theme.is_dark() { "#334155" } else { "#92400e" })}></div>
            <span style={format!("font-size:14px; color:{};", catalog::colors(theme).muted)}>
                { object_count_label(g.objects.len()) }
            </span>
        </div>
    }
}

fn object_view(
    g: &UseReducerHandle<GlobeState>,
    globe_ref: &NodeRef,
    o: &PlacedObject,
    dragging: bool,
    theme: Theme,
) -> Html {
    let id = o.id;
    let onmousedown = {
        let dispatcher = g.dispatcher();
        let globe_ref = globe_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // no text selection while dragging
            e.prevent_default();
            dispatcher.dispatch(GlobeAction::BeginDrag {
                source: DragTarget::Object(id),
                origin: mouse_point(&e),
                rect: globe_rect(&globe_ref),
                input: PointerKind::Mouse,
            });
        })
    };
    let ontouchstart = {
        let dispatcher = g.dispatcher();
        let globe_ref = globe_ref.clone();
        Callback::from(move |e: TouchEvent| {
            e.stop_propagation();
            let Some(origin) = touch_point(&e) else { return };
            dispatcher.dispatch(GlobeAction::BeginDrag {
                source: DragTarget::Object(id),
                origin,
                rect: globe_rect(&globe_ref),
                input: PointerKind::Touch,
            });
        })
    };
    let onclick = {
        let dispatcher = g.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GlobeAction::ClickObject(id)))
    };
    let glyph = catalog::decoration(o.kind).glyph;
    html! {
        <div key={id.0.to_string()} class="globe-object" title={catalog::decoration(o.kind).label}
            {onmousedown} {ontouchstart} {onclick}
            style={format!(
                "position:absolute; left:{:.2}%; top:{:.2}%; transform:translate(-50%, -50%) scale({:.2}); font-size:40px; user-select:none; touch-action:none; filter:drop-shadow(2px 2px 4px rgba(0,0,0,0.3)); cursor:{}; z-index:{}; color:{};",
                o.x, o.y, o.scale,
                if dragging { "grabbing" } else { "pointer" },
                if dragging { 40 } else { 10 },
                if theme.is_dark() { "#e2e8f0" } else { "#92400e" },
            )}>
            { glyph }
        </div>
    }
}

fn globe_flake(f: &Snowflake) -> Html {
    html! {
        <div key={f.id.to_string()} style={format!(
            "position:absolute; left:{:.2}%; top:{:.2}%; font-size:{:.1}px; opacity:{:.2}; color:#fff; pointer-events:none; user-select:none; filter:drop-shadow(1px 1px 2px rgba(0,0,0,0.5));",
            f.x, f.y, f.size, f.opacity
        )}>{ "❄" }</div>
    }
}
