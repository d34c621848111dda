use yew::prelude::*;

use crate::catalog::{self, DecorationKind};
use crate::input::{mouse_point, touch_point};
use crate::model::{DragTarget, GlobeAction, GlobeState};
use crate::state::PointerKind;

#[derive(Properties, PartialEq, Clone)]
pub struct PalettePanelProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Decoration tiles. Mouse users drag them with native drag-and-drop; touch
/// users press and slide, which the globe view follows via document listeners.
#[function_component(PalettePanel)]
pub fn palette_panel(props: &PalettePanelProps) -> Html {
    let g = &props.globe;
    let c = catalog::colors(g.theme);
    let shaking = g.is_shaking();

    html! {
        <div style={format!("padding:16px; border-radius:16px; background:{}; border:3px solid {};", c.panel, c.border)}>
            <h3 style="margin:0 0 4px; font-size:17px;">{ "✨ Objects" }</h3>
            <p style={format!("margin:0 0 12px; font-size:12px; color:{};", c.muted)}>
                { "Drag into the globe. Click a placed object to remove it." }
            </p>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(72px, 1fr)); gap:10px;">
                { for DecorationKind::ALL.iter().map(|&kind| {
                    let d = catalog::decoration(kind);
                    let ondragstart = {
                        let dispatcher = g.dispatcher();
                        Callback::from(move |e: DragEvent| {
                            if let Some(dt) = e.data_transfer() {
                                // Firefox refuses to start a drag without data
                                if let Err(err) = dt.set_data("text/plain", kind.key()) {
                                    log::warn!("could not set drag data for {}: {:?}", kind.key(), err);
                                }
                                dt.set_effect_allowed("copy");
                            }
                            dispatcher.dispatch(GlobeAction::BeginDrag {
                                source: DragTarget::Palette(kind),
                                origin: mouse_point(&e),
                                rect: None,
                                input: PointerKind::Mouse,
                            });
                        })
                    };
                    let ondragend = {
                        let dispatcher = g.dispatcher();
                        Callback::from(move |_: DragEvent| dispatcher.dispatch(GlobeAction::CancelPlacement))
                    };
                    let ontouchstart = {
                        let dispatcher = g.dispatcher();
                        Callback::from(move |e: TouchEvent| {
                            if let Some(p) = touch_point(&e) {
                                dispatcher.dispatch(GlobeAction::BeginDrag {
                                    source: DragTarget::Palette(kind),
                                    origin: p,
                                    rect: None,
                                    input: PointerKind::Touch,
                                });
                            }
                        })
                    };
                    html! {
                        <div key={kind.key()} draggable={(!shaking).to_string()} title={d.label}
                            {ondragstart} {ondragend} {ontouchstart}
                            style={format!("display:flex; flex-direction:column; align-items:center; gap:4px; padding:10px 4px; border-radius:12px; border:2px solid {}; cursor:{}; user-select:none; touch-action:none; opacity:{};", c.border, if shaking { "not-allowed" } else { "grab" }, if shaking { 0.5 } else { 1.0 })}>
                            <span style="font-size:30px;">{ d.glyph }</span>
                            <span style="font-size:11px; font-weight:600;">{ d.label }</span>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
