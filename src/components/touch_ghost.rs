use yew::prelude::*;

use crate::catalog;
use crate::model::GlobeState;
use crate::state::{DragState, PointerKind};

#[derive(Properties, PartialEq, Clone)]
pub struct TouchGhostProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Floating copy of the decoration under the finger during a touch placement.
#[function_component(TouchGhost)]
pub fn touch_ghost(props: &TouchGhostProps) -> Html {
    let DragState::Placing { kind, pointer, input: PointerKind::Touch } = props.globe.gestures.state else {
        return html! {};
    };
    html! {
        <div style={format!(
            "position:fixed; left:{:.1}px; top:{:.1}px; transform:translate(-50%, -50%) scale(1.2); font-size:40px; opacity:0.8; pointer-events:none; z-index:80; filter:drop-shadow(0 8px 16px rgba(0,0,0,0.3));",
            pointer.x, pointer.y
        )}>
            { catalog::decoration(kind).glyph }
        </div>
    }
}
