use yew::prelude::*;

use super::background_panel::BackgroundPanel;
use super::globe_view::GlobeView;
use super::palette_panel::PalettePanel;
use crate::catalog::BackgroundId;
use crate::model::{GlobeAction, GlobeState};

#[derive(Properties, PartialEq, Clone)]
pub struct BuilderViewProps {
    pub globe: UseReducerHandle<GlobeState>,
}

#[function_component(BuilderView)]
pub fn builder_view(props: &BuilderViewProps) -> Html {
    let g = &props.globe;
    let on_select = {
        let dispatcher = g.dispatcher();
        Callback::from(move |bg: BackgroundId| dispatcher.dispatch(GlobeAction::SelectBackground(bg)))
    };
    html! {
        <section style="max-width:1280px; margin:0 auto; padding:24px 16px; display:flex; flex-wrap:wrap; gap:24px; align-items:flex-start; justify-content:center;">
            <div style="flex:1 1 240px; max-width:320px;">
                <BackgroundPanel selected={g.background} theme={g.theme} {on_select} />
            </div>
            <div style="flex:2 1 400px; display:flex; justify-content:center;">
                <GlobeView globe={g.clone()} />
            </div>
            <div style="flex:1 1 240px; max-width:320px;">
                <PalettePanel globe={g.clone()} />
            </div>
        </section>
    }
}
