use yew::prelude::*;

use crate::catalog;
use crate::model::GlobeState;

#[derive(Properties, PartialEq, Clone)]
pub struct AmbientLayerProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Page-wide falling snow, plus twinkling stars in the light theme.
#[function_component(AmbientLayer)]
pub fn ambient_layer(props: &AmbientLayerProps) -> Html {
    let g = &props.globe;
    let snow = catalog::colors(g.theme).snow;
    html! {
        <div aria-hidden="true" style="position:fixed; inset:0; overflow:hidden; pointer-events:none; z-index:0;">
            { if g.theme.is_dark() { html! {} } else { html! {
                <>
                    { for g.stars.iter().map(|s| html! {
                        <div key={format!("star-{}", s.id)} style={format!(
                            "position:absolute; left:{:.2}%; top:{:.2}%; width:{:.1}px; height:{:.1}px; border-radius:50%; background:#fde68a; opacity:{:.2};",
                            s.x, s.y, s.size, s.size, s.opacity
                        )}></div>
                    }) }
                </>
            } } }
            { for g.background_snow.iter().map(|f| html! {
                <div key={format!("flake-{}", f.id)} style={format!(
                    "position:absolute; left:{:.2}%; top:{:.2}%; width:{:.1}px; height:{:.1}px; border-radius:50%; background:{}; opacity:{:.2};",
                    f.x, f.y, f.size, f.size, snow, f.opacity
                )}></div>
            }) }
        </div>
    }
}
