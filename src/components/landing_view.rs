use yew::prelude::*;

use super::top_bar::dispatch_on_click;
use crate::catalog::{self, FEATURE_CARDS};
use crate::model::{GlobeAction, GlobeState, Page};

#[derive(Properties, PartialEq, Clone)]
pub struct LandingViewProps {
    pub globe: UseReducerHandle<GlobeState>,
}

#[function_component(LandingView)]
pub fn landing_view(props: &LandingViewProps) -> Html {
    let c = catalog::colors(props.globe.theme);
    let card = format!(
        "flex:1 1 240px; padding:24px; border-radius:16px; background:{}; border:3px solid {}; box-shadow:0 8px 16px rgba(0,0,0,0.1);",
        c.panel, c.border
    );
    html! {
        <section style="max-width:1100px; margin:0 auto; padding:96px 20px 48px; display:flex; flex-direction:column; align-items:center; gap:40px;">
            <div style={format!("text-align:center; padding:40px 32px; border-radius:24px; background:{}; border:4px solid {}; box-shadow:0 20px 40px rgba(0,0,0,0.1);", c.panel, c.border)}>
                <h1 style="font-size:clamp(40px, 8vw, 72px); margin:0 0 16px;">{ "Create Magic" }</h1>
                <p style={format!("font-size:20px; max-width:640px; margin:0 auto 28px; color:{};", c.muted)}>
                    { "Design your own enchanting digital snow globes with stunning backgrounds, magical objects, and mesmerizing snow effects." }
                </p>
                <button onclick={dispatch_on_click(&props.globe, GlobeAction::Navigate(Page::Builder))}
                    style={format!("padding:14px 32px; border-radius:14px; border:none; background:{}; color:{}; font-size:18px; font-weight:700; cursor:pointer;", c.accent, c.accent_text)}>
                    { "Create Your Globe ✨" }
                </button>
            </div>
            <div style="display:flex; flex-wrap:wrap; gap:20px; width:100%;">
                { for FEATURE_CARDS.iter().map(|f| html! {
                    <div key={f.title} style={card.clone()}>
                        <div style="font-size:36px; margin-bottom:12px;">{ f.glyph }</div>
                        <h3 style="margin:0 0 8px; font-size:20px;">{ f.title }</h3>
                        <p style={format!("margin:0; line-height:1.5; color:{};", c.muted)}>{ f.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
