use yew::prelude::*;

use super::top_bar::dispatch_on_click;
use crate::catalog;
use crate::model::{Composition, GlobeAction, GlobeState, Page};
use crate::util::{format_created_at, object_count_label};

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryViewProps {
    pub globe: UseReducerHandle<GlobeState>,
}

#[function_component(GalleryView)]
pub fn gallery_view(props: &GalleryViewProps) -> Html {
    let g = &props.globe;
    let c = catalog::colors(g.theme);

    if g.saved.is_empty() {
        return html! {
            <section style="max-width:640px; margin:0 auto; padding:80px 20px; text-align:center;">
                <div style="font-size:64px; margin-bottom:16px;">{ "❄" }</div>
                <h2 style="margin:0 0 8px;">{ "No saved globes yet" }</h2>
                <p style={format!("margin:0 0 24px; color:{};", c.muted)}>
                    { "Build a snow globe in the studio and save it to see it here." }
                </p>
                <button onclick={dispatch_on_click(g, GlobeAction::Navigate(Page::Builder))}
                    style={format!("padding:12px 28px; border-radius:12px; border:none; background:{}; color:{}; font-size:16px; font-weight:700; cursor:pointer;", c.accent, c.accent_text)}>
                    { "Create First Globe" }
                </button>
            </section>
        };
    }

    html! {
        <section style="max-width:1200px; margin:0 auto; padding:32px 20px;">
            <h2 style="margin:0 0 24px;">{ "Your Gallery" }</h2>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(220px, 1fr)); gap:20px;">
                { for g.saved.iter().map(|comp| gallery_card(g, comp)) }
            </div>
        </section>
    }
}

fn gallery_card(g: &UseReducerHandle<GlobeState>, comp: &Composition) -> Html {
    let c = catalog::colors(g.theme);
    let bg = catalog::background(comp.background).style(g.theme);
    html! {
        <div key={comp.id.0.to_string()} onclick={dispatch_on_click(g, GlobeAction::Load(comp.id))}
            style={format!("padding:16px; border-radius:16px; background:{}; border:3px solid {}; cursor:pointer; display:flex; flex-direction:column; align-items:center; gap:8px;", c.panel, c.border)}>
            <div style={format!("position:relative; width:128px; height:128px; border-radius:50%; overflow:hidden; border:4px solid {}; {}", c.border, bg)}>
                { for comp.objects.iter().map(|o| html! {
                    <span key={o.id.0.to_string()} style={format!(
                        "position:absolute; left:{:.2}%; top:{:.2}%; transform:translate(-50%, -50%) scale({:.2}); font-size:18px; pointer-events:none;",
                        o.x, o.y, o.scale
                    )}>{ catalog::decoration(o.kind).glyph }</span>
                }) }
            </div>
            <strong>{ comp.name.clone() }</strong>
            <span style={format!("font-size:12px; color:{};", c.muted)}>
                { format!("{} • {}", object_count_label(comp.objects.len()), format_created_at(comp.created_at_ms)) }
            </span>
        </div>
    }
}
