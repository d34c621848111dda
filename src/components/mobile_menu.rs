use yew::prelude::*;

use super::top_bar::dispatch_on_click;
use crate::catalog;
use crate::model::{GlobeAction, GlobeState, Page};
use crate::util::now_ms;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Slide-in menu for narrow screens. Every entry closes the menu after acting.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let g = &props.globe;
    if !g.menu_open {
        return html! {};
    }
    let c = catalog::colors(g.theme);
    let then_close = |action: GlobeAction| {
        let dispatcher = g.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(action.clone());
            dispatcher.dispatch(GlobeAction::CloseMenu);
        })
    };
    let save = {
        let dispatcher = g.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(GlobeAction::Save { now_ms: now_ms() });
            dispatcher.dispatch(GlobeAction::CloseMenu);
        })
    };
    let item = format!(
        "display:block; width:100%; text-align:left; padding:12px 16px; margin:4px 0; border-radius:10px; border:2px solid {}; background:{}; color:{}; font-size:16px; cursor:pointer;",
        c.border, c.accent, c.accent_text
    );
    let (nav_target, nav_label) =
        if g.page == Page::Gallery { (Page::Builder, "Studio") } else { (Page::Gallery, "Gallery") };

    html! {
        <div style="position:fixed; inset:0; z-index:60;">
            <div onclick={dispatch_on_click(g, GlobeAction::CloseMenu)}
                style="position:absolute; inset:0; background:rgba(0,0,0,0.5);"></div>
            <aside style={format!("position:absolute; top:0; right:0; bottom:0; width:min(80vw, 300px); padding:20px; background:{}; border-left:2px solid {}; display:flex; flex-direction:column; gap:4px;", c.panel, c.border)}>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:12px;">
                    <strong style="font-size:18px;">{ "Menu" }</strong>
                    <button onclick={dispatch_on_click(g, GlobeAction::CloseMenu)}
                        style={format!("background:none; border:none; color:{}; font-size:22px; cursor:pointer;", c.text)}>{ "✕" }</button>
                </div>
                <button style={item.clone()} onclick={then_close(GlobeAction::Navigate(nav_target))}>{ nav_label }</button>
                { if g.page == Page::Builder { html! {
                    <>
                        <button style={item.clone()} disabled={g.is_shaking()} onclick={then_close(GlobeAction::Shake)}>{ "Shake Globe" }</button>
                        <button style={item.clone()} disabled={g.objects.is_empty()} onclick={save}>{ "Save Globe" }</button>
                        <button style={item.clone()} onclick={then_close(GlobeAction::Clear)}>{ "Clear Globe" }</button>
                    </>
                } } else { html! {} } }
                <button style={item} onclick={then_close(GlobeAction::ToggleTheme)}>
                    { if g.theme.is_dark() { "Light Mode" } else { "Dark Mode" } }
                </button>
                <div style="margin-top:auto; font-size:12px; opacity:0.6;">{ "Snow Globe Builder v1.0" }</div>
            </aside>
        </div>
    }
}
