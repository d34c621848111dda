use yew::prelude::*;

use crate::catalog;
use crate::model::{GlobeAction, GlobeState, Page};
use crate::util::now_ms;

#[derive(Properties, PartialEq, Clone)]
pub struct TopBarProps {
    pub globe: UseReducerHandle<GlobeState>,
}

/// Emits `action` on click. Every top bar button is a plain dispatch.
pub fn dispatch_on_click(globe: &UseReducerHandle<GlobeState>, action: GlobeAction) -> Callback<MouseEvent> {
    let dispatcher = globe.dispatcher();
    Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
}

pub fn save_on_click(globe: &UseReducerHandle<GlobeState>) -> Callback<MouseEvent> {
    let dispatcher = globe.dispatcher();
    Callback::from(move |_: MouseEvent| dispatcher.dispatch(GlobeAction::Save { now_ms: now_ms() }))
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let g = &props.globe;
    if g.page == Page::Landing {
        return html! {
            <div style="position:absolute; top:16px; right:16px; z-index:20;">
                <ThemeToggle globe={g.clone()} />
            </div>
        };
    }
    let c = catalog::colors(g.theme);
    let button = format!(
        "padding:8px 14px; border-radius:10px; border:2px solid {}; background:{}; color:{}; font-weight:600; cursor:pointer;",
        c.border, c.accent, c.accent_text
    );
    let nav_target = if g.page == Page::Gallery { Page::Builder } else { Page::Gallery };
    let nav_label = if g.page == Page::Gallery { "Studio" } else { "Gallery" };
    let shaking = g.is_shaking();

    html! {
        <nav id="top-bar" style={format!("position:sticky; top:0; z-index:20; display:flex; align-items:center; justify-content:space-between; gap:12px; padding:12px 20px; background:{}; border-bottom:2px solid {}; backdrop-filter:blur(12px);", c.panel, c.border)}>
            <button onclick={dispatch_on_click(g, GlobeAction::Navigate(Page::Landing))}
                style={format!("background:none; border:none; color:{}; font-size:20px; font-weight:700; cursor:pointer;", c.text)}>
                { "❄ Snow Globe Builder" }
            </button>
            <div class="desktop-only" style="display:flex; gap:8px; align-items:center;">
                { if g.page == Page::Builder { html! {
                    <>
                        <button style={button.clone()} disabled={shaking} onclick={dispatch_on_click(g, GlobeAction::Shake)}>
                            { if shaking { "Shaking..." } else { "Shake" } }
                        </button>
                        <button style={button.clone()} disabled={g.objects.is_empty()} onclick={save_on_click(g)}>{ "Save" }</button>
                        <button style={button.clone()} onclick={dispatch_on_click(g, GlobeAction::Clear)}>{ "Clear" }</button>
                    </>
                } } else { html! {} } }
                <button style={button.clone()} onclick={dispatch_on_click(g, GlobeAction::Navigate(nav_target))}>{ nav_label }</button>
                <ThemeToggle globe={g.clone()} />
            </div>
            <button class="mobile-only" style={button} onclick={dispatch_on_click(g, GlobeAction::ToggleMenu)}>{ "☰" }</button>
        </nav>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub globe: UseReducerHandle<GlobeState>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let c = catalog::colors(props.globe.theme);
    let glyph = if props.globe.theme.is_dark() { "☀" } else { "🌙" };
    html! {
        <button title="Toggle theme" onclick={dispatch_on_click(&props.globe, GlobeAction::ToggleTheme)}
            style={format!("width:40px; height:40px; border-radius:50%; border:2px solid {}; background:{}; color:{}; cursor:pointer; font-size:18px;", c.border, c.panel, c.text)}>
            { glyph }
        </button>
    }
}
