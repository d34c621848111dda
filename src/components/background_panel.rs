use yew::prelude::*;

use crate::catalog::{self, BackgroundId, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct BackgroundPanelProps {
    pub selected: BackgroundId,
    pub theme: Theme,
    pub on_select: Callback<BackgroundId>,
}

#[function_component(BackgroundPanel)]
pub fn background_panel(props: &BackgroundPanelProps) -> Html {
    let c = catalog::colors(props.theme);
    html! {
        <div style={format!("padding:16px; border-radius:16px; background:{}; border:3px solid {};", c.panel, c.border)}>
            <h3 style="margin:0 0 12px; font-size:17px;">{ "🎨 Backgrounds" }</h3>
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(110px, 1fr)); gap:10px;">
                { for BackgroundId::ALL.iter().map(|&id| {
                    let d = catalog::background(id);
                    let selected = id == props.selected;
                    let border = if selected { "3px solid #f59e0b" } else { "2px solid transparent" };
                    let onclick = {
                        let cb = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(id))
                    };
                    html! {
                        <button key={id.key()} {onclick}
                            style={format!("padding:6px; border-radius:12px; border:{}; background:none; color:inherit; cursor:pointer; {}", border, if selected { "transform:scale(1.05);" } else { "" })}>
                            <div style={format!("height:40px; border-radius:8px; margin-bottom:4px; {}", d.style(props.theme))}></div>
                            <span style="font-size:12px; font-weight:600;">{ d.name }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
