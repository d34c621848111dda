use yew::prelude::*;

use crate::catalog::{self, Theme};

#[derive(Properties, PartialEq, Clone)]
pub struct SaveToastProps {
    pub visible: bool,
    pub theme: Theme,
}

#[function_component(SaveToast)]
pub fn save_toast(props: &SaveToastProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let c = catalog::colors(props.theme);
    html! {
        <div role="status" style={format!("position:fixed; top:80px; left:50%; transform:translateX(-50%); z-index:70; padding:12px 20px; border-radius:12px; background:{}; color:{}; border:2px solid {}; box-shadow:0 8px 24px rgba(0,0,0,0.2); font-weight:600;", c.accent, c.accent_text, c.border)}>
            { "✓ Globe saved successfully!" }
        </div>
    }
}
