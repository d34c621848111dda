use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    ambient_layer::AmbientLayer, builder_view::BuilderView, gallery_view::GalleryView,
    landing_view::LandingView, mobile_menu::MobileMenu, save_toast::SaveToast, top_bar::TopBar,
    touch_ghost::TouchGhost,
};
use crate::catalog;
use crate::config::load_tuning;
use crate::model::{GlobeAction, GlobeState, Page};
use crate::state::TickClock;
use crate::util::now_ms;

#[function_component(App)]
pub fn app() -> Html {
    let globe = use_reducer(|| GlobeState::new(load_tuning()));

    // Single animation clock: shake phases, click guard, toast and particles.
    {
        let dispatcher = globe.dispatcher();
        let tick_ms = globe.tuning.tick_ms;
        use_effect_with(tick_ms, move |_| {
            let window = web_sys::window();
            let mut clock = TickClock::starting_at(now_ms());
            let tick = Closure::wrap(Box::new(move || {
                let now = now_ms();
                dispatcher.dispatch(GlobeAction::Tick { dt_ms: clock.elapsed(now), now_ms: now });
            }) as Box<dyn FnMut()>);
            let id = window.as_ref().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    tick_ms.round() as i32,
                )
                .map_err(|e| log::warn!("could not start animation tick: {:?}", e))
                .ok()
            });
            move || {
                if let (Some(w), Some(id)) = (window, id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    // Log collection changes
    {
        use_effect_with((globe.objects.len(), globe.saved.len()), move |deps| {
            let (objects, saved) = *deps;
            log::debug!("objects: {}, saved globes: {}", objects, saved);
            || ()
        });
    }

    let colors = catalog::colors(globe.theme);
    let content = match globe.page {
        Page::Landing => html! { <LandingView globe={globe.clone()} /> },
        Page::Builder => html! { <BuilderView globe={globe.clone()} /> },
        Page::Gallery => html! { <GalleryView globe={globe.clone()} /> },
    };

    html! {
        <div id="root" style={format!("position:relative; min-height:100vh; background:{}; color:{}; transition:background 0.5s;", colors.page, colors.text)}>
            <AmbientLayer globe={globe.clone()} />
            <TouchGhost globe={globe.clone()} />
            <TopBar globe={globe.clone()} />
            <MobileMenu globe={globe.clone()} />
            <SaveToast visible={globe.save_notice_ms.is_some()} theme={globe.theme} />
            <main style="position:relative; z-index:1;">{ content }</main>
        </div>
    }
}
