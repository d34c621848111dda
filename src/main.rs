mod catalog;
mod components;
mod config;
mod geometry;
mod input;
mod model;
mod particles;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    console_log::init_with_level(level).ok();
    log::info!("snow globe builder starting");
    yew::Renderer::<App>::new().render();
}
