pub mod ambient_layer;
pub mod app;
pub mod background_panel;
pub mod builder_view;
pub mod gallery_view;
pub mod globe_view;
pub mod landing_view;
pub mod mobile_menu;
pub mod palette_panel;
pub mod save_toast;
pub mod top_bar;
pub mod touch_ghost;
