pub mod app;
pub mod lock_screen;
pub mod password_gate;
pub mod permission_panel;
pub mod readout_panel;
pub mod sensor_view;
pub mod settings_modal;
pub mod swipe_pages;
