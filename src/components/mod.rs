pub mod action_button;
pub mod app;
pub mod data_section;
pub mod footer;
pub mod founder;
pub mod gallery;
pub mod hero;
pub mod mission;
pub mod mobile_menu;
pub mod nav_context;
pub mod navbar;
pub mod section_view;

pub use app::App;
