mod components;
mod content;
mod controller;
mod host;
mod listener;
mod model;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
