mod components;
mod model;
mod services;
mod state;
mod util;

fn main() {
    util::init_logging();
    yew::Renderer::<components::App>::new().render();
}
