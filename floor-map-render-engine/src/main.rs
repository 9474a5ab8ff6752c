mod engine;
mod interface;

use engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
