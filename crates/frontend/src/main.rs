use cachorro_frontend::App;
use cachorro_frontend::logging::init_logging;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    yew::Renderer::<App>::new().render();
}
