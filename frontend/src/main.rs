use betterchat_web::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("betterchat-web starting");
    yew::Renderer::<App>::new().render();
}
