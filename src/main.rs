use zedx_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("zedx-landing {}", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
