// Import from the library instead of declaring modules
use gridlife::{ui::GridLifeApp, SimConfig, World};

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    init_tracing();
    tracing::info!("starting gridlife");

    let world = World::new(SimConfig::default())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("GridLife - Creature Evolution"),
        ..Default::default()
    };

    eframe::run_native(
        "GridLife",
        options,
        Box::new(move |cc| Ok(Box::new(GridLifeApp::new(cc, world)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))?;

    tracing::info!("shutting down");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    // Set up panic hook for better error messages in the browser
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();
    let world = World::new(SimConfig::default()).expect("default config is valid");

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("gridlife-canvas")
            .expect("Failed to find gridlife-canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("gridlife-canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(GridLifeApp::new(cc, world)))),
            )
            .await;

        if let Err(e) = start_result {
            panic!("Failed to start eframe: {e:?}");
        }
    });
}
