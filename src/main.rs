#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "DL Interview Trainer",
        options,
        Box::new(|cc| Ok(Box::new(interview_trainer::TrainerApp::new(cc)))),
    )
}

// Arranque web: mismo estado persistido, pero sobre localStorage
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas = document
            .get_element_by_id("trainer_canvas")
            .expect("no element with id `trainer_canvas`")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("`trainer_canvas` is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(interview_trainer::TrainerApp::new(cc)))),
            )
            .await
            .expect("failed to start eframe");
    });
}
