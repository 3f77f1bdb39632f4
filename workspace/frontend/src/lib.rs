use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;

use components::profile_form::ProfileForm;
use components::results::ResultsPanel;
use hooks::use_recommendations;

#[function_component(App)]
pub fn app() -> Html {
    let (results, submit) = use_recommendations();

    html! {
        <main class="container mx-auto max-w-5xl p-6 space-y-6">
            <header>
                <h1 class="text-3xl font-bold">{"Scholarship Finder"}</h1>
                <p class="text-gray-500">{"Tell us about yourself and we'll match you with scholarships."}</p>
            </header>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ProfileForm on_submit={submit} />
                <ResultsPanel state={(*results).clone()} />
            </div>
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Scholarship Finder Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Recommendation endpoint: {}", settings.api_url(common::RECOMMEND_ENDPOINT));

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
