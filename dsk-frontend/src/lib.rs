use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use dsk_boundary::Metadata;
use dsk_frontend_api::PublicApi;

mod pages;
use pages::*;

mod components;
use components::*;

const DEFAULT_API_URL: &str = "/api";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let metadata = create_rw_signal(None::<Metadata>);

    // -- init API -- //

    let public_api = PublicApi::new(DEFAULT_API_URL);

    // -- actions -- //

    let fetch_metadata = create_action(move |_: &()| async move {
        match public_api.metadata().await {
            Ok(meta) => {
                metadata.update(|m| *m = Some(meta));
            }
            Err(err) => {
                log::error!("Unable to fetch metadata: {err}");
            }
        }
    });
    fetch_metadata.dispatch(());

    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home public_api metadata /> }
            />
            <Route
              path=Page::Search.path()
              view=move || view! { <Search public_api /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

pub fn run() {
    let app_container = document()
        .get_element_by_id("app")
        .expect("app container element")
        .dyn_into()
        .expect("HtmlElement");
    mount_to(app_container, || view! { <App /> });
}
