use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info, warn};

mod config;
mod diagnostics;
mod widgets;
mod components {
    pub mod notification;
    pub mod partners;
}
mod contact {
    pub mod form;
    pub mod models;
    pub mod phone;
    pub mod store;
    pub mod submit;
    pub mod validate;
}
mod visibility {
    pub mod counter;
    pub mod observer;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use components::notification::NotificationProvider;
use contact::store::{BrowserStorage, RecordStore};
use pages::home::Home;
use widgets::Widgets;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub widgets: Widgets,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Widgets> context={props.widgets.clone()}>
            <NotificationProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NotificationProvider>
        </ContextProvider<Widgets>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }
    diagnostics::install_error_logging();

    info!("Starting application");
    match RecordStore::new(BrowserStorage).load() {
        Ok(records) => debug!("{} contact submissions stored locally", records.len()),
        Err(e) => warn!("Stored contact submissions are unreadable: {}", e),
    }

    let widgets = Widgets::detect();
    widgets.init_scroll_animations();

    yew::Renderer::<App>::with_props(AppProps { widgets }).render();
}
