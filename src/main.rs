use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod reveal {
    pub mod component;
    pub mod controller;
    pub mod error;
    pub mod presets;
    pub mod stage;
}
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod icon;
    pub mod nav;
    pub mod section_title;
    pub mod stat;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::{footer::Footer, nav::Nav};
use pages::{landing::Landing, not_found::NotFound};
use reveal::component::RevealProvider;

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
            html! {
                <>
                    <Landing />
                    <Footer />
                </>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <RevealProvider>
                <div id={content::anchor::HOME} class="site">
                    <Nav />
                    <Switch<Route> render={switch} />
                </div>
            </RevealProvider>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: Inter, ui-sans-serif, system-ui, -apple-system, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }

                    ::selection {
                        background: rgba(217, 70, 239, 0.3);
                        color: #fff;
                    }

                    .site {
                        min-height: 100vh;
                    }

                    section[id] {
                        scroll-margin-top: 4rem;
                    }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
