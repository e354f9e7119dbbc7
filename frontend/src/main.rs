use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod error;
mod scroll_lock;
mod components {
    pub mod modal;
    pub mod phone_mockup;
    pub mod safe_image;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use config::SiteConfig;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing site={props.site.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let site = match SiteConfig::load() {
        Ok(site) => site,
        Err(err) => {
            error!("Not rendering: {}", err);
            return;
        }
    };

    info!("Starting {} landing page", site.product_name);
    yew::Renderer::<App>::with_props(AppProps { site: Rc::new(site) }).render();
}
