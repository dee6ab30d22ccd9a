//! Browser entry point

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wiki_web::assets::{APP_ROOT_ID, WIKI_DATA_ID};
use wiki_web::{content, Wiki};

use crate::clipboard::BrowserClipboard;
use crate::components::WikiApp;
use crate::router::BrowserLocation;

/// Mount the wiki into `#app`, replacing the loading notice.
#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();

    let wiki = embedded_wiki().unwrap_or_else(|| content::builtin().clone());

    let Some(root) = document()
        .get_element_by_id(APP_ROOT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        leptos::logging::error!("mount point #{APP_ROOT_ID} not found");
        return;
    };
    root.set_inner_html("");

    leptos::mount::mount_to(root, move || {
        view! {
            <WikiApp
                wiki=wiki
                location=Arc::new(BrowserLocation)
                clipboard=Arc::new(BrowserClipboard)
            />
        }
    })
    .forget();
}

/// Content embedded by the exported page, if present and valid.
fn embedded_wiki() -> Option<Wiki> {
    let json = document().get_element_by_id(WIKI_DATA_ID)?.text_content()?;
    match Wiki::from_json(&json) {
        Ok(wiki) => Some(wiki),
        Err(err) => {
            leptos::logging::warn!("embedded wiki data is invalid, using bundled content: {err}");
            None
        }
    }
}
