#![cfg(target_arch = "wasm32")]
use crate::constants::{APP_ROOT_ID, CAROUSEL_ID, HIDDEN_CLASS, LOADER_ID, LOADER_STAGE_ID, SPOTLIGHT_GRID_ID};
use crate::core::default_cards;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod admin;
mod carousel;
mod constants;
pub mod core;
mod dom;
mod http;
mod loader;
mod spotlight;
mod storage;
mod timers;

pub use admin::AdminClient;

/// Components mounted on the page, kept alive until `teardown`.
#[derive(Default)]
struct Page {
    loader: Option<loader::LoaderHandle>,
    carousel: Option<carousel::CarouselHandle>,
    spotlight: Option<spotlight::SpotlightHandle>,
}

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Ok(stage) = dom::element_by_id(&document, LOADER_STAGE_ID) else {
        log::info!("no #{}; skipping the loader", LOADER_STAGE_ID);
        return reveal_app();
    };
    let config = loader::LoaderConfig::from_stage(&stage);
    log::info!("[loader] {} -> {:?}", config.logo_src, config.wordmark);
    let handle = loader::mount(stage, config, || {
        if let Err(e) = reveal_app() {
            log::error!("reveal error: {:?}", e);
        }
    })?;
    PAGE.with(|p| p.borrow_mut().loader = Some(handle));
    Ok(())
}

/// Swaps the loader for the site and mounts the interactive sections.
fn reveal_app() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
    if let Some(el) = document.get_element_by_id(APP_ROOT_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }

    if let Ok(root) = dom::element_by_id(&document, CAROUSEL_ID) {
        let handle = carousel::mount(&root, &default_cards())?;
        PAGE.with(|p| p.borrow_mut().carousel = Some(handle));
    }
    if let Some(grid) = document
        .get_element_by_id(SPOTLIGHT_GRID_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let handle = spotlight::mount(grid, spotlight::SpotlightConfig::default())?;
        PAGE.with(|p| p.borrow_mut().spotlight = Some(handle));
    }
    Ok(())
}

/// Cancels pending loader phases and detaches every component.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|p| std::mem::take(&mut *p.borrow_mut()));
    drop(page);
    log::info!("studio-web torn down");
}
