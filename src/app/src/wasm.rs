//! Browser bindings for the widget core
//!
//! The page shell serializes events with bincode, executes the returned
//! HTTP, storage (`localStorage`) and timer effects and feeds each output
//! back through `resolve`. Bridge failures surface as JavaScript exceptions.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::{wasm_bindgen, JsError};

use crux_core::{
    bridge::{Bridge, EffectId},
    Core,
};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger already initialized");
    }
}

/// Change the console log level (`error`, `warn`, `info`, `debug`, `trace`)
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let level = level
        .parse::<log::LevelFilter>()
        .map_err(|e| JsError::new(&format!("invalid log level {level:?}: {e}")))?;
    log::set_max_level(level);
    Ok(())
}

/// Dispatch a bincode-serialized `Event`, returns the serialized effects
#[wasm_bindgen]
pub fn dispatch(event: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.update(event, &mut effects)
        .map_err(|e| JsError::new(&format!("failed to process event: {e:?}")))?;
    Ok(effects)
}

/// Resolve effect `id` with a bincode-serialized output
#[wasm_bindgen]
pub fn resolve(id: u32, output: &[u8]) -> Result<Vec<u8>, JsError> {
    let mut effects = Vec::new();
    CORE.resolve(EffectId(id), output, &mut effects)
        .map_err(|e| JsError::new(&format!("failed to resolve effect {id}: {e:?}")))?;
    Ok(effects)
}

#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsError> {
    let mut view = Vec::new();
    CORE.view(&mut view)
        .map_err(|e| JsError::new(&format!("failed to serialize view model: {e:?}")))?;
    Ok(view)
}
