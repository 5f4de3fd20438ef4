//! Browser bootstrap: canvas sizing, keyboard listener and the tick interval

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

use crate::error::HostError;
use crate::scheduler::{IntervalScheduler, Scheduler};
use crate::simulation::LocalGame;
use crate::surface::DrawClamped;

/// Attach the game to the canvas with id `canvas_id` and start ticking.
///
/// The playfield takes the size of the page body. Frames are passed to the
/// page's global `DrawClamped(width, height, pixels)` function.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::logger::init(LevelFilter::Info);

    run(canvas_id).map_err(|err| {
        log::error!("Failed to start: {}", err);
        JsValue::from(err)
    })
}

fn run(canvas_id: &str) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::MissingWindow)?;
    let document = window.document().ok_or(HostError::MissingDocument)?;
    let body = document.body().ok_or(HostError::MissingBody)?;
    let (width, height) = (body.client_width(), body.client_height());

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| HostError::MissingElement(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| HostError::NotACanvas(canvas_id.to_string()))?;
    canvas.set_width(width.max(0) as u32);
    canvas.set_height(height.max(0) as u32);

    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(LocalGame::new(width, height, seed)));
    log::info!("Starting {}x{} session (seed {})", width, height, seed);

    listen_for_keys(&document, Rc::clone(&game))?;

    let period = game.borrow().tick_period();
    let mut surface = DrawClamped;
    let mut scheduler = IntervalScheduler::new(window);
    scheduler.every(
        period,
        Box::new(move || game.borrow_mut().tick(&mut surface)),
    )
}

/// One document-level keydown listener, applied immediately
fn listen_for_keys(document: &Document, game: Rc<RefCell<LocalGame>>) -> Result<(), HostError> {
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        game.borrow_mut().handle_key(event.key_code());
    });
    document
        .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    // Listener stays registered for the page lifetime
    on_key_down.forget();
    Ok(())
}
