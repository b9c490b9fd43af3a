//! Debug panel: a single live color input for the material color.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use super::App;
use crate::util::Color;

const PANEL_STYLE: &str =
    "position:fixed;top:12px;right:12px;z-index:10;width:48px;height:32px;";

/// Append the color input to `<body>` and wire it to the engine.
pub(super) fn mount(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()?;
    input.set_type("color");
    input.set_title("materialColor");
    input.set_value(&app.borrow().engine.options().palette.material_color.to_hex());
    input.set_attribute("style", PANEL_STYLE)?;

    let app = Rc::clone(app);
    let source = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        match Color::from_hex(&source.value()) {
            Ok(color) => app.borrow_mut().engine.set_material_color(color),
            Err(e) => log::warn!("ignoring panel color: {e}"),
        }
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    if let Some(body) = document.body() {
        let _ = body.append_child(&input)?;
    }
    log::debug!("debug panel mounted");
    Ok(())
}
