use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, Headers, Node, Request, RequestInit, Response, Window};

/// The browser `window`, absent outside a browser context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Scroll the page back to its top-left corner.
pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// POST a JSON body and return the response status and text.
///
/// # Errors
/// Returns an error if the request cannot be built, the fetch rejects, or the body
/// cannot be read.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let resp: Response = JsFuture::from(win.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok((resp.status(), text))
}

/// A document event subscription, removed from the document when dropped.
pub struct DocumentListener {
    document: Document,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .document
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            console_error(&format!(
                "Failed to remove {} listener: {}",
                self.event,
                js_error_message(&err)
            ));
        }
    }
}

/// Subscribe to every pointer-down on the document.
///
/// The handler receives the event target as a `Node` when it is one. Returns
/// `None` outside a browser or when the document refuses the listener.
#[must_use]
pub fn on_document_pointer_down<F>(handler: F) -> Option<DocumentListener>
where
    F: Fn(Option<&Node>) + 'static,
{
    let document = document()?;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let target = event.target();
        handler(target.as_ref().and_then(|t| t.dyn_ref::<Node>()));
    }) as Box<dyn FnMut(Event)>);
    let event = "pointerdown";
    if let Err(err) =
        document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        console_error(&format!(
            "Failed to add {event} listener: {}",
            js_error_message(&err)
        ));
        return None;
    }
    Some(DocumentListener {
        document,
        event,
        closure,
    })
}
