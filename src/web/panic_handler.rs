use std::panic::PanicHookInfo;

use wasm_bindgen::JsValue;

enum PanicDisplayError {
    GetWindow,
    GetDocument,
    GetBody,
    CreateDialog(JsValue),
    AttachDialog(JsValue),
}

impl PanicDisplayError {
    fn message(&self) -> &'static str {
        match self {
            Self::GetWindow => "error getting window",
            Self::GetDocument => "error getting document",
            Self::GetBody => "error getting body",
            Self::CreateDialog(_) => "error creating dialog",
            Self::AttachDialog(_) => "error attaching dialog",
        }
    }

    fn into_js_value(self) -> Option<JsValue> {
        match self {
            Self::GetWindow | Self::GetDocument | Self::GetBody => None,
            Self::CreateDialog(v) | Self::AttachDialog(v) => Some(v),
        }
    }
}

pub(crate) fn init_panic_handler() {
    std::panic::set_hook(Box::new(handle_panic));
}

#[cold]
fn handle_panic(info: &PanicHookInfo<'_>) {
    let message = panic_message(info);
    web_sys::console::error_1(&JsValue::from_str(&message));

    if let Err(e) = display_panic(&message) {
        let js_message = JsValue::from_str(&format!(
            "failed to display panic info in GUI: {}",
            e.message()
        ));
        match e.into_js_value() {
            Some(val) => web_sys::console::error_2(&js_message, &val),
            None => web_sys::console::error_1(&js_message),
        }
    }
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    let location = match info.location() {
        Some(l) => format!("{}:{}:{}", l.file(), l.line(), l.column()),
        None => String::from("?"),
    };

    let payload = info.payload();
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        return format!("panicked at {location}");
    };

    format!("panicked at {location}:\n{detail}")
}

fn display_panic(message: &str) -> Result<(), PanicDisplayError> {
    let window = web_sys::window().ok_or(PanicDisplayError::GetWindow)?;
    let document = window.document().ok_or(PanicDisplayError::GetDocument)?;

    let dialog = document
        .create_element("dialog")
        .map_err(PanicDisplayError::CreateDialog)?;
    let _ = dialog.set_attribute("open", "true");

    let body = document.body().ok_or(PanicDisplayError::GetBody)?;
    body.append_child(&dialog)
        .map_err(PanicDisplayError::AttachDialog)?;

    if let Ok(h1) = document.create_element("h1") {
        h1.set_text_content(Some("Panic!"));
        let _ = dialog.append_child(&h1);
    }

    if let Ok(p) = document.create_element("p") {
        p.set_text_content(Some(
            "A catastrophic error occurred and the solar system cannot keep running. \
            Below are details on the error, which you can report to the developer. \
            Opening the console may reveal additional details.",
        ));
        let _ = dialog.append_child(&p);
    }

    match document.create_element("pre") {
        Ok(pre) => {
            pre.set_text_content(Some(message));
            let _ = dialog.append_child(&pre);
        }
        Err(_) => dialog.set_text_content(Some(message)),
    }

    if let Ok(button) = document.create_element("button") {
        button.set_text_content(Some("Dismiss"));
        if button
            .set_attribute("onclick", "this.parentElement.close()")
            .is_ok()
        {
            let _ = dialog.append_child(&button);
        }
    }

    Ok(())
}
