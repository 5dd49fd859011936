use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlButtonElement, HtmlCanvasElement,
    HtmlImageElement,
};

use crate::encode::png_data_url;
use crate::{Compositor, CustomizerConfig, PixelBuffer, RenderOutcome};

type Shared = Rc<RefCell<Compositor<StdRng>>>;

/// Elements the page updates after a render.
struct Page {
    preview: HtmlImageElement,
    download: HtmlButtonElement,
}

impl Page {
    fn bind(document: &Document) -> Result<Self, JsValue> {
        let preview = document
            .get_element_by_id("preview")
            .ok_or("preview image not found")?
            .dyn_into::<HtmlImageElement>()?;
        let download = document
            .get_element_by_id("download")
            .ok_or("download button not found")?
            .dyn_into::<HtmlButtonElement>()?;
        Ok(Self { preview, download })
    }

    fn publish(&self, compositor: &Compositor<StdRng>) {
        let Some(url) = compositor.preview_data_url() else {
            return;
        };
        self.preview.set_src(url);
        self.preview.set_hidden(false);
        self.download.set_disabled(false);
    }
}

/// `StdRng` seed from the browser's `Math.random`.
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Wire the buttons, ask for the white first render and start loading the logo.
pub fn start(document: &Document) -> Result<(), JsValue> {
    let config = CustomizerConfig::default();
    let asset_url = config.asset_url.clone();
    let compositor: Shared = Rc::new(RefCell::new(Compositor::new(
        config,
        StdRng::seed_from_u64(entropy_seed()),
    )));
    let page = Rc::new(Page::bind(document)?);

    // Nothing to save until the first composite exists.
    page.download.set_disabled(true);
    request(&compositor, &page, true);

    let personalize = document
        .get_element_by_id("personalize")
        .ok_or("personalize button not found")?;
    let on_personalize = {
        let compositor = compositor.clone();
        let page = page.clone();
        Closure::wrap(Box::new(move || request(&compositor, &page, false)) as Box<dyn FnMut()>)
    };
    personalize
        .add_event_listener_with_callback("click", on_personalize.as_ref().unchecked_ref())?;
    on_personalize.forget();

    let on_download = {
        let compositor = compositor.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = save(&compositor, &document) {
                log::warn!("download failed: {}", js_err(err));
            }
        }) as Box<dyn FnMut()>)
    };
    page.download
        .add_event_listener_with_callback("click", on_download.as_ref().unchecked_ref())?;
    on_download.forget();

    load_base(document, &asset_url, compositor, page)
}

fn request(compositor: &Shared, page: &Page, force_white: bool) {
    let outcome = compositor.borrow_mut().request_render(force_white);
    match outcome {
        Ok(RenderOutcome::Rendered(_)) => page.publish(&compositor.borrow()),
        Ok(RenderOutcome::Queued) => {}
        Err(err) => log::warn!("render skipped: {err}"),
    }
}

fn load_base(
    document: &Document,
    url: &str,
    compositor: Shared,
    page: Rc<Page>,
) -> Result<(), JsValue> {
    let img = HtmlImageElement::new()?;

    let onload = {
        let img = img.clone();
        let document = document.clone();
        let compositor = compositor.clone();
        Closure::wrap(Box::new(move || {
            let base = match decode_image(&document, &img) {
                Ok(base) => base,
                Err(reason) => {
                    compositor.borrow_mut().asset_failed(reason);
                    return;
                }
            };
            let loaded = compositor.borrow_mut().asset_loaded(base);
            match loaded {
                Ok(replayed) => {
                    log::debug!("replayed {replayed} queued render(s)");
                    page.publish(&compositor.borrow());
                }
                Err(err) => log::error!("base image unusable: {err}"),
            }
        }) as Box<dyn FnMut()>)
    };

    let onerror = {
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            compositor
                .borrow_mut()
                .asset_failed(format!("could not load {url}"));
        }) as Box<dyn FnMut()>)
    };

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    img.set_src(url);
    Ok(())
}

/// Rasterizes the loaded logo at its natural size through a scratch canvas.
fn decode_image(document: &Document, img: &HtmlImageElement) -> Result<PixelBuffer, String> {
    let (width, height) = (img.natural_width(), img.natural_height());
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "canvas element has the wrong type".to_string())?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| "2D context unavailable".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2D context has the wrong type".to_string())?;

    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;

    PixelBuffer::from_rgba(width, height, data.data().0).map_err(|e| e.to_string())
}

/// Saves the latest composite through a temporary `<a download>` link.
fn save(compositor: &Shared, document: &Document) -> Result<(), JsValue> {
    let download = compositor
        .borrow()
        .download()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_download(&download.file_name);
    anchor.set_href(&png_data_url(&download.bytes));
    anchor.click();
    Ok(())
}
