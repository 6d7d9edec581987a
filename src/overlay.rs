use web_sys as web;

// Show/hide for the retry "transmission" overlay and the easter-egg modal.
// Both are looked up by id at call time so late timers tolerate a page that
// has since dropped them; visibility goes through inline display so the
// stylesheet keeps control of the layout when visible.

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("style", "display:flex");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("style", "display:none");
        _ = el.set_attribute("aria-hidden", "true");
    }
}
