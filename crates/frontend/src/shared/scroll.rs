use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the viewport to the section with the given element id.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
