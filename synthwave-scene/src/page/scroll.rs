use crate::engine::assets::scene_config::PageConfig;

#[cfg(target_arch = "wasm32")]
use bevy::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::engine::assets::scene_config::SceneConfig;

/// Clicking the scene scrolls down to the content; clicking anywhere else
/// scrolls back up to the scene.
pub fn scroll_target(clicked_canvas: bool, page: &PageConfig) -> &str {
    if clicked_canvas {
        &page.content_selector
    } else {
        &page.canvas_selector
    }
}

#[cfg(target_arch = "wasm32")]
pub fn install_scroll_listener(config: Res<SceneConfig>) {
    let page = config.page.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let clicked_canvas = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|element| element.tag_name().eq_ignore_ascii_case("canvas"));

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Ok(Some(element)) = document.query_selector(scroll_target(clicked_canvas, &page)) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) =
        window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        warn!("Failed to register click listener: {error:?}");
        return;
    }

    // Listener lives for the page session.
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_click_scrolls_to_content() {
        let page = PageConfig::default();

        assert_eq!(scroll_target(true, &page), ".content");
        assert_eq!(scroll_target(false, &page), "#threejs-canvas");
    }
}
