use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub on_close: Callback<()>,
}

/// Only mounted while open; unmounting the iframe is what stops playback.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="video-backdrop">
            <div class="video-panel">
                <button class="video-close" onclick={close}>{"✕"}</button>
                <div class="video-frame">
                    <iframe
                        width="100%"
                        height="100%"
                        src={config::video_embed_url()}
                        title={config::VIDEO_TITLE}
                        frameborder="0"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        referrerpolicy="strict-origin-when-cross-origin"
                        allowfullscreen=true
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Promise;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn player_can_go_fullscreen() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<VideoModal>::with_root_and_props(root.clone(), VideoModalProps { on_close: Callback::noop() }).render();
        // Let the scheduler flush the first render
        JsFuture::from(Promise::resolve(&JsValue::NULL)).await.unwrap();

        let iframe = root.query_selector("iframe").unwrap().unwrap();
        assert!(iframe.has_attribute("allowfullscreen"));
    }
}
