use yew::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    showcase::{Differentiators, Gallery, Products},
    social::{InstagramFeed, Testimonials},
    video_modal::VideoModal,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let video_open = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(true))
    };

    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(false))
    };

    html! {
        <div class="landing-page">
            <Hero on_play_video={open_video} />
            {
                if *video_open {
                    html! { <VideoModal on_close={close_video} /> }
                } else {
                    html! {}
                }
            }
            <About />
            <Products />
            <Differentiators />
            <Gallery />
            <InstagramFeed />
            <Testimonials />
            <Contact />
            <Footer />
        </div>
    }
}
