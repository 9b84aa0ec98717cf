use yew::prelude::*;

use crate::components::header::Header;
use crate::content::{slide_delay, HERO_SLIDES};
use crate::navigation::{section_link, Section};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_play_video: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let play_video = {
        let on_play_video = props.on_play_video.clone();
        Callback::from(move |_: MouseEvent| on_play_video.emit(()))
    };

    html! {
        <section id={Section::Inicio.id()} class="hero">
            // Slides cross-fade on the stylesheet's clock, staggered by their delay
            <div class="hero-carousel">
                {
                    for HERO_SLIDES.iter().enumerate().map(|(index, slide)| html! {
                        <div class={classes!("hero-slide", (index == 0).then(|| "first"))}
                             style={slide_delay(index)}>
                            <img src={slide.image} alt={slide.alt} />
                            <div class="hero-dim"></div>
                        </div>
                    })
                }
            </div>

            <Header />

            <div class="hero-content">
                <div>
                    <h1>{"SOL PARAGLIDERS"}</h1>
                    <p class="hero-subtitle">
                        {"Voando alto com segurança e qualidade há mais de 25 anos"}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={section_link(Section::Produtos, None)}>
                            {"Conheça Nossos Produtos"}
                            <span class="chevron">{"›"}</span>
                        </button>
                        <button class="hero-cta outline" onclick={play_video}>
                            <span class="play">{"▶"}</span>
                            {"Assista ao Vídeo"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="carousel-indicators">
                {
                    for (0..HERO_SLIDES.len()).map(|index| html! {
                        <div class={classes!("indicator", (index == 0).then(|| "first"))}
                             style={slide_delay(index)}></div>
                    })
                }
            </div>
        </section>
    }
}
