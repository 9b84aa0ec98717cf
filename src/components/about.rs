use yew::prelude::*;

use crate::content::ABOUT_STATS;
use crate::counter::AnimatedCounter;
use crate::navigation::Section;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::Sobre.id()} class="about">
            <div class="container two-columns">
                <div>
                    <span class="badge">{"Sobre Nós"}</span>
                    <h2>{"Tradição e Inovação no Parapente"}</h2>
                    <p class="lead">
                        {"Desde 1979 a Sol veste aventura, ação e emoção. Fundada em 1991, há mais de 32 anos temos como propósito \
                          tornar o sonho do voo livre uma realidade para pessoas de todas as partes do mundo. Nossa missão é \
                          produzir equipamentos de alta qualidade que proporcionem liberdade e segurança aos nossos clientes, \
                          sempre movidos pela paixão de voar."}
                    </p>
                    <div class="stats-grid">
                        {
                            for ABOUT_STATS.iter().map(|stat| html! {
                                <div class="stat">
                                    <AnimatedCounter
                                        target={stat.target}
                                        duration_ms={stat.duration_ms}
                                        suffix={stat.suffix.to_string()}
                                    />
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            })
                        }
                    </div>
                    <button class="primary-button">
                        {"Saiba Mais"}
                        <span class="chevron">{"›"}</span>
                    </button>
                </div>
                <div class="about-logo">
                    <img src="/images/sol-logo-about.png" alt="SOL PARAGLIDERS - Logo Oficial" />
                </div>
            </div>
        </section>
    }
}
