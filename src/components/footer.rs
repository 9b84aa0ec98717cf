use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::PRODUCT_CATEGORIES;
use crate::navigation::{section_link, Section};

pub fn copyright_line(year: i32) -> String {
    format!("© {} SOL PARAGLIDERS. Todos os direitos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <img src="/images/sol-logo.png" alt="SOL PARAGLIDERS" class="footer-logo" />
                        <p>
                            {"Fabricante de parapentes e equipamentos para voo livre desde 1991. Qualidade, segurança e inovação em \
                              cada produto."}
                        </p>
                        <div class="social-links">
                            <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                            <a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer">{"YouTube"}</a>
                        </div>
                    </div>
                    <div>
                        <h3>{"Links Rápidos"}</h3>
                        <ul>
                            {
                                for Section::FOOTER.iter().map(|section| html! {
                                    <li>
                                        <a href={section.href()} onclick={section_link(*section, None)}>
                                            {section.label()}
                                        </a>
                                    </li>
                                })
                            }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Produtos"}</h3>
                        <ul>
                            { for PRODUCT_CATEGORIES.iter().map(|category| html! { <li><a href="#">{*category}</a></li> }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Newsletter"}</h3>
                        <p>{"Receba novidades e promoções exclusivas"}</p>
                        <div class="newsletter">
                            <input placeholder="Seu e-mail" />
                            <button class="primary-button">{"Inscrever"}</button>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(
            copyright_line(2024),
            "© 2024 SOL PARAGLIDERS. Todos os direitos reservados."
        );
    }
}
