use log::info;
use yew::prelude::*;

use crate::config;
use crate::content::{ADDRESS_LINES, EMAILS, OPENING_HOURS, PHONE};
use crate::navigation::Section;

#[function_component(Contact)]
pub fn contact() -> Html {
    // No backend behind the form yet; keep the page from reloading
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, nothing to send it to");
    });

    html! {
        <section id={Section::Contato.id()} class="contact">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Contato"}</span>
                    <h2>{"Entre em Contato Conosco"}</h2>
                    <p>{"Estamos prontos para atendê-lo. Entre em contato e tire suas dúvidas"}</p>
                </div>
                <div class="two-columns">
                    <div>
                        <h3>{"Informações de Contato"}</h3>
                        <div class="contact-item">
                            <div class="contact-icon">{"📍"}</div>
                            <div>
                                <h4>{"Endereço"}</h4>
                                <p>{ADDRESS_LINES[0]}<br/>{ADDRESS_LINES[1]}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon">{"📞"}</div>
                            <div>
                                <h4>{"Telefone"}</h4>
                                <p>
                                    {PHONE}
                                    <br/>
                                    <a href={config::WHATSAPP_URL}>{"WhatsApp: Envie uma mensagem"}</a>
                                </p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-icon">{"✉️"}</div>
                            <div>
                                <h4>{"E-mail"}</h4>
                                <p>
                                    <a href={format!("mailto:{}", EMAILS[0])}>{EMAILS[0]}</a>
                                    <br/>
                                    <a href={format!("mailto:{}", EMAILS[1])}>{EMAILS[1]}</a>
                                </p>
                            </div>
                        </div>
                        <div class="opening-hours">
                            <h4>{"Horário de Funcionamento"}</h4>
                            { for OPENING_HOURS.iter().map(|line| html! { <p>{*line}</p> }) }
                        </div>
                        <div class="map">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                width="100%"
                                height="300"
                                style="border: 0"
                                allowfullscreen=true
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Localização da SOL PARAGLIDERS"
                            ></iframe>
                        </div>
                    </div>

                    <div class="card contact-form">
                        <div class="card-header">
                            <h3>{"Envie sua Mensagem"}</h3>
                            <p>{"Preencha o formulário abaixo e entraremos em contato em breve"}</p>
                        </div>
                        <form onsubmit={on_submit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="nome">{"Nome"}</label>
                                    <input id="nome" placeholder="Seu nome" />
                                </div>
                                <div class="form-field">
                                    <label for="telefone">{"Telefone"}</label>
                                    <input id="telefone" placeholder="Seu telefone" />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="email">{"E-mail"}</label>
                                <input id="email" type="email" placeholder="seu@email.com" />
                            </div>
                            <div class="form-field">
                                <label for="assunto">{"Assunto"}</label>
                                <input id="assunto" placeholder="Assunto da mensagem" />
                            </div>
                            <div class="form-field">
                                <label for="mensagem">{"Mensagem"}</label>
                                <textarea id="mensagem" placeholder="Digite sua mensagem aqui..." rows="5" />
                            </div>
                            <button type="submit" class="primary-button full-width">{"Enviar Mensagem"}</button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
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
    async fn map_can_go_fullscreen() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<Contact>::with_root_and_props(root.clone(), ()).render();
        // Let the scheduler flush the first render
        JsFuture::from(Promise::resolve(&JsValue::NULL)).await.unwrap();

        let iframe = root.query_selector("iframe").unwrap().unwrap();
        assert!(iframe.has_attribute("allowfullscreen"));
    }
}
