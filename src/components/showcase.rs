//! Products, differentiators and the photo gallery: static cards only.

use yew::prelude::*;

use crate::content::{DIFFERENTIATORS, GALLERY_PLACEHOLDER, GALLERY_TILES, PRODUCTS};
use crate::navigation::Section;

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id={Section::Produtos.id()} class="products">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Nossos Produtos"}</span>
                    <h2>{"Equipamentos de Alta Performance"}</h2>
                    <p>
                        {"Descubra nossa linha completa de parapentes e equipamentos desenvolvidos com a mais alta tecnologia e \
                          padrões de segurança."}
                    </p>
                </div>
                <div class="product-grid">
                    {
                        for PRODUCTS.iter().map(|product| html! {
                            <div class="card product-card">
                                <div class="product-image">
                                    <img src={product.image} alt={product.alt} loading="lazy" />
                                    <span class="badge floating">{product.category}</span>
                                </div>
                                <div class="card-header">
                                    <h3>{product.name}</h3>
                                    <p>{product.description}</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Differentiators)]
pub fn differentiators() -> Html {
    html! {
        <section id={Section::Servicos.id()} class="differentiators">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Por que Escolher a SOL PARAGLIDERS?"}</h2>
                    <p>{"Nossos diferenciais que fazem a diferença na sua experiência de voo"}</p>
                </div>
                <div class="feature-grid">
                    {
                        for DIFFERENTIATORS.iter().map(|item| html! {
                            <div class="feature-item">
                                <div class="feature-icon">{item.icon}</div>
                                <h3>{item.title}</h3>
                                <p>{item.text}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id={Section::Galeria.id()} class="gallery">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Galeria"}</span>
                    <h2>{"Momentos Inesquecíveis"}</h2>
                    <p>{"Veja alguns dos momentos mais incríveis capturados por nossos clientes"}</p>
                </div>
                <div class="gallery-grid">
                    {
                        for (1..=GALLERY_TILES).map(|n| html! {
                            <div class="gallery-tile">
                                <img src={GALLERY_PLACEHOLDER} alt={format!("Galeria {}", n)} loading="lazy" />
                            </div>
                        })
                    }
                </div>
                <div class="centered">
                    <button class="outline-button">{"Ver Mais Fotos"}</button>
                </div>
            </div>
        </section>
    }
}
