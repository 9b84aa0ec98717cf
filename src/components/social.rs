use yew::prelude::*;

use crate::config;
use crate::content::{INSTAGRAM_POSTS, TESTIMONIALS};

#[function_component(InstagramFeed)]
pub fn instagram_feed() -> Html {
    html! {
        <section class="instagram">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Instagram"}</span>
                    <h2>{"Siga-nos no Instagram"}</h2>
                    <p>
                        {"Acompanhe nossos últimos posts e veja mais conteúdo exclusivo sobre parapentes e voo livre"}
                    </p>
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-handle">
                        {config::INSTAGRAM_HANDLE}
                    </a>
                </div>
                <div class="instagram-grid">
                    {
                        for INSTAGRAM_POSTS.iter().map(|post| html! {
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-post">
                                <img src={post.image} alt={post.alt} loading="lazy" />
                                <div class="instagram-overlay">{"📷"}</div>
                            </a>
                        })
                    }
                </div>
                <div class="centered">
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="instagram-follow">
                        {"Seguir no Instagram"}
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Filled stars for a review score.
pub fn star_rating(stars: usize) -> String {
    String::from("★").repeat(stars)
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <div class="section-heading">
                    <span class="badge">{"Depoimentos"}</span>
                    <h2>{"O que Nossos Clientes Dizem"}</h2>
                </div>
                <div class="testimonial-grid">
                    {
                        for TESTIMONIALS.iter().map(|testimonial| html! {
                            <div class="card testimonial">
                                <div class="stars">{star_rating(testimonial.stars)}</div>
                                <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
                                <div class="author">
                                    <img src={testimonial.avatar} alt={testimonial.author} />
                                    <div>
                                        <div class="author-name">{testimonial.author}</div>
                                        <div class="author-city">{"📍 "}{testimonial.city}</div>
                                    </div>
                                </div>
                                <div class="review-age">{"🕒 "}{testimonial.age}</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
