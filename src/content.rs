//! Copy and image paths shown on the landing page.

use crate::config;

pub struct Slide {
    pub image: &'static str,
    pub alt: &'static str,
}

pub const HERO_SLIDES: [Slide; 5] = [
    Slide { image: "/images/cyclus-2.jpg", alt: "Cyclus 2 - Parapente SOL" },
    Slide { image: "/images/prymus-6.jpg", alt: "Prymus 6 - Parapente SOL" },
    Slide { image: "/images/atmus-3.jpg", alt: "Atmus 3 - Parapente SOL" },
    Slide { image: "/images/fun-2.jpg", alt: "Fun 2 - Ground Handling" },
    Slide { image: "/images/calliplox-reverse-2.png", alt: "Calliplox Reverse 2 - Equipamento" },
];

/// CSS `animation-delay` for the slide (and indicator) at `index`.
pub fn slide_delay(index: usize) -> String {
    format!("animation-delay: {}s", index as u32 * config::CAROUSEL_SLIDE_SECONDS)
}

pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub duration_ms: i64,
    pub label: &'static str,
}

pub const ABOUT_STATS: [Stat; 2] = [
    Stat { target: 32, suffix: "+", duration_ms: 2000, label: "Anos de Experiência" },
    Stat { target: 10, suffix: "K+", duration_ms: 1800, label: "Clientes Satisfeitos" },
];

pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        name: "Calliplox Reverse 2",
        category: "Leisure",
        image: "/images/calliplox-reverse-2-product.png",
        alt: "Calliplox Reverse 2 - Selim SOL",
        description: "Selim de alta qualidade para voo de lazer e conforto. Design ergonômico com excelente proteção e facilidade de uso.",
    },
    Product {
        name: "Cx Max",
        category: "Competition",
        image: "/images/cx-max-product.jpg",
        alt: "Cx Max - Parapente SOL",
        description: "Parapente de alta performance para competição e cross country. Tecnologia avançada para máximo desempenho.",
    },
    Product {
        name: "S3",
        category: "Training",
        image: "/images/s3-product.jpg",
        alt: "S3 - Selim SOL",
        description: "Selim ideal para treinamento, escola e voo duplo. Segurança e conforto para iniciantes e instrutores.",
    },
    Product {
        name: "Alpamayo",
        category: "Hike & Fly",
        image: "/images/alpamayo-product.jpg",
        alt: "Alpamayo - Selim SOL",
        description: "Selim ultralight para hike and fly. Perfeito para aventuras que combinam caminhada e voo livre.",
    },
];

pub struct Differentiator {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const DIFFERENTIATORS: [Differentiator; 4] = [
    Differentiator {
        icon: "🛡️",
        title: "Segurança",
        text: "Todos os produtos seguem rigorosos padrões internacionais de segurança",
    },
    Differentiator {
        icon: "🏅",
        title: "Qualidade",
        text: "Materiais premium e tecnologia de ponta em cada equipamento",
    },
    Differentiator {
        icon: "👥",
        title: "Suporte",
        text: "Equipe especializada para orientação e suporte técnico",
    },
    Differentiator {
        icon: "🌬️",
        title: "Performance",
        text: "Equipamentos desenvolvidos para máxima performance de voo",
    },
];

pub const GALLERY_TILES: usize = 8;
pub const GALLERY_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=300";

pub struct InstagramPost {
    pub image: &'static str,
    pub alt: &'static str,
}

pub const INSTAGRAM_POSTS: [InstagramPost; 6] = [
    InstagramPost { image: "/images/instagram-1.png", alt: "Parapente vermelho sobrevoando montanhas" },
    InstagramPost { image: "/images/instagram-2.png", alt: "Parapente amarelo e azul sobre o mar" },
    InstagramPost { image: "/images/instagram-3.png", alt: "Dois parapentes voando sobre montanhas" },
    InstagramPost { image: "/images/instagram-4.png", alt: "Feliz Dia das Mães - Mulher praticando parapente" },
    InstagramPost { image: "/images/instagram-5.png", alt: "Parapentes coloridos sendo preparados para voo" },
    InstagramPost { image: "/images/instagram-6.png", alt: "Parapente azul sobrevoando montanhas com névoa" },
];

pub struct Testimonial {
    pub author: &'static str,
    pub avatar: &'static str,
    pub city: &'static str,
    pub age: &'static str,
    pub quote: &'static str,
    pub stars: usize,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Leandro Chaicoski",
        avatar: "/images/star1.png",
        city: "Jaraguá do Sul - SC",
        age: "Avaliação feita há 2 meses",
        quote: "Loja com excelente variedade de roupas esportivas, comprei calças com tecido leve e com boa elasticidade, algumas blusas segunda pele térmicas e outras com tecido corta vento, muito leves e perfeitas para caminhadas e esportes outdoor.",
        stars: 5,
    },
    Testimonial {
        author: "Simone Guedes",
        avatar: "/images/star2.png",
        city: "Jaraguá do Sul - SC",
        age: "Avaliação feita há 3 meses",
        quote: "Ótimo atendimento, roupas lindas de excelente qualidade em oferta.",
        stars: 5,
    },
    Testimonial {
        author: "Olmiro Amrain",
        avatar: "/images/star3.png",
        city: "Jaraguá do Sul - SC",
        age: "Avaliação feita há 1 mês",
        quote: "Ótimo atendimento! Sem falar na qualidade dos equipamentos! Parabéns! Recomendo!",
        stars: 5,
    },
];

pub const ADDRESS_LINES: [&str; 2] = [
    "Rua Walter Marquardt, 1180 - Vila Nova",
    "Jaraguá do Sul - SC - 89259-565",
];
pub const PHONE: &str = "(47) 3275-7753";
pub const EMAILS: [&str; 2] = ["contato@solparagliders.com.br", "vendas@solparagliders.com.br"];

pub const OPENING_HOURS: [&str; 3] = [
    "Segunda a Sexta: 08:30 às 18:00",
    "Sábado: 08:30 às 12:00",
    "Domingo: Fechado",
];

pub const PRODUCT_CATEGORIES: [&str; 4] = ["[Categoria 1]", "[Categoria 2]", "[Categoria 3]", "[Categoria 4]"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_are_five_seconds_apart() {
        assert_eq!(slide_delay(0), "animation-delay: 0s");
        assert_eq!(slide_delay(4), "animation-delay: 20s");
    }

    #[test]
    fn about_stats_match_the_company_numbers() {
        let rendered: Vec<String> = ABOUT_STATS
            .iter()
            .map(|stat| format!("{}{}", stat.target, stat.suffix))
            .collect();
        assert_eq!(rendered, vec!["32+", "10K+"]);
    }

    #[test]
    fn testimonials_are_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| t.stars == 5));
    }

    #[test]
    fn images_are_served_from_root() {
        let paths = HERO_SLIDES
            .iter()
            .map(|s| s.image)
            .chain(PRODUCTS.iter().map(|p| p.image))
            .chain(INSTAGRAM_POSTS.iter().map(|p| p.image));
        for path in paths {
            assert!(path.starts_with("/images/"), "{}", path);
        }
    }
}
