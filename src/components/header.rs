use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::{menu_fits_width, section_link, Section};

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (window_width, _) = use_window_size();

    // Growing the window to desktop width hides the burger, so drop the menu too
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |width: &f64| {
                if !menu_fits_width(*width) && *menu_open {
                    menu_open.set(false);
                }
                || ()
            },
            window_width,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    html! {
        <div class="header-wrapper">
            <header class="glass-header">
                <div class="header-row">
                    <div class="header-logo">
                        <img src="/images/sol-logo.png" alt="SOL PARAGLIDERS" />
                        <div class="logo-shine"></div>
                    </div>
                    <nav class="header-nav">
                        {
                            for Section::ALL.iter().map(|section| html! {
                                <a href={section.href()}
                                   class="header-link"
                                   onclick={section_link(*section, Some(close_menu.clone()))}>
                                    <span>{section.label()}</span>
                                </a>
                            })
                        }
                    </nav>
                    <div class="header-actions">
                        <button class="talk-button desktop-only"
                                onclick={section_link(Section::Contato, None)}>
                            {"Fale Conosco"}
                        </button>
                        <button class="burger-menu" onclick={toggle_menu}>
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </header>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <nav>
                                {
                                    for Section::ALL.iter().map(|section| html! {
                                        <a href={section.href()}
                                           class="mobile-link"
                                           onclick={section_link(*section, Some(close_menu.clone()))}>
                                            {section.label()}
                                        </a>
                                    })
                                }
                                <button class="talk-button full-width"
                                        onclick={section_link(Section::Contato, Some(close_menu.clone()))}>
                                    {"Fale Conosco"}
                                </button>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
