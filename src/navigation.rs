use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::error::HostError;

/// Page sections reachable from the header and footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Sobre,
    Produtos,
    Servicos,
    Galeria,
    Contato,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Inicio,
        Section::Sobre,
        Section::Produtos,
        Section::Servicos,
        Section::Galeria,
        Section::Contato,
    ];

    /// Quick links in the footer.
    pub const FOOTER: [Section; 4] = [
        Section::Inicio,
        Section::Sobre,
        Section::Produtos,
        Section::Servicos,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Sobre => "sobre",
            Section::Produtos => "produtos",
            Section::Servicos => "servicos",
            Section::Galeria => "galeria",
            Section::Contato => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Inicio => "Início",
            Section::Sobre => "Sobre",
            Section::Produtos => "Produtos",
            Section::Servicos => "Serviços",
            Section::Galeria => "Galeria",
            Section::Contato => "Contato",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smooth-scrolls the section with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let section = document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Click handler for an in-page anchor: skip the browser jump, run
/// `before` (closing the menu, usually) and glide to the section.
pub fn section_link(section: Section, before: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(before) = &before {
            before.emit(());
        }
        if let Err(err) = scroll_to_section(section.id()) {
            warn!("could not scroll to {}: {}", section.id(), err);
        }
    })
}

/// The mobile menu has no place once the window is desktop-wide.
pub fn menu_fits_width(window_width: f64) -> bool {
    window_width < config::DESKTOP_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn hrefs_point_at_ids() {
        assert_eq!(Section::Servicos.href(), "#servicos");
        assert_eq!(Section::Servicos.label(), "Serviços");
    }

    #[test]
    fn footer_links_are_a_subset() {
        assert!(Section::FOOTER.iter().all(|s| Section::ALL.contains(s)));
    }

    #[test]
    fn menu_closes_at_desktop_width() {
        assert!(menu_fits_width(767.0));
        assert!(!menu_fits_width(768.0));
        assert!(!menu_fits_width(1440.0));
    }
}
