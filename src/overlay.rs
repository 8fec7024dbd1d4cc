use crate::constants::{ACTIVE_CLASS, OVERLAY_ID};
use crate::core::{CardDeck, ScrollPolicy};
use crate::ui;
use fnv::FnvHashMap;
use web_sys as web;

/// Detail cards, the dimming overlay and the body scroll lock.
pub struct CardOverlay {
    deck: CardDeck,
    cards: FnvHashMap<String, web::Element>,
    overlay: Option<web::Element>,
    body: Option<web::HtmlElement>,
    // Inline overflow value from before the first lock
    saved_overflow: Option<String>,
}

impl CardOverlay {
    pub fn bind(document: &web::Document, sections: &[String], policy: ScrollPolicy) -> Self {
        let mut cards = FnvHashMap::default();
        for section in sections {
            match document.get_element_by_id(&ui::card_id(section)) {
                Some(el) => {
                    cards.insert(section.clone(), el);
                }
                None => log::warn!("[cards] no #{} for section {}", ui::card_id(section), section),
            }
        }
        let known: Vec<String> = sections
            .iter()
            .filter(|s| cards.contains_key(*s))
            .cloned()
            .collect();
        Self {
            deck: CardDeck::new(known, policy),
            cards,
            overlay: document.get_element_by_id(OVERLAY_ID),
            body: document.body(),
            saved_overflow: None,
        }
    }

    pub fn open(&mut self, section: &str) {
        if self.deck.open(section) {
            self.sync();
            log::info!("[cards] opened {} card", section);
        }
    }

    pub fn close_all(&mut self) {
        self.deck.close_all();
        self.sync();
        log::info!("[cards] closed all cards");
    }

    fn sync(&mut self) {
        for (section, el) in &self.cards {
            let cl = el.class_list();
            if self.deck.is_active(section) {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
        if let Some(ov) = &self.overlay {
            let cl = ov.class_list();
            if self.deck.overlay_visible() {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
        if let Some(body) = &self.body {
            let style = body.style();
            if self.deck.scroll_locked() {
                if self.saved_overflow.is_none() {
                    self.saved_overflow = style.get_property_value("overflow").ok();
                }
                _ = style.set_property("overflow", "hidden");
            } else if let Some(prev) = self.saved_overflow.take() {
                _ = style.set_property("overflow", &prev);
            }
        }
    }
}
