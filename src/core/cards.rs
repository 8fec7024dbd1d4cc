// Open/close state of the detail cards, independent of the DOM.
//
// The browser layer calls `open`/`close_all` from its handlers and then
// mirrors the resulting state onto classes and the body overflow style.

/// What happens to page scrolling once every card is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPolicy {
    /// Give scrolling back when the last card closes.
    #[default]
    RestoreOnClose,
    /// Keep scrolling locked after the first card opens (single-screen layouts).
    AlwaysLocked,
}

#[derive(Clone, Debug, Default)]
pub struct CardDeck {
    sections: Vec<String>,
    policy: ScrollPolicy,
    active: Option<usize>,
    scroll_locked: bool,
}

impl CardDeck {
    pub fn new<I, S>(sections: I, policy: ScrollPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            policy,
            active: None,
            scroll_locked: false,
        }
    }

    /// Show `section` and hide the rest. Unknown sections leave the deck untouched.
    pub fn open(&mut self, section: &str) -> bool {
        match self.sections.iter().position(|s| s == section) {
            Some(i) => {
                self.active = Some(i);
                self.scroll_locked = true;
                true
            }
            None => false,
        }
    }

    pub fn close_all(&mut self) {
        self.active = None;
        if self.policy == ScrollPolicy::RestoreOnClose {
            self.scroll_locked = false;
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    #[inline]
    pub fn is_active(&self, section: &str) -> bool {
        self.active() == Some(section)
    }

    /// The dimming overlay is shown exactly while a card is open.
    #[inline]
    pub fn overlay_visible(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

/// Keys that dismiss an open card.
#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
