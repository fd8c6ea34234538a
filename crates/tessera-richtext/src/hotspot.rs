use std::collections::HashMap;

use crate::attr::{HotspotId, RichTextMeta};
use crate::error::RichTextError;
use crate::param::{CompileMode, TextParam};
use crate::richtext::RichText;

/// Input routed to a hotspot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotspotEvent {
    FocusIn,
    FocusOut,
    Click,
    /// A character typed while the hotspot had focus.
    Key(char),
}

/// Callback owned by the registry on behalf of a hotspot.
///
/// Returning `Some` replaces the hotspot's text in place.
pub type HotspotCallback = Box<dyn FnMut(&HotspotEvent) -> Option<TextParam>>;

/// Owns hotspot callbacks and hands out the [`HotspotId`]s that markup
/// refers to.
///
/// Compiled text only stores ids; the callback is looked up here when an
/// event arrives, so a removed hotspot simply stops responding.
pub struct HotspotRegistry {
    next_id: u64,
    callbacks: HashMap<HotspotId, HotspotCallback>,
}

impl HotspotRegistry {
    pub fn new() -> Self {
        Self { next_id: 0, callbacks: HashMap::new() }
    }

    /// Registers a callback and returns its id.
    pub fn register(
        &mut self,
        f: impl FnMut(&HotspotEvent) -> Option<TextParam> + 'static,
    ) -> HotspotId {
        let id = HotspotId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, Box::new(f));
        log::debug!("registered hotspot {:?}", id);
        id
    }

    /// Forgets a hotspot. Returns whether it was registered.
    pub fn remove(&mut self, id: HotspotId) -> bool {
        self.callbacks.remove(&id).is_some()
    }

    pub fn contains(&self, id: HotspotId) -> bool {
        self.callbacks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Delivers `event` to the hotspot `id`.
    ///
    /// If the callback returns replacement text, it is compiled in
    /// [`CompileMode::Update`] against `current` (the formatting the hotspot
    /// text is displayed with, including its link). Returns `None` when the
    /// id is unknown or the callback produced no replacement.
    pub fn dispatch(
        &mut self,
        id: HotspotId,
        event: &HotspotEvent,
        current: &RichTextMeta,
    ) -> Option<Result<RichText, RichTextError>> {
        let Some(callback) = self.callbacks.get_mut(&id) else {
            log::debug!("event {:?} for unknown hotspot {:?}", event, id);
            return None;
        };
        let replacement = callback(event)?;
        log::trace!("hotspot {:?} replaced its text on {:?}", id, event);
        Some(replacement.compile(current, CompileMode::Update))
    }
}

impl Default for HotspotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn meta(id: HotspotId) -> RichTextMeta {
        RichTextMeta::new("label", "link_fg").link(id)
    }

    #[test]
    fn ids_are_unique() {
        let mut reg = HotspotRegistry::new();
        let a = reg.register(|_| None);
        let b = reg.register(|_| None);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn focus_replaces_text() {
        let mut reg = HotspotRegistry::new();
        let id = reg.register(|ev| {
            let mut tp = TextParam::new();
            match ev {
                HotspotEvent::FocusIn => tp.text("[focused]"),
                _ => tp.text("link"),
            };
            Some(tp)
        });
        let rich = reg.dispatch(id, &HotspotEvent::FocusIn, &meta(id)).unwrap().unwrap();
        assert_eq!(rich.text(), "[focused]");
        assert_eq!(rich.hotspot_at(0), Some(id));
    }

    #[test]
    fn empty_replacement_is_space() {
        let mut reg = HotspotRegistry::new();
        let id = reg.register(|_| Some(TextParam::new()));
        let rich = reg.dispatch(id, &HotspotEvent::Click, &meta(id)).unwrap().unwrap();
        assert_eq!(rich.text(), " ");
    }

    #[test]
    fn nested_hotspot_in_replacement_fails() {
        let mut reg = HotspotRegistry::new();
        let id = reg.register(|_| {
            let mut tp = TextParam::new();
            tp.hotspot(HotspotId(99)).ok()?.text("x");
            Some(tp)
        });
        let res = reg.dispatch(id, &HotspotEvent::Click, &meta(id)).unwrap();
        assert_eq!(res.unwrap_err(), RichTextError::HotspotInReplacement);
    }

    #[test]
    fn callback_sees_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut reg = HotspotRegistry::new();
        let log = Rc::clone(&seen);
        let id = reg.register(move |ev| {
            log.borrow_mut().push(ev.clone());
            None
        });
        assert!(reg.dispatch(id, &HotspotEvent::Key('x'), &meta(id)).is_none());
        assert!(reg.dispatch(id, &HotspotEvent::FocusOut, &meta(id)).is_none());
        assert_eq!(*seen.borrow(), vec![HotspotEvent::Key('x'), HotspotEvent::FocusOut]);
    }

    #[test]
    fn removed_hotspot_is_silent() {
        let mut reg = HotspotRegistry::new();
        let id = reg.register(|_| Some(TextParam::new()));
        assert!(reg.remove(id));
        assert!(!reg.contains(id));
        assert!(reg.dispatch(id, &HotspotEvent::Click, &meta(id)).is_none());
        assert!(!reg.remove(id));
    }
}
