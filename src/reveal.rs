//! Viewport-entry trigger: one `IntersectionObserver` drives the reveal state
//! of every registered block. Blocks start hidden/offset via CSS classes and
//! get the `revealed` class when their `core::ui::Reveal` state says so;
//! `Once` blocks are unobserved after settling.

use crate::core::{stagger_delay, Reveal, RevealPolicy};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const KEY_ATTR: &str = "data-reveal";

/// Direction of a block's initial offset, mapped to a CSS class.
#[derive(Clone, Copy, Debug)]
pub enum RevealKind {
    /// Slide up from below: hero copy, role cards.
    Rise,
    /// Slide in from the left: section titles, strength rows.
    SlideLeft,
    /// Grow from slightly shrunk: service cards, CTA panel.
    Scale,
    /// Settle from a slight rotation: the satisfaction panel.
    Tilt,
}

impl RevealKind {
    fn class(self) -> &'static str {
        match self {
            RevealKind::Rise => "reveal-rise",
            RevealKind::SlideLeft => "reveal-slide",
            RevealKind::Scale => "reveal-scale",
            RevealKind::Tilt => "reveal-tilt",
        }
    }
}

pub struct Reveals {
    observer: web::IntersectionObserver,
    states: Rc<RefCell<HashMap<String, Reveal>>>,
    next_key: RefCell<u32>,
}

impl Reveals {
    pub fn new() -> anyhow::Result<Self> {
        let states: Rc<RefCell<HashMap<String, Reveal>>> = Rc::new(RefCell::new(HashMap::new()));

        let states_cb = states.clone();
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target.get_attribute(KEY_ATTR) else {
                        continue;
                    };
                    let mut states = states_cb.borrow_mut();
                    let Some(state) = states.get_mut(&key) else {
                        continue;
                    };
                    if let Some(visible) = state.on_intersection(entry.is_intersecting()) {
                        _ = target.class_list().toggle_with_force("revealed", visible);
                    }
                    if state.is_settled() {
                        observer.unobserve(&target);
                        states.remove(&key);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let observer = web::IntersectionObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {e:?}"))?;
        closure.forget();

        Ok(Self {
            observer,
            states,
            next_key: RefCell::new(0),
        })
    }

    /// Register a block: hide it with the kind's offset class, apply the
    /// per-index stagger delay, and start observing.
    pub fn watch(&self, element: &web::Element, kind: RevealKind, policy: RevealPolicy, index: usize) {
        let key = {
            let mut n = self.next_key.borrow_mut();
            *n += 1;
            format!("r{n}")
        };
        _ = element.set_attribute(KEY_ATTR, &key);
        _ = element.class_list().add_2("reveal", kind.class());
        if index > 0 {
            _ = element.set_attribute(
                "style",
                &format!("transition-delay:{:.1}s", stagger_delay(index)),
            );
        }
        self.states.borrow_mut().insert(key, Reveal::new(policy));
        self.observer.observe(element);
    }

    /// Shorthand for a one-shot block with no stagger.
    pub fn watch_once(&self, element: &web::Element, kind: RevealKind) {
        self.watch(element, kind, RevealPolicy::Once, 0);
    }
}

/// The mobile menu panel re-enters on every toggle; it is driven by the menu
/// button rather than the observer, but goes through the same `Reveal`
/// machine so the policy stays explicit.
pub struct MenuReveal {
    state: Reveal,
}

impl MenuReveal {
    pub fn new() -> Self {
        Self {
            state: Reveal::new(RevealPolicy::EveryEntry),
        }
    }

    pub fn set_open(&mut self, element: &web::Element, open: bool) {
        if let Some(visible) = self.state.on_intersection(open) {
            _ = element.class_list().toggle_with_force("revealed", visible);
            _ = element.class_list().toggle_with_force("open", visible);
        }
    }
}

