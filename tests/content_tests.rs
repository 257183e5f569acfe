// Host-side tests over the static page content.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod content {
    include!("../src/core/content.rs");
}

use content::*;
use std::collections::HashSet;

#[test]
fn record_counts_match_the_page() {
    assert_eq!(ROLES.len(), 3);
    assert_eq!(SERVICES.len(), 4);
    assert_eq!(STRENGTHS.len(), 4);
    assert_eq!(NAV_LINKS.len(), 4);
    assert_eq!(CONTACT_LINKS.len(), 2);
    assert_eq!(FOOTER_LINKS.len(), 3);
}

#[test]
fn nav_anchors_are_fragment_links_in_page_order() {
    let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.anchor).collect();
    assert_eq!(anchors, ["#about", "#services", "#strengths", "#contact"]);
    for link in NAV_LINKS.iter() {
        assert_eq!(link.anchor, format!("#{}", link.label.to_lowercase()));
    }
}

#[test]
fn every_service_carries_tags() {
    for service in SERVICES.iter() {
        assert!(!service.tags.is_empty(), "{} has no tags", service.title);
        for tag in service.tags {
            assert!(!tag.is_empty());
        }
    }
}

#[test]
fn list_icons_are_distinct_within_their_section() {
    let role_icons: HashSet<&str> = ROLES.iter().map(|r| r.icon.key()).collect();
    assert_eq!(role_icons.len(), ROLES.len());
    let service_icons: HashSet<&str> = SERVICES.iter().map(|s| s.icon.key()).collect();
    assert_eq!(service_icons.len(), SERVICES.len());
}

#[test]
fn icon_keys_are_css_safe() {
    let all = [
        Icon::Zap,
        Icon::Cpu,
        Icon::Layers,
        Icon::Users,
        Icon::ChevronRight,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ArrowUpRight,
        Icon::Monitor,
        Icon::Lightbulb,
        Icon::Layout,
        Icon::Menu,
        Icon::Close,
    ];
    let mut seen = HashSet::new();
    for icon in all {
        let key = icon.key();
        assert!(!key.is_empty());
        assert!(
            key.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "bad key {key}"
        );
        assert!(seen.insert(key), "duplicate key {key}");
    }
}

#[test]
fn contact_links_point_outward() {
    assert!(CONTACT_LINKS[0].href.starts_with("mailto:"));
    assert!(CONTACT_LINKS[1].href.starts_with("https://"));
}

#[test]
fn no_record_text_is_empty() {
    for role in ROLES.iter() {
        assert!(!role.title.is_empty() && !role.desc.is_empty());
    }
    for service in SERVICES.iter() {
        assert!(!service.title.is_empty() && !service.desc.is_empty());
    }
    for strength in STRENGTHS.iter() {
        assert!(!strength.title.is_empty() && !strength.desc.is_empty());
    }
}
