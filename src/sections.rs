//! Static content composition: each configuration array in `core::content`
//! maps 1:1 to rendered blocks, appended in array order. Reveal metadata is
//! attached per block here; the reveal module owns the runtime behavior.

use crate::core::content::*;
use crate::core::RevealPolicy;
use crate::dom::{el, icon_el, link_el, text_el};
use crate::reveal::{RevealKind, Reveals};
use web_sys as web;

pub fn build(document: &web::Document, page: &web::Element, reveals: &Reveals) -> anyhow::Result<()> {
    build_hero(document, page, reveals)?;
    build_about(document, page, reveals)?;
    build_services(document, page, reveals)?;
    build_strengths(document, page, reveals)?;
    build_contact(document, page, reveals)?;
    build_footer(document, page)?;
    Ok(())
}

fn section_title(
    document: &web::Document,
    reveals: &Reveals,
    kicker: &str,
    title: &str,
) -> anyhow::Result<web::Element> {
    let wrap = el(document, "div", "section-title")?;
    let h3 = text_el(document, "h3", "kicker", kicker)?;
    let h2 = text_el(document, "h2", "title", title)?;
    reveals.watch_once(&h3, RevealKind::SlideLeft);
    // Title trails the kicker by one stagger step
    reveals.watch(&h2, RevealKind::SlideLeft, RevealPolicy::Once, 1);
    _ = wrap.append_child(&h3);
    _ = wrap.append_child(&h2);
    Ok(wrap)
}

fn build_hero(
    document: &web::Document,
    page: &web::Element,
    reveals: &Reveals,
) -> anyhow::Result<()> {
    let section = el(document, "section", "section hero")?;
    section.set_id("hero");

    let inner = el(document, "div", "hero-inner")?;
    reveals.watch_once(&inner, RevealKind::Rise);

    let badge = text_el(document, "span", "badge", HERO_BADGE)?;
    _ = inner.append_child(&badge);

    let h1 = el(document, "h1", "hero-title")?;
    _ = h1.append_child(&text_el(document, "span", "", HERO_TITLE_TOP)?);
    _ = h1.append_child(&el(document, "br", "")?);
    _ = h1.append_child(&text_el(document, "span", "gradient-text", HERO_TITLE_ACCENT)?);
    _ = inner.append_child(&h1);

    let intro = el(document, "p", "hero-intro")?;
    _ = intro.append_child(&text_el(document, "span", "", HERO_INTRO_LEAD)?);
    _ = intro.append_child(&text_el(document, "span", "intro-name", HERO_INTRO_NAME)?);
    _ = intro.append_child(&text_el(document, "span", "", HERO_INTRO_TAIL)?);
    _ = inner.append_child(&intro);

    let actions = el(document, "div", "hero-actions")?;
    let primary = link_el(document, "#contact", "btn btn-primary", HERO_CTA_PRIMARY)?;
    _ = primary.append_child(&icon_el(document, Icon::ArrowUpRight.key())?);
    let secondary = link_el(document, "#services", "btn btn-ghost", HERO_CTA_SECONDARY)?;
    _ = actions.append_child(&primary);
    _ = actions.append_child(&secondary);
    _ = inner.append_child(&actions);
    _ = section.append_child(&inner);

    // Decorative floating code block, bobbing via CSS keyframes
    let float_code = el(document, "aside", "code-float")?;
    let pre = text_el(document, "pre", "", HERO_CODE_SNIPPET)?;
    _ = float_code.append_child(&pre);
    _ = section.append_child(&float_code);

    _ = page.append_child(&section);
    Ok(())
}

fn build_about(
    document: &web::Document,
    page: &web::Element,
    reveals: &Reveals,
) -> anyhow::Result<()> {
    let section = el(document, "section", "section")?;
    section.set_id("about");
    _ = section.append_child(&section_title(document, reveals, ABOUT_KICKER, ABOUT_TITLE)?);

    let grid = el(document, "div", "grid roles")?;
    for (idx, role) in ROLES.iter().enumerate() {
        let card = el(document, "article", "card role-card")?;
        reveals.watch(&card, RevealKind::Rise, RevealPolicy::Once, idx);

        let badge = el(document, "div", "icon-badge")?;
        _ = badge.append_child(&icon_el(document, role.icon.key())?);
        _ = card.append_child(&badge);
        _ = card.append_child(&text_el(document, "h4", "", role.title)?);
        _ = card.append_child(&text_el(document, "p", "", role.desc)?);
        _ = grid.append_child(&card);
    }
    _ = section.append_child(&grid);
    _ = page.append_child(&section);
    Ok(())
}

fn build_services(
    document: &web::Document,
    page: &web::Element,
    reveals: &Reveals,
) -> anyhow::Result<()> {
    let section = el(document, "section", "section shaded")?;
    section.set_id("services");
    _ = section.append_child(&section_title(
        document,
        reveals,
        SERVICES_KICKER,
        SERVICES_TITLE,
    )?);

    let grid = el(document, "div", "grid services")?;
    for service in SERVICES.iter() {
        let card = el(document, "article", "card service-card")?;
        reveals.watch_once(&card, RevealKind::Scale);

        let icon_col = el(document, "div", "service-icon")?;
        _ = icon_col.append_child(&icon_el(document, service.icon.key())?);
        _ = card.append_child(&icon_col);

        let body = el(document, "div", "service-body")?;
        let tags = el(document, "div", "tags")?;
        for tag in service.tags {
            _ = tags.append_child(&text_el(document, "span", "tag", tag)?);
        }
        _ = body.append_child(&tags);
        _ = body.append_child(&text_el(document, "h4", "", service.title)?);
        _ = body.append_child(&text_el(document, "p", "", service.desc)?);
        _ = card.append_child(&body);
        _ = grid.append_child(&card);
    }
    _ = section.append_child(&grid);
    _ = page.append_child(&section);
    Ok(())
}

fn build_strengths(
    document: &web::Document,
    page: &web::Element,
    reveals: &Reveals,
) -> anyhow::Result<()> {
    let section = el(document, "section", "section")?;
    section.set_id("strengths");

    let split = el(document, "div", "split")?;

    let left = el(document, "div", "")?;
    _ = left.append_child(&section_title(
        document,
        reveals,
        STRENGTHS_KICKER,
        STRENGTHS_TITLE,
    )?);
    let list = el(document, "div", "strength-list")?;
    for (idx, strength) in STRENGTHS.iter().enumerate() {
        let row = el(document, "div", "strength-row")?;
        reveals.watch(&row, RevealKind::SlideLeft, RevealPolicy::Once, idx);

        let marker = el(document, "div", "marker")?;
        _ = marker.append_child(&el(document, "div", "marker-dot")?);
        _ = row.append_child(&marker);

        let body = el(document, "div", "")?;
        _ = body.append_child(&text_el(document, "h5", "", strength.title)?);
        _ = body.append_child(&text_el(document, "p", "", strength.desc)?);
        _ = row.append_child(&body);
        _ = list.append_child(&row);
    }
    _ = left.append_child(&list);
    _ = split.append_child(&left);

    let panel = el(document, "aside", "stat-panel")?;
    reveals.watch_once(&panel, RevealKind::Tilt);
    let halo = el(document, "div", "stat-halo")?;
    _ = panel.append_child(&halo);
    let stat = el(document, "div", "stat-body")?;
    _ = stat.append_child(&text_el(
        document,
        "div",
        "stat-figure gradient-text",
        SATISFACTION_FIGURE,
    )?);
    _ = stat.append_child(&text_el(document, "div", "stat-label", SATISFACTION_LABEL)?);
    let meter = el(document, "div", "stat-meter")?;
    for _ in 0..SATISFACTION_METER_BARS {
        _ = meter.append_child(&el(document, "div", "meter-bar")?);
    }
    _ = stat.append_child(&meter);
    _ = panel.append_child(&stat);
    _ = split.append_child(&panel);

    _ = section.append_child(&split);
    _ = page.append_child(&section);
    Ok(())
}

fn build_contact(
    document: &web::Document,
    page: &web::Element,
    reveals: &Reveals,
) -> anyhow::Result<()> {
    let section = el(document, "section", "section")?;
    section.set_id("contact");

    let panel = el(document, "div", "cta-panel")?;
    reveals.watch_once(&panel, RevealKind::Scale);

    _ = panel.append_child(&el(document, "div", "cta-stripe")?);

    let h2 = el(document, "h2", "cta-title")?;
    _ = h2.append_child(&text_el(document, "span", "", CTA_TITLE_LEAD)?);
    _ = h2.append_child(&text_el(document, "span", "gradient-text", CTA_TITLE_ACCENT)?);
    _ = panel.append_child(&h2);

    let body = el(document, "p", "cta-body")?;
    _ = body.append_child(&text_el(document, "span", "", CTA_BODY_TOP)?);
    _ = body.append_child(&el(document, "br", "")?);
    _ = body.append_child(&text_el(document, "span", "", CTA_BODY_BOTTOM)?);
    _ = panel.append_child(&body);

    let links = el(document, "div", "cta-links")?;
    for (idx, contact) in CONTACT_LINKS.iter().enumerate() {
        if idx > 0 {
            _ = links.append_child(&el(document, "div", "cta-divider")?);
        }
        let a = el(document, "a", "cta-link")?;
        _ = a.set_attribute("href", contact.href);
        if contact.href.starts_with("http") {
            _ = a.set_attribute("target", "_blank");
            _ = a.set_attribute("rel", "noreferrer");
        }
        _ = a.append_child(&icon_el(document, contact.icon.key())?);
        _ = a.append_child(&text_el(document, "span", "", contact.label)?);
        _ = a.append_child(&icon_el(document, Icon::ChevronRight.key())?);
        _ = links.append_child(&a);
    }
    _ = panel.append_child(&links);

    _ = section.append_child(&panel);
    _ = page.append_child(&section);
    Ok(())
}

fn build_footer(document: &web::Document, page: &web::Element) -> anyhow::Result<()> {
    let footer = el(document, "footer", "footer")?;

    let brand = el(document, "div", "brand")?;
    _ = brand.append_child(&text_el(document, "span", "brand-glyph", BRAND_GLYPH)?);
    let name = el(document, "span", "brand-name")?;
    _ = name.append_child(&text_el(document, "span", "", BRAND_NAME)?);
    _ = name.append_child(&text_el(document, "span", "accent", BRAND_ACCENT)?);
    _ = brand.append_child(&name);
    _ = footer.append_child(&brand);

    _ = footer.append_child(&text_el(document, "p", "copyright", FOOTER_COPYRIGHT)?);

    let links = el(document, "div", "footer-links")?;
    for label in FOOTER_LINKS.iter() {
        _ = links.append_child(&link_el(document, "#", "", label)?);
    }
    _ = footer.append_child(&links);

    _ = page.append_child(&footer);
    Ok(())
}
