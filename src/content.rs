// Database-backed blocks of the main view, rendered from fallback copy when
// no source is reachable.

use crate::constants::{ABOUT_ID, EXPERIENCE_ID, PHOTOS_ID, PROJECTS_ID};
use crate::dom;
use folio_core::constants::PHOTO_ALBUM_KEY;
use folio_core::content::{
    about_sections_or_fallback, experiences_or_fallback, photos_or_fallback,
    projects_or_fallback, ContentSource,
};
use folio_core::SubscriptionSet;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    _ = parent.append_child(&el);
    Some(el)
}

fn render_about(document: &web::Document, source: &dyn ContentSource) {
    let Some(root) = document.get_element_by_id(ABOUT_ID) else {
        return;
    };
    for section in about_sections_or_fallback(source) {
        let Some(block) = child(document, &root, "article", "about-block", None) else {
            continue;
        };
        _ = block.set_attribute("data-key", &section.key);
        if let Some(title) = &section.title {
            child(document, &block, "h3", "", Some(title));
        }
        child(document, &block, "p", "", Some(&section.content));
    }
}

fn render_projects(document: &web::Document, source: &dyn ContentSource) {
    let Some(root) = document.get_element_by_id(PROJECTS_ID) else {
        return;
    };
    for (i, project) in projects_or_fallback(source).iter().enumerate() {
        let Some(card) = child(document, &root, "a", "project-card cursor-target", None) else {
            continue;
        };
        _ = card.set_attribute("href", project.href());
        if project.link.is_some() {
            _ = card.set_attribute("target", "_blank");
            _ = card.set_attribute("rel", "noopener noreferrer");
        }
        child(
            document,
            &card,
            "span",
            "project-index",
            Some(&format!("PRJ-{:02}", i + 1)),
        );
        if let Some(img) = child(document, &card, "img", "project-image", None) {
            _ = img.set_attribute("src", &project.image);
            _ = img.set_attribute("alt", project.alt_text());
        }
        child(document, &card, "h3", "", Some(&project.title));
        child(document, &card, "p", "", Some(&project.summary));
        if let Some(tags) = child(document, &card, "div", "project-tags", None) {
            for tag in &project.tags {
                child(document, &tags, "span", "tag", Some(tag));
            }
        }
    }
}

fn render_experience(document: &web::Document, source: &dyn ContentSource) {
    let Some(root) = document.get_element_by_id(EXPERIENCE_ID) else {
        return;
    };
    let entries = experiences_or_fallback(source);
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let Some(card) = child(document, &root, "div", "experience-card", None) else {
            continue;
        };
        // The newest entry closes the timeline.
        _ = card.set_attribute("data-current", if i == last { "1" } else { "0" });
        child(document, &card, "span", "period", Some(&entry.period));
        child(document, &card, "h3", "", Some(&entry.role));
        if let Some(focus) = &entry.focus {
            child(document, &card, "p", "focus", Some(focus));
        }
        child(document, &card, "p", "", Some(&entry.desc));
        if let Some(skills) = child(document, &card, "div", "skills", None) {
            for skill in &entry.skills {
                child(document, &skills, "span", "tag", Some(skill));
            }
        }
    }
}

/// Photo strip; a click shows the next photo, wrapping at the end.
fn render_photos(document: &web::Document, source: &dyn ContentSource) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();
    let Some(root) = document.get_element_by_id(PHOTOS_ID) else {
        return subs;
    };
    let mut frames = Vec::new();
    for photo in photos_or_fallback(source, PHOTO_ALBUM_KEY) {
        let Some(figure) = child(document, &root, "figure", "photo", None) else {
            continue;
        };
        if let Some(img) = child(document, &figure, "img", "", None) {
            _ = img.set_attribute("src", &photo.image_url);
            _ = img.set_attribute("alt", photo.alt_text.as_deref().unwrap_or(""));
        }
        if let Some(caption) = &photo.caption {
            child(document, &figure, "figcaption", "", Some(caption));
        }
        dom::set_hidden(&figure, !frames.is_empty());
        frames.push(figure);
    }
    if frames.len() < 2 {
        return subs;
    }
    let current = Rc::new(Cell::new(0usize));
    subs.push(dom::listen(&root, "click", true, move |_: web::MouseEvent| {
        let prev = current.get();
        let next = (prev + 1) % frames.len();
        dom::set_hidden(&frames[prev], true);
        dom::set_hidden(&frames[next], false);
        current.set(next);
    }));
    subs
}

/// Fill every content block. The returned handles keep the photo strip live.
pub fn render_all(document: &web::Document, source: &dyn ContentSource) -> SubscriptionSet {
    render_about(document, source);
    render_projects(document, source);
    render_experience(document, source);
    render_photos(document, source)
}
