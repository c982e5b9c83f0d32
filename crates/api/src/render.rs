//! HTML pages for the gallery, rendered with maud.
//!
//! All dynamic content is HTML-escaped by maud.

use gallery_core::image::Image;
use maud::{html, Markup, DOCTYPE};

use crate::paths::admin_path;

/// Everything shown on a single-image page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    pub caption: String,
    pub date: String,
    pub location: String,
    pub image_url: String,
    /// Link to another image; absent on admin pages.
    pub next_image_path: Option<String>,
}

impl ImagePage {
    pub fn new(image: &Image, image_base_url: &str, next_image_path: Option<String>) -> Self {
        Self {
            caption: image.caption_text().to_string(),
            date: image.display_date(),
            location: image.location_text().to_string(),
            image_url: format!("{image_base_url}{}", image.id),
            next_image_path,
        }
    }
}

/// An image page plus chronological navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPage {
    pub image: ImagePage,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

impl AdminPage {
    pub fn new(
        image: &Image,
        image_base_url: &str,
        previous: Option<&Image>,
        next: Option<&Image>,
    ) -> Self {
        Self {
            image: ImagePage::new(image, image_base_url, None),
            previous_url: previous.map(|p| admin_path(&p.id)),
            next_url: next.map(|n| admin_path(&n.id)),
        }
    }
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}

fn figure(page: &ImagePage) -> Markup {
    html! {
        figure {
            img src=(page.image_url) alt=(page.caption);
            figcaption {
                @if !page.caption.is_empty() {
                    p.caption { (page.caption) }
                }
                @if !page.date.is_empty() {
                    p.date { (page.date) }
                }
                @if !page.location.is_empty() {
                    p.location { (page.location) }
                }
            }
        }
    }
}

pub fn image_page(page: &ImagePage) -> Markup {
    layout(
        "Gallery",
        html! {
            (figure(page))
            @if let Some(next) = &page.next_image_path {
                nav {
                    a.next href=(next) { "next" }
                }
            }
        },
    )
}

pub fn admin_page(page: &AdminPage) -> Markup {
    layout(
        "Gallery admin",
        html! {
            (figure(&page.image))
            nav {
                @if let Some(previous) = &page.previous_url {
                    a.previous href=(previous) { "previous" }
                }
                @if let Some(next) = &page.next_url {
                    a.next href=(next) { "next" }
                }
            }
        },
    )
}
