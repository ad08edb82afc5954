use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::engine::assets::scene_config::PageConfig;

/// Icons available for contact links, drawn from the lucide set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactIcon {
    Linkedin,
    Mail,
    Github,
    Instagram,
    CircleX,
}

impl ContactIcon {
    pub fn name(self) -> &'static str {
        match self {
            ContactIcon::Linkedin => "linkedin",
            ContactIcon::Mail => "mail",
            ContactIcon::Github => "github",
            ContactIcon::Instagram => "instagram",
            ContactIcon::CircleX => "circle-x",
        }
    }

    fn shapes(self) -> &'static str {
        match self {
            ContactIcon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            ContactIcon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            ContactIcon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            ContactIcon::Instagram => concat!(
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
                r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
                r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            ),
            ContactIcon::CircleX => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<path d="m15 9-6 6"/>"#,
                r#"<path d="m9 9 6 6"/>"#,
            ),
        }
    }
}

/// Inline SVG for an icon, stroked in the current text colour.
pub fn icon_markup(icon: ContactIcon) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" "#,
            r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" "#,
            r#"stroke-linejoin="round" class="icon-class lucide lucide-{}">{}</svg>"#,
        ),
        icon.name(),
        icon.shapes()
    )
}

/// Replace the icon row with one link per contact and add the close icon.
#[cfg(target_arch = "wasm32")]
pub fn inject_contact_icons(page: &PageConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(close) = document.query_selector(&page.close_selector)? {
        close.insert_adjacent_html("beforeend", &icon_markup(ContactIcon::CircleX))?;
    }

    let Some(icons) = document.query_selector(&page.icons_selector)? else {
        return Ok(());
    };
    icons.set_inner_html("");

    for contact in &page.contacts {
        let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        link.set_href(&contact.href);
        link.set_target("_blank");
        link.set_inner_html(&icon_markup(contact.icon));
        icons.append_child(&link)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::scene_config::SceneConfig;

    #[test]
    fn markup_is_a_single_svg_with_named_class() {
        let markup = icon_markup(ContactIcon::Github);

        assert!(markup.starts_with("<svg"));
        assert!(markup.ends_with("</svg>"));
        assert_eq!(markup.matches("<svg").count(), 1);
        assert!(markup.contains("lucide-github"));
        assert!(markup.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn every_icon_has_distinct_shapes() {
        let icons = [
            ContactIcon::Linkedin,
            ContactIcon::Mail,
            ContactIcon::Github,
            ContactIcon::Instagram,
            ContactIcon::CircleX,
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(icon_markup(*a), icon_markup(*b));
            }
        }
    }

    #[test]
    fn icons_parse_from_snake_case_names() {
        let icon: ContactIcon = serde_json::from_str(r#""circle_x""#).unwrap();
        assert_eq!(icon, ContactIcon::CircleX);
    }

    #[test]
    fn default_contacts_link_every_profile() {
        let page = SceneConfig::portfolio().page;
        let icons: Vec<ContactIcon> = page.contacts.iter().map(|contact| contact.icon).collect();

        assert_eq!(
            icons,
            vec![
                ContactIcon::Linkedin,
                ContactIcon::Mail,
                ContactIcon::Github,
                ContactIcon::Instagram
            ]
        );
        assert!(page.contacts[1].href.starts_with("mailto:"));
    }
}
