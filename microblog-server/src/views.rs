//! HTML views rendered with askama
//!
//! Templates live in `templates/` and are HTML-escaped by default;
//! entry text is the only value rendered unescaped.

use askama::Template;

use crate::models::Entry;

/// A category in the chooser, linking to its filtered listing
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub name: String,
    /// Query-string encoded form of `name`
    pub query: String,
    pub selected: bool,
}

/// GET / page
#[derive(Template)]
#[template(path = "show_entries.html")]
pub struct ShowEntries {
    pub entries: Vec<Entry>,
    pub categories: Vec<CategoryLink>,
    pub active_category: Option<String>,
    pub flashes: Vec<String>,
}

impl ShowEntries {
    pub fn new(
        entries: Vec<Entry>,
        categories: Vec<String>,
        active_category: Option<String>,
        flashes: Vec<String>,
    ) -> Self {
        let categories = categories
            .into_iter()
            .map(|name| CategoryLink {
                query: urlencoding::encode(&name).into_owned(),
                selected: active_category.as_deref() == Some(name.as_str()),
                name,
            })
            .collect();

        Self {
            entries,
            categories,
            active_category,
            flashes,
        }
    }
}

/// Generic error page
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, title: &str, category: &str, text: &str) -> Entry {
        Entry {
            id,
            title: title.into(),
            category: category.into(),
            text: text.into(),
        }
    }

    #[test]
    fn empty_listing() {
        let html = ShowEntries::new(vec![], vec![], None, vec![]).render().unwrap();
        assert!(html.contains("No entries here so far"));
    }

    #[test]
    fn escapes_title_but_not_text() {
        let page = ShowEntries::new(
            vec![entry(1, "<Hello>", "A category", "<strong>HTML</strong> allowed here")],
            vec!["A category".into()],
            None,
            vec![],
        );
        let html = page.render().unwrap();

        assert!(html.contains("&lt;Hello&gt;"));
        assert!(!html.contains("<Hello>"));
        assert!(html.contains("<strong>HTML</strong> allowed here"));
        assert!(html.contains("A category"));
        assert!(!html.contains("No entries here so far"));
    }

    #[test]
    fn marks_active_category_and_encodes_links() {
        let page = ShowEntries::new(
            vec![],
            vec!["A category".into(), "other".into()],
            Some("A category".into()),
            vec![],
        );
        assert!(page.categories[0].selected);
        assert!(!page.categories[1].selected);
        assert_eq!(page.categories[0].query, "A%20category");

        let html = page.render().unwrap();
        assert!(html.contains("/?category=A%20category"));
    }

    #[test]
    fn shows_flashes() {
        let html = ShowEntries::new(vec![], vec![], None, vec!["Entry deleted".into()])
            .render()
            .unwrap();
        assert!(html.contains("Entry deleted"));
    }
}
