//! Template library state: search and duplication.

use clementine_core::TemplateId;

use crate::models::EmailTemplate;

use super::{Notice, matches_query};

/// State engine for the email template library.
#[derive(Debug, Clone)]
pub struct TemplatesView {
    templates: Vec<EmailTemplate>,
    search: String,
}

impl TemplatesView {
    /// Create a view over an owned template collection.
    #[must_use]
    pub fn new(templates: Vec<EmailTemplate>) -> Self {
        Self {
            templates,
            search: String::new(),
        }
    }

    /// Set the search text.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Templates matching the search over name or category, in library
    /// order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&EmailTemplate> {
        let query = self.search.to_lowercase();
        self.templates
            .iter()
            .filter(|template| {
                matches_query(&template.name, &query) || matches_query(&template.category, &query)
            })
            .collect()
    }

    /// Number of templates in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Duplicate a template under a fresh ID.
    ///
    /// The copy keeps every field of the source but gets a ` (Copy)` name
    /// suffix and lands at the end of the library. Returns `None` when the
    /// ID is unknown.
    pub fn duplicate(&mut self, id: &TemplateId) -> Option<Notice> {
        let source = self.templates.iter().find(|template| template.id == *id)?;
        let copy = EmailTemplate {
            id: TemplateId::generate(),
            name: format!("{} (Copy)", source.name),
            ..source.clone()
        };
        self.templates.push(copy);
        Some(Notice::success("Template copied!"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sample;

    fn view() -> TemplatesView {
        TemplatesView::new(sample::email_templates())
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let mut view = view();
        assert_eq!(view.filtered().len(), 5);

        view.set_search("welcome");
        let names: Vec<_> = view.filtered().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Welcome Email"]);

        view.set_search("sales");
        assert_eq!(view.filtered().len(), 2);

        view.set_search("quarterly business review");
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn test_duplicate_appends_copy_with_fresh_id() {
        let mut view = view();
        let notice = view.duplicate(&TemplateId::new("ET002")).unwrap();
        assert_eq!(notice, Notice::success("Template copied!"));
        assert_eq!(view.len(), 6);

        view.set_search("follow-up after demo");
        let matches = view.filtered();
        assert_eq!(matches.len(), 2);

        let copy = matches.last().unwrap();
        assert_eq!(copy.name, "Follow-up After Demo (Copy)");
        assert_eq!(copy.subject, matches.first().unwrap().subject);
        assert_ne!(copy.id, TemplateId::new("ET002"));
    }

    #[test]
    fn test_duplicate_unknown_id_is_none() {
        let mut view = view();
        assert!(view.duplicate(&TemplateId::new("ET999")).is_none());
        assert_eq!(view.len(), 5);
    }
}
