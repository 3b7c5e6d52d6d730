use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::discoverable::Discoverable;
use crate::types::identifiers::ItemId;

/// One discoverable unit: a blog post or a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub summary: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Display text such as "8 min read".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        summary: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            category: category.into(),
            tags: Vec::new(),
            featured: false,
            published_at: None,
            author: None,
            read_time: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_published_at(mut self, date: Option<NaiveDate>) -> Self {
        self.published_at = date;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }
}

impl Discoverable for ContentItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn facet(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn published_at(&self) -> Option<NaiveDate> {
        self.published_at
    }
}
