use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Query;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "store::models::null_as_default")]
    pub is_question: bool,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub author_id: i64,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `POST /forum/`. A post with `parent_id` is a reply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewForumPost {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_question: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub author_id: i64,
}

/// Filters for `GET /forum/`. Unset filters are left out of the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForumFilter {
    pub author_id: Option<i64>,
    pub category: Option<String>,
    pub is_question: Option<bool>,
}

impl ForumFilter {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_opt("author_id", self.author_id)
            .with_opt("category", self.category.as_deref())
            .with_opt("is_question", self.is_question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query() {
        assert!(ForumFilter::default().to_query().is_empty());

        let query = ForumFilter {
            category: Some("Diabetes".into()),
            is_question: Some(false),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("category"), Some("Diabetes"));
        assert_eq!(query.get("is_question"), Some("false"));
        assert!(query.get("author_id").is_none());
    }
}
