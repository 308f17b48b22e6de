use serde::{Deserialize, Serialize};

/// A post as stored by the remote API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Form payload sent on create and update
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        PostDraft {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Prefill the form from an existing post
    pub fn from_post(post: &Post) -> Self {
        PostDraft {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }

    /// Both fields are required
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.body.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ignores_unknown_fields() {
        let json = r#"{"userId": 1, "id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "hello");
        assert_eq!(post.body, "world");
    }

    #[test]
    fn test_draft_serializes_title_and_body_only() {
        let draft = PostDraft::new("t", "b");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({"title": "t", "body": "b"}));
    }

    #[test]
    fn test_draft_completeness() {
        assert!(PostDraft::new("a", "b").is_complete());
        assert!(!PostDraft::new("a", "   ").is_complete());
        assert!(!PostDraft::new("", "b").is_complete());
        assert!(!PostDraft::default().is_complete());
    }
}
