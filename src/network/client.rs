//! HTTP client wrapper - the four posts endpoints

use std::time::Duration;

use crate::error::Result;
use crate::models::{Post, PostDraft};

/// Thin wrapper over `reqwest::Client` bound to an API base URL
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        PostsClient {
            client: create_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: u64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// GET /posts?_limit={limit}
    pub async fn list_posts(&self, limit: u32) -> Result<Vec<Post>> {
        let posts = self
            .client
            .get(self.posts_url())
            .query(&[("_limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Post>>()
            .await?;
        Ok(posts)
    }

    /// POST /posts
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        let post = self
            .client
            .post(self.posts_url())
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;
        Ok(post)
    }

    /// PUT /posts/{id}
    pub async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post> {
        let post = self
            .client
            .put(self.post_url(id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;
        Ok(post)
    }

    /// DELETE /posts/{id}
    pub async fn delete_post(&self, id: u64) -> Result<()> {
        self.client
            .delete(self.post_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Create an HTTP client with default configuration
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> PostsClient {
        PostsClient::new(server.base_url(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_list_posts_uses_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/posts").query_param("_limit", "10");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!([
                        {"userId": 1, "id": 1, "title": "a", "body": "x"},
                        {"userId": 1, "id": 2, "title": "b", "body": "y"}
                    ]));
            })
            .await;

        let posts = client_for(&server).list_posts(10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "b");
    }

    #[tokio::test]
    async fn test_create_post_sends_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/posts")
                    .json_body(json!({"title": "t", "body": "b"}));
                then.status(201)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"id": 101, "title": "t", "body": "b"}));
            })
            .await;

        let post = client_for(&server)
            .create_post(&PostDraft::new("t", "b"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(post.id, 101);
    }

    #[tokio::test]
    async fn test_update_post_uses_put() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/posts/7")
                    .json_body(json!({"title": "new", "body": "text"}));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"id": 7, "title": "new", "body": "text"}));
            })
            .await;

        let post = client_for(&server)
            .update_post(7, &PostDraft::new("new", "text"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(post.title, "new");
    }

    #[tokio::test]
    async fn test_delete_post() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/posts/3");
                then.status(200).json_body(json!({}));
            })
            .await;

        client_for(&server).delete_post(3).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/posts/500");
                then.status(500);
            })
            .await;

        let err = client_for(&server)
            .update_post(500, &PostDraft::new("a", "b"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/posts");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server).list_posts(10).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = PostsClient::new("http://localhost:1/", Duration::from_secs(1));
        assert_eq!(client.post_url(4), "http://localhost:1/posts/4");
    }
}
