//! Network actor - runs posts API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse, PostOp};
use crate::network::client::PostsClient;

/// Network actor that turns commands into API calls
pub struct NetworkActor {
    client: PostsClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: PostsClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => {
                            tracing::info!("Network actor shutting down");
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(cmd) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                if let Some(result) = execute(&client, cmd).await {
                                    let _ = response_tx.send(result);
                                }
                            });
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

/// Perform one API call and wrap its outcome as a response
pub async fn execute(client: &PostsClient, cmd: NetworkCommand) -> Option<NetworkResponse> {
    let op = cmd.op()?;
    tracing::info!(op = op.as_str(), base_url = client.base_url(), "Executing request");

    let (id, result) = match cmd {
        NetworkCommand::ListPosts { id, limit } => (
            id,
            client
                .list_posts(limit)
                .await
                .map(|posts| NetworkResponse::PostsLoaded { id, posts }),
        ),
        NetworkCommand::CreatePost { id, draft } => (
            id,
            client
                .create_post(&draft)
                .await
                .map(|post| NetworkResponse::PostCreated { id, post }),
        ),
        NetworkCommand::UpdatePost { id, post_id, draft } => (
            id,
            client
                .update_post(post_id, &draft)
                .await
                .map(|post| NetworkResponse::PostUpdated { id, post }),
        ),
        NetworkCommand::DeletePost { id, post_id } => (
            id,
            client
                .delete_post(post_id)
                .await
                .map(|()| NetworkResponse::PostDeleted { id, post_id }),
        ),
        NetworkCommand::Shutdown => return None,
    };

    match result {
        Ok(response) => {
            tracing::info!(id, op = op.as_str(), "Request completed");
            Some(response)
        }
        Err(e) => {
            tracing::warn!(id, op = op.as_str(), error = %e, "Request failed");
            Some(NetworkResponse::Failed {
                id,
                op,
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostDraft;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_actor_round_trip() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/posts");
                then.status(201)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"id": 101, "title": "t", "body": "b"}));
            })
            .await;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let client = PostsClient::new(server.base_url(), Duration::from_secs(5));
        let handle = tokio::spawn(NetworkActor::new(client, resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::CreatePost {
                id: 4,
                draft: PostDraft::new("t", "b"),
            })
            .unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::PostCreated { id, post }) => {
                assert_eq!(id, 4);
                assert_eq!(post.id, 101);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_carries_operation() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/posts/9");
                then.status(404);
            })
            .await;

        let client = PostsClient::new(server.base_url(), Duration::from_secs(5));
        let response = execute(&client, NetworkCommand::DeletePost { id: 2, post_id: 9 }).await;

        match response {
            Some(NetworkResponse::Failed { id, op, message }) => {
                assert_eq!(id, 2);
                assert_eq!(op, PostOp::Delete);
                assert_eq!(message, "server responded with status 404");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
