//! Network messages - communication between App and Network layers

use crate::models::{Post, PostDraft};

/// The four operations the posts API supports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostOp {
    List,
    Create,
    Update,
    Delete,
}

impl PostOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostOp::List => "list",
            PostOp::Create => "create",
            PostOp::Update => "update",
            PostOp::Delete => "delete",
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// GET /posts?_limit=N
    ListPosts { id: u64, limit: u32 },
    /// POST /posts
    CreatePost { id: u64, draft: PostDraft },
    /// PUT /posts/{post_id}
    UpdatePost {
        id: u64,
        post_id: u64,
        draft: PostDraft,
    },
    /// DELETE /posts/{post_id}
    DeletePost { id: u64, post_id: u64 },

    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn op(&self) -> Option<PostOp> {
        match self {
            NetworkCommand::ListPosts { .. } => Some(PostOp::List),
            NetworkCommand::CreatePost { .. } => Some(PostOp::Create),
            NetworkCommand::UpdatePost { .. } => Some(PostOp::Update),
            NetworkCommand::DeletePost { .. } => Some(PostOp::Delete),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    PostsLoaded { id: u64, posts: Vec<Post> },
    PostCreated { id: u64, post: Post },
    PostUpdated { id: u64, post: Post },
    PostDeleted { id: u64, post_id: u64 },
    /// Any failure, already rendered to a description
    Failed {
        id: u64,
        op: PostOp,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PostsLoaded { id, .. } => *id,
            NetworkResponse::PostCreated { id, .. } => *id,
            NetworkResponse::PostUpdated { id, .. } => *id,
            NetworkResponse::PostDeleted { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
