#![forbid(unsafe_code)]

//! The example family's data source: a post catalog behind a service trait.
//!
//! The mock implementation answers from fixtures and can be told to fail, so
//! view-model error paths are exercised without any transport.

use std::cell::Cell;

use flownav_runtime::{RequestError, RequestResult};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Read-only access to the post catalog.
pub trait PostService {
    fn fetch_posts(&self) -> RequestResult<Vec<Post>>;
    fn fetch_post(&self, id: u32) -> RequestResult<Post>;
}

/// Fixture-backed service for the demo and tests.
pub struct MockPostService {
    posts: Vec<Post>,
    fail_next: Cell<bool>,
}

impl MockPostService {
    #[must_use]
    pub fn new() -> Self {
        let posts = (1..=5)
            .map(|id| Post {
                id,
                title: format!("Post {id}"),
                body: format!("Body of post {id}."),
            })
            .collect();
        Self {
            posts,
            fail_next: Cell::new(false),
        }
    }

    /// Make the next fetch fail with a transport error.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    fn check_failure(&self) -> RequestResult<()> {
        if self.fail_next.take() {
            return Err(RequestError::Transport("connection reset".into()));
        }
        Ok(())
    }
}

impl Default for MockPostService {
    fn default() -> Self {
        Self::new()
    }
}

impl PostService for MockPostService {
    fn fetch_posts(&self) -> RequestResult<Vec<Post>> {
        self.check_failure()?;
        Ok(self.posts.clone())
    }

    fn fetch_post(&self, id: u32) -> RequestResult<Post> {
        self.check_failure()?;
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RequestError::Server {
                status: 404,
                message: format!("no post with id {id}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_served_by_id() {
        let service = MockPostService::new();
        assert_eq!(service.fetch_posts().unwrap().len(), 5);
        assert_eq!(service.fetch_post(3).unwrap().title, "Post 3");
    }

    #[test]
    fn unknown_id_is_a_server_error() {
        let service = MockPostService::new();
        assert!(matches!(
            service.fetch_post(99),
            Err(RequestError::Server { status: 404, .. })
        ));
    }

    #[test]
    fn fail_next_affects_exactly_one_fetch() {
        let service = MockPostService::new();
        service.fail_next();
        assert!(matches!(
            service.fetch_posts(),
            Err(RequestError::Transport(_))
        ));
        assert!(service.fetch_posts().is_ok());
    }
}
