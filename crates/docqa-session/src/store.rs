//! Session registry.
//!
//! Maps opaque session ids to processed document sets. A session id is
//! only ever handed out for a fully processed session: while processing
//! runs the id is marked in-flight, and a failed run removes the marker
//! so the id never becomes queryable.

use std::collections::HashMap;
use std::sync::Arc;

use docqa_core::{Answer, Error, RawFile, Result};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::pipeline::{DocumentPipeline, Session};

enum SessionSlot {
    Processing,
    Ready(Arc<Session>),
}

/// Concurrent registry of sessions, keyed by generated id.
pub struct SessionStore {
    pipeline: DocumentPipeline,
    sessions: RwLock<HashMap<String, SessionSlot>>,
}

impl SessionStore {
    pub fn new(pipeline: DocumentPipeline) -> Self {
        Self {
            pipeline,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Process an upload batch into a new session and return its id.
    ///
    /// Each call generates a fresh id, so concurrent uploads never
    /// collide. On failure nothing is registered and the error is
    /// returned to the caller.
    pub async fn create(&self, files: &[RawFile]) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        {
            let mut sessions = self.sessions.write().await;
            sessions.insert(id.clone(), SessionSlot::Processing);
        }

        match self.pipeline.process(&id, files).await {
            Ok(session) => {
                let mut sessions = self.sessions.write().await;
                sessions.insert(id.clone(), SessionSlot::Ready(Arc::new(session)));
                debug!(session = %id, "session registered");
                Ok(id)
            }
            Err(e) => {
                let mut sessions = self.sessions.write().await;
                sessions.remove(&id);
                warn!(session = %id, error = %e, "session processing failed");
                Err(e)
            }
        }
    }

    /// Look up a ready session by id.
    pub async fn get(&self, id: &str) -> Result<Arc<Session>> {
        let sessions = self.sessions.read().await;
        match sessions.get(id) {
            Some(SessionSlot::Ready(session)) => Ok(session.clone()),
            Some(SessionSlot::Processing) => Err(Error::NotReady(id.to_string())),
            None => Err(Error::SessionNotFound(id.to_string())),
        }
    }

    /// Answer a question against the session with the given id.
    pub async fn query(&self, id: &str, question: &str) -> Result<Answer> {
        let session = self.get(id).await?;
        session.answer(question).await
    }

    /// Number of ready sessions currently registered.
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions
            .values()
            .filter(|slot| matches!(slot, SessionSlot::Ready(_)))
            .count()
    }
}
