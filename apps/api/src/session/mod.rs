//! Session state — the explicit, server-side stand-in for per-browser UI
//! state. One `Session` per client, holding the premium flag, the last
//! entered job description, and the last uploaded resume with its extracted
//! text. Nothing here is persisted: closing or deleting the session resets
//! everything.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract;

/// An uploaded resume and the text derived from it. Replaced wholesale
/// whenever a new file is uploaded.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub filename: String,
    pub bytes: Bytes,
    /// Extracted text; may be the no-text sentinel for image-only PDFs.
    pub text: String,
}

impl ResumeDocument {
    pub fn has_usable_text(&self) -> bool {
        extract::is_usable(&self.text)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub premium: bool,
    pub job_description: String,
    pub resume: Option<ResumeDocument>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            premium: false,
            job_description: String::new(),
            resume: None,
            created_at: Utc::now(),
        }
    }
}

/// Process-wide session map. Mutation happens only through the named entry
/// points below — handlers never reach into the map directly. The lock is
/// held only for the duration of one read or one mutation, never across an
/// await point.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Session {
        let session = Session::new();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(session.id, session.clone());
        session
    }

    /// One consistent snapshot of a session. Handlers call this exactly once
    /// per action so the job description and resume text they use together
    /// come from the same moment.
    pub fn snapshot(&self, id: Uuid) -> Result<Session, AppError> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(AppError::SessionNotFound(id))
    }

    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::SessionNotFound(id))
    }

    pub fn set_job_description(&self, id: Uuid, job_description: String) -> Result<(), AppError> {
        self.update(id, |session| session.job_description = job_description)
    }

    pub fn attach_resume(&self, id: Uuid, resume: ResumeDocument) -> Result<(), AppError> {
        self.update(id, |session| session.resume = Some(resume))
    }

    /// Flips the premium flag. Idempotent: upgrading an already-premium
    /// session (or downgrading a basic one) is a no-op.
    pub fn set_premium(&self, id: Uuid, premium: bool) -> Result<bool, AppError> {
        self.update(id, move |session| {
            session.premium = premium;
            session.premium
        })
    }

    fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Result<T, AppError> {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound(id))?;
        Ok(f(session))
    }
}
