#![allow(dead_code)]

//! In-memory repository over Users, Messages and Resumes.
//!
//! `Storage` is the seam where a persistent backend would plug in; handlers
//! only ever see `Arc<dyn Storage>`. `MemStorage` keeps three maps with
//! independent auto-increment counters behind a `Mutex` — no operation holds
//! the lock across an await point, so mutations stay atomic per call.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::message::Message;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::models::{MessageId, ResumeId, UserId};
use crate::schema::{NewMessage, NewResume, NewUser};

/// Process-lifetime CRUD over the three entity types. All operations are
/// logically synchronous; the async surface exists for uniformity with a
/// future database-backed implementation.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: UserId) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    /// Assigns the next id and stores. No duplicate-username check here;
    /// that is the caller's lookup-before-create responsibility.
    async fn create_user(&self, new: NewUser) -> User;

    /// Stamps `created_at` and normalizes an absent or empty subject to None.
    async fn create_message(&self, new: NewMessage) -> Message;

    async fn get_resume(&self, id: ResumeId) -> Option<Resume>;
    /// The stored resume with the highest id, or None when the store is empty.
    async fn get_latest_resume(&self) -> Option<Resume>;
    async fn get_all_resumes(&self) -> Vec<Resume>;
    async fn create_resume(&self, new: NewResume) -> Resume;
    /// Returns whether a record was actually removed. Ids are never reused,
    /// so this is true exactly once per created id.
    async fn delete_resume(&self, id: ResumeId) -> bool;
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, User>,
    messages: BTreeMap<MessageId, Message>,
    resumes: BTreeMap<ResumeId, Resume>,
    next_user_id: i64,
    next_message_id: i64,
    next_resume_id: i64,
}

#[derive(Debug)]
pub struct MemStorage {
    inner: Mutex<Inner>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage {
            inner: Mutex::new(Inner {
                next_user_id: 1,
                next_message_id: 1,
                next_resume_id: 1,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means another request panicked mid-mutation; the
        // maps themselves are still structurally valid, so keep serving.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: UserId) -> Option<User> {
        self.lock().users.get(&id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.lock();
        inner.users.values().find(|u| u.username == username).cloned()
    }

    async fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.lock();
        let id = UserId(inner.next_user_id);
        inner.next_user_id += 1;
        let user = User {
            id,
            username: new.username,
            password: new.password,
        };
        inner.users.insert(id, user.clone());
        user
    }

    async fn create_message(&self, new: NewMessage) -> Message {
        let mut inner = self.lock();
        let id = MessageId(inner.next_message_id);
        inner.next_message_id += 1;
        let message = Message {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject.filter(|s| !s.is_empty()),
            message: new.message,
            created_at: Utc::now().to_rfc3339(),
        };
        inner.messages.insert(id, message.clone());
        message
    }

    async fn get_resume(&self, id: ResumeId) -> Option<Resume> {
        self.lock().resumes.get(&id).cloned()
    }

    async fn get_latest_resume(&self) -> Option<Resume> {
        let inner = self.lock();
        inner.resumes.values().next_back().cloned()
    }

    async fn get_all_resumes(&self) -> Vec<Resume> {
        self.lock().resumes.values().cloned().collect()
    }

    async fn create_resume(&self, new: NewResume) -> Resume {
        let mut inner = self.lock();
        let id = ResumeId(inner.next_resume_id);
        inner.next_resume_id += 1;
        let resume = Resume {
            id,
            filename: new.filename,
            path: new.path,
            uploaded_at: Utc::now(),
        };
        inner.resumes.insert(id, resume.clone());
        resume
    }

    async fn delete_resume(&self, id: ResumeId) -> bool {
        self.lock().resumes.remove(&id).is_some()
    }
}
