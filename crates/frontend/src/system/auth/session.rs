use contracts::domain::common::UserId;
use std::cell::RefCell;

/// Текущая сессия пользователя
#[derive(Debug, Default)]
struct Session {
    identity: Option<UserId>,
    valid: bool,
}

/// Session state for the single-threaded client.
///
/// Reads are open to everyone; mutations are crate-private and happen only
/// inside [`crate::shared::http::ApiClient`]. A multi-threaded host would
/// have to put this behind a mutex.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RefCell<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.inner.borrow().valid
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.inner.borrow().identity.clone()
    }

    pub(crate) fn establish(&self, user_id: UserId) {
        log::info!("session established for user {}", user_id);
        *self.inner.borrow_mut() = Session {
            identity: Some(user_id),
            valid: true,
        };
    }

    /// A successful refresh revalidates a known identity.
    pub(crate) fn refreshed(&self) {
        let mut session = self.inner.borrow_mut();
        if session.identity.is_some() {
            session.valid = true;
        }
    }

    /// Identity is kept so the header can still show who was signed in.
    pub(crate) fn invalidate(&self) {
        let mut session = self.inner.borrow_mut();
        if session.valid {
            log::info!("session invalidated");
        }
        session.valid = false;
    }
}
