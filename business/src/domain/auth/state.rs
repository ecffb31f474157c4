use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use super::model::{AuthSession, UserProfile};

#[derive(Debug, Clone, PartialEq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated {
        session: AuthSession,
        /// Profile of the signed-in user, once fetched.
        user: Option<UserProfile>,
    },
}

/// In-memory view of who is signed in, shared by the auth use cases.
///
/// Every sign-in and sign-out bumps the epoch. A request started under one
/// epoch may only write its result while the epoch is unchanged, so a slow
/// profile fetch that resolves after a logout is dropped.
pub struct AuthState {
    status: RwLock<AuthStatus>,
    epoch: AtomicU64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            status: RwLock::new(AuthStatus::Anonymous),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> AuthStatus {
        self.status
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.status(), AuthStatus::Authenticated { .. })
    }

    pub fn session(&self) -> Option<AuthSession> {
        match self.status() {
            AuthStatus::Authenticated { session, .. } => Some(session),
            AuthStatus::Anonymous => None,
        }
    }

    pub fn sign_in(&self, session: AuthSession, user: Option<UserProfile>) {
        let mut status = self
            .status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *status = AuthStatus::Authenticated { session, user };
    }

    pub fn sign_out(&self) {
        let mut status = self
            .status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *status = AuthStatus::Anonymous;
    }

    /// Stores the session found in the local store without starting a new epoch.
    /// Does nothing if someone already signed in or out in this process.
    pub fn restore(&self, session: AuthSession) -> bool {
        let mut status = self
            .status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.epoch.load(Ordering::SeqCst) != 0 {
            return false;
        }
        *status = AuthStatus::Authenticated {
            session,
            user: None,
        };
        true
    }

    /// Records a fetched profile if no sign-in or sign-out happened since `epoch`.
    /// Returns false when the result is stale and was discarded.
    pub fn apply_user(&self, epoch: u64, session: AuthSession, user: UserProfile) -> bool {
        let mut status = self
            .status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.epoch.load(Ordering::SeqCst) != epoch {
            return false;
        }
        *status = AuthStatus::Authenticated {
            session,
            user: Some(user),
        };
        true
    }
}
