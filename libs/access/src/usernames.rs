use std::{cell::RefCell, collections::HashMap};
use tracing::{debug, trace, warn};

use replies::{ErrorCode, Payload, UserId};

use crate::{ApiError, UserService};

/// Returned for missing or zero ids.
pub const NOT_APPLICABLE: &str = "N/A";

pub fn fallback_name(id: UserId) -> String {
    format!("User {}", id)
}

/// The outcome of asking the server for a user.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Named(String),
    Unnamed,
    /// A successful envelope without a user.
    Missing,
    Rejected {
        code: ErrorCode,
        message: Option<String>,
    },
    Failed(ApiError),
}

impl Lookup {
    pub fn into_display_name(self, id: UserId) -> String {
        match self {
            Self::Named(name) => name,
            _ => fallback_name(id),
        }
    }
}

/// Memoizes user names by id. Entries live as long as the cache, failures
/// included, so every id costs at most one request. Lookups racing for the
/// same id are not merged, each one fetches and the last to finish is kept.
pub struct UsernameCache<U> {
    users: U,
    names: RefCell<HashMap<UserId, String>>,
}

impl<U> UsernameCache<U>
where
    U: UserService,
{
    pub fn new(users: U) -> Self {
        Self {
            users,
            names: Default::default(),
        }
    }

    pub fn cached(&self, id: UserId) -> Option<String> {
        self.names.borrow().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }

    /// Always asks the server, ignoring and leaving the cache alone.
    pub async fn lookup(&self, id: UserId) -> Lookup {
        match self.users.user_by_id(id).await {
            Ok(response) => match response.into_payload() {
                Payload::Data(user) => match user.user_name {
                    Some(name) if !name.is_empty() => Lookup::Named(name),
                    _ => Lookup::Unnamed,
                },
                Payload::Empty => Lookup::Missing,
                Payload::Failed { code, message } => Lookup::Rejected { code, message },
            },
            Err(e) => Lookup::Failed(e),
        }
    }

    pub async fn resolve(&self, user_id: Option<UserId>) -> String {
        let id = match user_id {
            Some(id) if id != 0 => id,
            _ => return NOT_APPLICABLE.to_owned(),
        };

        if let Some(name) = self.cached(id) {
            trace!(id, "usernames:hit");
            return name;
        }

        let lookup = self.lookup(id).await;

        match &lookup {
            Lookup::Failed(e) => warn!(id, "usernames: {}", e),
            Lookup::Missing => warn!(id, "usernames:missing"),
            Lookup::Rejected { code, message } => warn!(id, %code, ?message, "usernames:rejected"),
            _ => debug!(id, "usernames:miss"),
        }

        let name = lookup.into_display_name(id);

        self.names.borrow_mut().insert(id, name.clone());

        name
    }
}
