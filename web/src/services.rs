use std::rc::Rc;

use access::{ApiError, LoginUserStore, Permissions, UsernameCache};
use client::{ApiClient, DEFAULT_API_ROOT};

pub type Store = LoginUserStore<Rc<ApiClient>>;

pub type PicturePermissions = Permissions<Rc<Store>, Rc<ApiClient>>;

pub type Usernames = UsernameCache<Rc<ApiClient>>;

pub fn api_root() -> &'static str {
    option_env!("API_ROOT").unwrap_or(DEFAULT_API_ROOT)
}

/// Everything pages need to talk to the backend, created once per app.
#[derive(Clone)]
pub struct Services {
    pub client: Rc<ApiClient>,
    pub store: Rc<Store>,
    pub permissions: Rc<PicturePermissions>,
    pub usernames: Rc<Usernames>,
}

impl Services {
    pub fn new(root: &str) -> Result<Self, ApiError> {
        let client = Rc::new(ApiClient::new(root)?);
        let store = Rc::new(LoginUserStore::new(client.clone()));
        let permissions = Rc::new(Permissions::new(store.clone(), client.clone()));
        let usernames = Rc::new(UsernameCache::new(client.clone()));

        Ok(Self {
            client,
            store,
            permissions,
            usernames,
        })
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
