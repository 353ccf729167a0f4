use axum::{
    Router,
    routing::{get, post},
};

use crate::db::KeysafeStorage;
use crate::handlers::users::{create_user, delete_user, get_all_users, get_user, update_user};

#[derive(Clone)]
pub struct KeysafeState {
    pub storage: KeysafeStorage,
}

impl KeysafeState {
    pub fn new(storage: KeysafeStorage) -> Self {
        Self { storage }
    }
}

pub fn keysafe_router(state: KeysafeState) -> Router {
    Router::new()
        .route("/api/users/create", post(create_user))
        .route("/api/users/get", get(get_user))
        .route("/api/users/update", post(update_user).put(update_user))
        .route("/api/users/delete", post(delete_user).delete(delete_user))
        .route("/api/users/getallusers", get(get_all_users))
        .with_state(state)
}
