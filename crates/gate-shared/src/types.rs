//! Common types

use uuid::Uuid;

pub type UserId = Uuid;

pub fn new_id() -> UserId {
    Uuid::new_v4()
}
