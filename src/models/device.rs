use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scanner provisioned out-of-band. `room` is `None` until the device is
/// assigned somewhere.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Device {
    pub device_id: String,
    pub room: Option<String>,
}

impl Device {
    /// The assigned room, matched verbatim against session rooms. An empty
    /// assignment counts as none.
    pub fn assigned_room(&self) -> Option<&str> {
        self.room.as_deref().filter(|room| !room.is_empty())
    }
}
