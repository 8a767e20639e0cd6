use chrono::{DateTime, Local, Utc};

pub const AWAITING_OUTPUT: &str = "Awaiting output…";
pub const CONNECTION_LOST: &str = "Connection lost";
pub const SENDING: &str = "Sending…";
pub const COMMAND_SENT: &str = "Command sent";

/// Indicator state, mirrored onto the element's `data-state` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusState {
    #[default]
    Idle,
    Pending,
    Ok,
    Error,
}

impl StatusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::Idle => "idle",
            StatusState::Pending => "pending",
            StatusState::Ok => "ok",
            StatusState::Error => "error",
        }
    }
}

/// What the status indicator shows. Only the latest outcome matters; no history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub state: StatusState,
    pub message: String,
}

impl Status {
    fn new(state: StatusState, message: impl Into<String>) -> Self {
        Self { state, message: message.into() }
    }

    pub fn awaiting() -> Self {
        Self::new(StatusState::Idle, AWAITING_OUTPUT)
    }

    pub fn updated(at: DateTime<Utc>) -> Self {
        Self::new(StatusState::Ok, format!("Updated {}", local_time_string(at)))
    }

    pub fn connection_lost() -> Self {
        Self::new(StatusState::Error, CONNECTION_LOST)
    }

    pub fn sending() -> Self {
        Self::new(StatusState::Pending, SENDING)
    }

    pub fn command_sent() -> Self {
        Self::new(StatusState::Ok, COMMAND_SENT)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(StatusState::Error, message)
    }

    /// Pure projection: snapshot timestamp -> indicator.
    pub fn for_update(updated_at: Option<DateTime<Utc>>) -> Self {
        match updated_at {
            Some(at) => Self::updated(at),
            None => Self::awaiting(),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::awaiting()
    }
}

pub fn local_time_string(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}
