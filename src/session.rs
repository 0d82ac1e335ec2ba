use crate::error::InvalidInputError;
use crate::model::{Participant, ParticipantId, UserId};

/// Who is looking at the trip's economy.
///
/// Viewer-relative views take this explicitly instead of reading a global
/// "current user".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionContext {
    viewer: ParticipantId,
}

impl SessionContext {
    pub fn new(viewer: ParticipantId) -> Self {
        SessionContext { viewer }
    }

    /// Finds the participant a logged in user has in this trip.
    pub fn for_user(user: UserId, participants: &[Participant]) -> Result<Self, InvalidInputError> {
        participants
            .iter()
            .find(|p| p.user_id == user)
            .map(|p| SessionContext::new(p.id))
            .ok_or(InvalidInputError::NotAParticipant(user))
    }

    pub fn viewer(&self) -> ParticipantId {
        self.viewer
    }
}
