use bevy::prelude::*;

use crate::game::session::SessionController;
use crate::game::system_sets::GameSystems;

/// Plugin for the computer reply
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            poll_computer_reply_system.in_set(GameSystems::Execution),
        );
    }
}

/// Fire the session's scheduled computer reply once it is due
///
/// The view picks the new position up through the FEN sync in the visual
/// set of the same frame.
pub fn poll_computer_reply_system(time: Res<Time>, mut session: ResMut<SessionController>) {
    if !session.has_pending_reply() {
        return;
    }
    if let Some(record) = session.poll_computer_reply(time.elapsed()) {
        debug!("[AI] Reply {} on the board", record.san);
    }
}
