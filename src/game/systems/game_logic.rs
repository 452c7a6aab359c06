//! Session housekeeping systems

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::session::SessionController;

/// Push changed settings into the session (reply delay, hover flag)
pub fn apply_settings_system(settings: Res<GameSettings>, mut session: ResMut<SessionController>) {
    if !settings.is_changed() {
        return;
    }
    session.apply_settings(&settings);
    debug!(
        "[SESSION] Settings applied: reply delay {} ms, hover {}",
        settings.reply_delay_ms, settings.hover_highlights
    );
}
