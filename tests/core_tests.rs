//! Integration tests for core state management
//!
//! Tests the state machine and app-wide resources in a realistic Bevy
//! application context, verifying that transitions work and systems
//! execute only in their designated states.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use chessboard::core::{CorePlugin, GameSettings, GameState, WindowConfig};

/// Helper struct to track system executions during tests
#[derive(Resource, Default, Debug)]
struct SystemExecutionTracker {
    mode_select_executions: u32,
    in_game_executions: u32,
}

fn track_mode_select_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.mode_select_executions += 1;
}

fn track_in_game_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.in_game_executions += 1;
}

fn core_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, CorePlugin));
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn test_initial_state_is_mode_select() {
    //! A new app starts at the mode picker, not on a board
    let mut app = core_app();
    app.update();
    assert_eq!(current_state(&app), GameState::ModeSelect);
}

#[test]
fn test_state_round_trip() {
    //! ModeSelect -> InGame -> ModeSelect, as a game and a reset do
    let mut app = core_app();
    app.update();

    set_state(&mut app, GameState::InGame);
    assert_eq!(current_state(&app), GameState::InGame);

    set_state(&mut app, GameState::ModeSelect);
    assert_eq!(current_state(&app), GameState::ModeSelect);
}

#[test]
fn test_systems_run_conditionally_based_on_state() {
    //! Systems with `in_state()` run conditions execute only in their state
    let mut app = core_app();
    app.init_resource::<SystemExecutionTracker>();
    app.add_systems(
        Update,
        (
            track_mode_select_execution.run_if(in_state(GameState::ModeSelect)),
            track_in_game_execution.run_if(in_state(GameState::InGame)),
        ),
    );

    app.update();
    {
        let tracker = app.world().resource::<SystemExecutionTracker>();
        assert_eq!(tracker.mode_select_executions, 1);
        assert_eq!(tracker.in_game_executions, 0);
    }

    set_state(&mut app, GameState::InGame);
    app.update();
    {
        let tracker = app.world().resource::<SystemExecutionTracker>();
        assert_eq!(tracker.mode_select_executions, 1);
        assert_eq!(tracker.in_game_executions, 2);
    }
}

#[test]
fn test_multiple_state_transitions() {
    //! Rapid new-game / reset cycles leave the state where it was set
    let mut app = core_app();

    for i in 0..10 {
        let target_state = if i % 2 == 0 {
            GameState::InGame
        } else {
            GameState::ModeSelect
        };
        set_state(&mut app, target_state);
        assert_eq!(current_state(&app), target_state);
    }
}

#[test]
fn test_core_resources_initialized() {
    //! CorePlugin provides default settings and window config
    let mut app = core_app();
    app.update();

    let settings = app.world().resource::<GameSettings>();
    assert_eq!(*settings, GameSettings::default());
    assert!(app.world().contains_resource::<WindowConfig>());
}
