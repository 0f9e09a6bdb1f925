//! Tests for the turn controller state machine.

use crossmark_core::script::{RecordingPresenter, ScriptedInput};
use crossmark_core::{
    Axis, Coordinate, Marker, Outcome, Players, TurnController, TurnError, TurnState,
};

fn players() -> Players {
    Players::new("Ada", Marker::X, "Grace")
}

#[test]
fn test_lifecycle_to_win() {
    let input = ScriptedInput::new().moves(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let mut presenter = RecordingPresenter::new();
    let mut controller = TurnController::new(players(), input, &mut presenter);

    assert_eq!(controller.state(), TurnState::AwaitingMove(Marker::X));
    assert_eq!(controller.play_turn(), Ok(TurnState::AwaitingMove(Marker::O)));
    assert_eq!(controller.play_turn(), Ok(TurnState::AwaitingMove(Marker::X)));

    let outcome = controller.run().expect("scripted game");
    assert_eq!(outcome, Outcome::Win(Marker::X));
    assert_eq!(controller.state(), TurnState::Finished(Outcome::Win(Marker::X)));
    drop(controller);

    assert_eq!(
        presenter.announcements(),
        &vec![(Outcome::Win(Marker::X), Some("Ada".to_string()))]
    );
}

#[test]
fn test_draw_is_announced_without_winner() {
    // X O X / X O O / O X X
    let input = ScriptedInput::new().moves(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    let mut presenter = RecordingPresenter::new();
    let mut controller = TurnController::new(players(), input, &mut presenter);

    assert_eq!(controller.run(), Ok(Outcome::Draw));
    assert!(controller.grid().is_full());
    drop(controller);

    assert_eq!(presenter.announcements(), &vec![(Outcome::Draw, None)]);
}

#[test]
fn test_renders_before_first_move_and_after_each_placement() {
    let input = ScriptedInput::new().moves(&[(0, 0), (0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let mut presenter = RecordingPresenter::new();
    let mut controller = TurnController::new(players(), input, &mut presenter);

    controller.run().expect("scripted game");
    drop(controller);

    // 5 successful placements, 1 rejected retry
    assert_eq!(presenter.renders().len(), 6);
    assert!(presenter.renders()[0].open_cells().len() == 9);
    assert_eq!(presenter.rejections().len(), 1);
    assert_eq!(presenter.announcements().len(), 1);
}

#[test]
fn test_run_twice_announces_once() {
    let input = ScriptedInput::new().moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let mut presenter = RecordingPresenter::new();
    let mut controller = TurnController::new(players(), input, &mut presenter);

    assert_eq!(controller.run(), Ok(Outcome::Win(Marker::X)));
    assert_eq!(controller.run(), Ok(Outcome::Win(Marker::X)));
    assert_eq!(controller.play_turn(), Err(TurnError::GameOver));
    drop(controller);

    assert_eq!(presenter.announcements().len(), 1);
}

#[test]
fn test_winner_name_follows_marker_not_seat() {
    // The first participant picked O, so Grace (X) opens and Ada wins as O.
    let players = Players::new("Ada", Marker::O, "Grace");
    let input = ScriptedInput::new().moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    let mut presenter = RecordingPresenter::new();
    let mut controller = TurnController::new(players, input, &mut presenter);

    assert_eq!(controller.run(), Ok(Outcome::Win(Marker::O)));
    let (_, input, _) = controller.into_parts();

    assert_eq!(input.cell_requests()[0], ("Grace".to_string(), Axis::Row));
    assert_eq!(input.cell_requests()[2], ("Ada".to_string(), Axis::Row));
    assert_eq!(
        presenter.announcements(),
        &vec![(Outcome::Win(Marker::O), Some("Ada".to_string()))]
    );
}

#[test]
fn test_row_requested_before_column() {
    let input = ScriptedInput::new().play(2, 1);
    let mut controller = TurnController::new(players(), input, RecordingPresenter::new());
    controller.play_turn().expect("one move");

    let (grid, input, _) = controller.into_parts();
    assert_eq!(
        input.cell_requests(),
        &[
            ("Ada".to_string(), Axis::Row),
            ("Ada".to_string(), Axis::Column)
        ]
    );
    assert!(grid.cell(Coordinate::new(2, 1)).marker() == Some(Marker::X));
}

/// Plays a whole game where each player takes the lowest open cell after
/// `offset`, wrapping around.
fn play_greedy(offset: usize) -> (Outcome, usize) {
    let mut input = ScriptedInput::new();
    let mut taken = [false; 9];
    for turn in 0..9 {
        let index = (0..9)
            .map(|step| (offset + turn * 4 + step) % 9)
            .find(|&index| !taken[index])
            .expect("open cell");
        taken[index] = true;
        input = input.play(index / 3, index % 3);
    }

    let mut controller = TurnController::new(players(), input, RecordingPresenter::new());
    let outcome = controller.run().expect("nine moves always finish");
    let placed = 9 - controller.grid().open_cells().len();
    (outcome, placed)
}

#[test]
fn test_full_play_through_always_finishes() {
    for offset in 0..9 {
        let (outcome, placed) = play_greedy(offset);
        assert!(placed <= 9);
        if placed < 9 {
            assert!(matches!(outcome, Outcome::Win(_)), "early finish must be a win");
        }
    }
}
