//! End-to-end console sessions driven from scripted text.

use crossmark::{AppConfig, Cli, ConsolePrompt, ConsoleView, Session};
use crossmark_core::TurnError;
use clap::Parser;
use std::io::Cursor;

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

fn session(config: AppConfig, input: &str) -> TestSession {
    let prompt = ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let view = ConsoleView::new(Vec::new(), false);
    Session::new(config, prompt, view)
}

fn transcripts(session: TestSession) -> (String, String) {
    let (prompt, view, _) = session.into_parts();
    let (_, prompts) = prompt.into_inner();
    (
        String::from_utf8(prompts).expect("utf-8 prompts"),
        String::from_utf8(view.into_inner()).expect("utf-8 board"),
    )
}

#[test]
fn test_interactive_game_to_win() {
    // names, marker choice, then X: (0,0) O: (1,0) X: (0,1) O: (1,1) X: (0,2)
    let input = "Ada\nGrace\nx\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n";
    let mut session = session(AppConfig::default(), input);

    let scoreboard = session.run().expect("complete game").clone();
    assert_eq!(scoreboard.games(), 1);
    assert_eq!(scoreboard.wins("Ada"), 1);

    let (prompts, board) = transcripts(session);
    assert!(prompts.contains("Ada, play X or O?"));
    assert!(!prompts.contains("Grace, play X or O?"));
    assert!(prompts.contains("Play again?"));
    assert!(board.contains("0  X | X | X"));
    assert!(board.contains("Ada (X) wins!"));
    assert!(board.contains("Score after 1 game: Ada 1 - 0 Grace, draws 0"));
}

#[test]
fn test_occupied_cell_and_bad_input_reprompt() {
    // Ada picks O, so Grace (X) opens
    let input = "Ada\nGrace\no\n\
                 1\n1\n\
                 one\n1\n1\n0\n0\n\
                 2\n0\n\
                 0\n1\n\
                 0\n2\n\
                 n\n";
    let mut session = session(AppConfig::default(), input);
    let scoreboard = session.run().expect("complete game").clone();

    // Centre, (2,0) and (0,2) give X the anti-diagonal
    assert_eq!(scoreboard.wins("Grace"), 1);

    let (prompts, board) = transcripts(session);
    assert!(prompts.contains("Please enter a number."));
    assert!(board.contains("Ada, row 1, column 1 is already taken by X."));
    assert!(board.contains("Grace (X) wins!"));
}

#[test]
fn test_rematch_keeps_players() {
    let cli = Cli::parse_from([
        "crossmark",
        "--first-player",
        "Ada",
        "--second-player",
        "Grace",
        "--first-marker",
        "x",
    ]);
    let config = AppConfig::default().with_cli(&cli).expect("valid overrides");
    let win = "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
    let input = format!("{win}y\n{win}n\n");
    let mut session = session(config, &input);

    let scoreboard = session.run().expect("two games").clone();
    assert_eq!(scoreboard.games(), 2);
    assert_eq!(scoreboard.wins("Ada"), 2);

    let (prompts, _) = transcripts(session);
    assert!(!prompts.contains("enter your name"));
    assert!(!prompts.contains("play X or O?"));
}

#[test]
fn test_single_game_skips_rematch_prompt() {
    let cli = Cli::parse_from(["crossmark", "--first-marker", "x", "--single"]);
    let config = AppConfig::default().with_cli(&cli).expect("valid overrides");
    let input = "\n\n0\n0\n1\n0\n0\n1\n1\n1\n0\n2\n";
    let mut session = session(config, input);

    let scoreboard = session.run().expect("one game").clone();
    assert_eq!(scoreboard.wins("Player 1"), 1);

    let (prompts, _) = transcripts(session);
    assert!(!prompts.contains("Play again?"));
}

#[test]
fn test_input_ending_mid_game_is_reported() {
    let input = "Ada\nGrace\nx\n0\n0\n";
    let mut session = session(AppConfig::default(), input);
    assert_eq!(session.run().map(|_| ()), Err(TurnError::InputClosed));
    assert_eq!(session.scoreboard().games(), 0);
}
