//! Scripted console sessions against the perfect-play computer.

use std::io::Cursor;
use tictactoe_console::{Console, ConsoleConfig, FirstPlayer};
use tictactoe_engine::Mark;

fn run_session(config: ConsoleConfig, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), config);
    console.run().expect("Session runs");
    String::from_utf8(console.into_output()).expect("UTF-8 output")
}

#[test]
fn test_scripted_game_is_never_lost_by_the_computer() {
    let config = ConsoleConfig::default()
        .with_human_mark(Mark::X)
        .with_replay(false);
    // Human tries every cell in order; occupied ones are rejected.
    let input = "0 0\n0 1\n0 2\n1 0\n1 1\n1 2\n2 0\n2 1\n2 2\n";
    let output = run_session(config, input);

    // O answers the corner in the centre, blocks at (0,2), then completes
    // the anti-diagonal at (2,0).
    assert!(output.contains("AI wins!"));
    assert!(!output.contains("You win!"));
    assert_eq!(output.matches("Invalid move, try again!").count(), 1);
    assert!(output.contains("0 X|X|O\n  -+-+-\n1 X|O| \n  -+-+-\n2 O| | \n"));
}

#[test]
fn test_mark_prompt_and_input_end() {
    let output = run_session(ConsoleConfig::default(), "x\n");
    assert!(output.starts_with("Welcome to Tic-Tac-Toe!\nEnter your choice [X or O]: "));
    assert!(output.contains("Enter your move (row and column): "));
    assert!(!output.contains("Enter 1 to play again"));
}

#[test]
fn test_bad_input_is_rejected() {
    let config = ConsoleConfig::default().with_human_mark(Mark::O);
    let output = run_session(config, "hello\n3 3\n1\n");
    assert_eq!(output.matches("Invalid move, try again!").count(), 3);
}

#[test]
fn test_computer_can_open() {
    let config = ConsoleConfig::default()
        .with_human_mark(Mark::O)
        .with_first_player(FirstPlayer::Computer);
    let output = run_session(config, "");
    assert!(output.starts_with("Welcome to Tic-Tac-Toe!\n  0 1 2\n0 X| | \n"));
}

#[test]
fn test_replay_asks_for_a_mark_again() {
    let output = run_session(ConsoleConfig::default(), "x\n0 0\n0 1\n1 0\n1\no\n");
    assert_eq!(output.matches("AI wins!").count(), 1);
    assert_eq!(output.matches("Enter 1 to play again").count(), 1);
    assert_eq!(output.matches("Enter your choice [X or O]: ").count(), 2);
}

#[test]
fn test_declining_replay_ends_session() {
    let output = run_session(ConsoleConfig::default(), "x\n0 0\n0 1\n1 0\n2\nx\n");
    assert_eq!(output.matches("Enter your choice [X or O]: ").count(), 1);
}

#[test]
fn test_fixed_mark_replays_on_a_fresh_board() {
    let config = ConsoleConfig::default().with_human_mark(Mark::X);
    let script = "0 0\n0 1\n1 0\n";
    let input = format!("{script}1\n{script}2\n");
    let output = run_session(config, &input);
    assert_eq!(output.matches("AI wins!").count(), 2);
    assert!(!output.contains("Invalid move"));
    assert!(!output.contains("Enter your choice"));
}
