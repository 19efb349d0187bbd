//! Scripted runs of the line-based front end.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use noughts::{MemorySink, PromptSession};

/// Feeds `script` to a session and returns everything it printed.
fn run_script(script: &str, sink: &mut MemorySink) -> String {
    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    let input = Cursor::new(script.to_string());
    let mut session = PromptSession::new(input, Rc::clone(&output), sink);
    session.run().expect("Session failed");
    drop(session);
    let bytes = output.borrow().clone();
    String::from_utf8(bytes).expect("utf8 output")
}

#[test]
fn test_quit_immediately() {
    let mut sink = MemorySink::new();
    let out = run_script("3\n", &mut sink);
    assert!(out.starts_with("Welcome to Tic Tac Toe!"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert!(sink.records().is_empty());
}

#[test]
fn test_end_of_input_ends_session() {
    let mut sink = MemorySink::new();
    let out = run_script("1\nAda\n", &mut sink);
    assert!(out.contains("Player 1 symbol (1 letter): "));
    assert!(!out.contains("Player 2 name: "));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert!(sink.records().is_empty());
}

#[test]
fn test_full_game_is_recorded() {
    let mut sink = MemorySink::new();
    let out = run_script("1\nAda\nx\nBob\no\n1\n4\n2\n5\n3\n3\n", &mut sink);

    assert!(out.contains("Ada's turn (X): "));
    assert!(out.contains("Bob's turn (O): "));
    assert!(out.contains("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
    assert!(out.contains("Game over: Ada wins!"));

    assert_eq!(sink.records().len(), 1);
    let record = &sink.records()[0];
    assert_eq!(record.player1_name(), "Ada");
    assert_eq!(record.player1_symbol(), "X");
    assert_eq!(record.player2_name(), "Bob");
    assert_eq!(record.result(), "Ada wins!");
}

#[test]
fn test_draw_is_recorded() {
    let mut sink = MemorySink::new();
    let out = run_script("1\nAda\nx\nBob\no\n1\n2\n3\n5\n4\n7\n6\n9\n8\n3\n", &mut sink);
    assert!(out.contains("Game over: It's a draw!"));
    assert_eq!(sink.records()[0].result(), "It's a draw!");
}

#[test]
fn test_setup_reprompts_only_offending_field() {
    let mut sink = MemorySink::new();
    let script = "1\nAda2\nx\nBob\nX\nAda\no\n3\n";
    let out = run_script(script, &mut sink);

    assert!(out.contains("Input error: Player 1: name must contain only letters"));
    assert!(out.contains("Input error: Player 2: symbol 'X' is already taken"));
    assert_eq!(out.matches("Player 1 name: ").count(), 2);
    assert_eq!(out.matches("Player 1 symbol (1 letter): ").count(), 1);
    assert_eq!(out.matches("Player 2 symbol (1 letter): ").count(), 2);
    assert!(out.contains("Ada's turn (X): "));
}

#[test]
fn test_bad_cells_reprompt_same_player() {
    let mut sink = MemorySink::new();
    let out = run_script("1\nAda\nx\nBob\no\nzero\n10\n5\n5\n", &mut sink);

    assert!(out.contains("Invalid input: 'zero' is not a number"));
    assert!(out.contains("Invalid input: 10 is not between 1 and 9"));
    assert!(out.contains("Invalid move: cell 4 is already occupied"));
    assert_eq!(out.matches("Ada's turn (X): ").count(), 3);
    assert_eq!(out.matches("Bob's turn (O): ").count(), 2);
    assert!(sink.records().is_empty());
}

#[test]
fn test_history_lists_games_in_session() {
    let mut sink = MemorySink::new();
    let out = run_script("2\n1\nAda\nx\nBob\no\n1\n4\n2\n5\n3\nh\nq\n", &mut sink);

    assert!(out.contains("No games played yet."));
    assert!(out.contains("Ada (X) vs Bob (O)  Ada wins!"));
}

#[test]
fn test_second_round_starts_fresh() {
    let mut sink = MemorySink::new();
    let script = "1\nAda\nx\nBob\no\n1\n4\n2\n5\n3\n\
                  1\nCy\nc\nDi\nd\n4\n1\n5\n2\n6\n3\n";
    let out = run_script(script, &mut sink);

    assert!(out.contains("Game over: Ada wins!"));
    assert!(out.contains("Game over: Cy wins!"));
    assert_eq!(sink.records().len(), 2);
    assert_eq!(sink.records()[1].player2_symbol(), "D");
}

#[test]
fn test_menu_choice_ignores_surrounding_spaces() {
    let mut sink = MemorySink::new();
    let out = run_script(" 1 \nAda\nx\nBob\no\n1\n4\n2\n5\n3\n  Q\n", &mut sink);

    assert!(!out.contains("Unknown choice"));
    assert!(out.contains("Game over: Ada wins!"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert_eq!(sink.records().len(), 1);
}
