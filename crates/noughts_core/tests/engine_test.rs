//! Scenario tests for the game engine.

use std::cell::RefCell;
use std::rc::Rc;

use noughts_core::{
    Board, CELL_COUNT, Cell, GameEngine, GameEvent, GameStatus, MoveError, Outcome, PlayerEntry,
    Roster, Symbol, WinStrategy,
};

fn roster(a: (&str, &str), b: (&str, &str)) -> Roster {
    Roster::from_entries(&PlayerEntry::new(a.0, a.1), &PlayerEntry::new(b.0, b.1))
        .expect("valid roster")
}

fn play(game: &mut GameEngine, cells: &[usize]) {
    for &cell in cells {
        game.make_move(cell).expect("legal move");
    }
}

#[test]
fn test_row_win_goes_to_player_who_moved() {
    let mut game = GameEngine::new(roster(("Ada", "X"), ("Bob", "O")));
    // X: 0, 1, 2   O: 3, 4
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.status(), GameStatus::Won { winner: 0 });
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ada"));
    assert!(game.check_winner());
    assert!(!game.is_draw());
    // Turn still flips on the winning move.
    assert_eq!(game.turn_index(), 1);
}

#[test]
fn test_second_player_can_win() {
    let mut game = GameEngine::new(roster(("Ada", "X"), ("Bob", "O")));
    // O takes the left column.
    play(&mut game, &[1, 0, 2, 3, 4, 6]);
    assert_eq!(game.status(), GameStatus::Won { winner: 1 });
    assert_eq!(game.winner().map(|p| p.symbol()), Some(Symbol::O));
}

#[test]
fn test_draw_sequence() {
    let mut game = GameEngine::default();
    play(&mut game, &[0, 1, 2, 4, 3, 6, 5, 8, 7]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_draw());
    assert!(!game.check_winner());
    assert!(game.board().is_full());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_win_on_last_move_is_not_draw() {
    let mut game = GameEngine::default();
    play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won { winner: 0 });
    assert!(!game.is_draw());
}

#[test]
fn test_move_after_win_is_rejected() {
    let mut game = GameEngine::default();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let board = game.snapshot();
    let turn = game.turn_index();

    for cell in [5, 8, 0, 42] {
        let err = game.make_move(cell).unwrap_err();
        assert!(err.is_game_over(), "{err}");
        assert_eq!(
            err,
            MoveError::GameOver {
                status: GameStatus::Won { winner: 0 }
            }
        );
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.turn_index(), turn);
}

#[test]
fn test_symbols_other_than_x_and_o() {
    let mut game = GameEngine::new(roster(("Ada", "q"), ("Bob", "z")));
    play(&mut game, &[2, 0, 4, 1, 6]);
    assert_eq!(game.status(), GameStatus::Won { winner: 0 });
    assert_eq!(game.board().get(4), Some(Cell::Occupied(Symbol::new('Q'))));
    assert_eq!(game.winning_line(), Some([2, 4, 6]));
}

#[test]
fn test_valid_move_matches_empty_cells_throughout_game() {
    let mut game = GameEngine::default();
    for &cell in &[4, 0, 8, 2, 1, 7, 3, 5, 6] {
        for i in 0..CELL_COUNT {
            assert_eq!(
                game.board().is_valid_move(i),
                game.board().get(i) == Some(Cell::Empty)
            );
        }
        if game.status().is_terminal() {
            break;
        }
        game.make_move(cell).unwrap();
    }
}

#[test]
fn test_rejected_moves_keep_turn_and_board() {
    let mut game = GameEngine::default();
    play(&mut game, &[4]);
    let before = game.snapshot();

    assert!(game.make_move(4).is_err());
    assert!(game.make_move(9).is_err());
    assert_eq!(game.turn_index(), 1);
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.history(), &[4]);
}

#[test]
fn test_observers_notified_in_order_with_same_snapshot() {
    let seen: Rc<RefCell<Vec<(&'static str, Board)>>> = Rc::new(RefCell::new(Vec::new()));
    let mut game = GameEngine::default();
    for tag in ["first", "second"] {
        let seen = Rc::clone(&seen);
        game.subscribe(move |event: &GameEvent| {
            seen.borrow_mut().push((tag, event.board().clone()));
        });
    }

    game.make_move(4).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, "first");
    assert_eq!(seen[1].0, "second");
    assert_eq!(seen[0].1, seen[1].1);
    assert_eq!(&seen[0].1, game.board());
}

#[test]
fn test_event_carries_move_details() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut game = GameEngine::default();
    {
        let events = Rc::clone(&events);
        game.subscribe(move |event: &GameEvent| events.borrow_mut().push(event.clone()));
    }
    play(&mut game, &[0, 8]);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    match &events[1] {
        GameEvent::MoveMade { cell, symbol, board } => {
            assert_eq!(*cell, 8);
            assert_eq!(*symbol, Symbol::O);
            assert_eq!(board.occupied_count(), 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_rejected_move_notifies_nobody() {
    let count = Rc::new(RefCell::new(0));
    let mut game = GameEngine::default();
    {
        let count = Rc::clone(&count);
        game.subscribe(move |_: &GameEvent| *count.borrow_mut() += 1);
    }
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(*count.borrow(), 5);

    let _ = game.make_move(5);
    let _ = game.make_move(0);
    assert_eq!(*count.borrow(), 5);
}

#[test]
fn test_reset_keeps_subscriptions() {
    let count = Rc::new(RefCell::new(0));
    let mut game = GameEngine::default();
    {
        let count = Rc::clone(&count);
        game.subscribe(move |_: &GameEvent| *count.borrow_mut() += 1);
    }
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn_index(), 0);
    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
    assert_eq!(game.observer_count(), 1);

    game.make_move(4).unwrap();
    assert_eq!(*count.borrow(), 6);
}

#[test]
fn test_set_players_starts_fresh_game() {
    let mut game = GameEngine::default();
    game.subscribe(|_: &GameEvent| {});
    play(&mut game, &[0, 1]);

    game.set_players(roster(("Ada", "a"), ("Bob", "b")));
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.observer_count(), 1);
}

#[test]
fn test_summary_of_finished_games() {
    let mut game = GameEngine::new(roster(("Ada", "X"), ("Bob", "O")));
    play(&mut game, &[0, 3, 1, 4, 2]);
    let summary = game.summary().expect("finished");
    assert_eq!(summary.outcome.result_text(), "Ada wins!");
    assert_eq!(summary.moves, 5);
    assert_eq!(summary.players.second().name(), "Bob");

    game.reset();
    play(&mut game, &[0, 1, 2, 4, 3, 6, 5, 8, 7]);
    let summary = game.summary().expect("finished");
    assert_eq!(summary.outcome, Outcome::Draw);
    assert_eq!(summary.outcome.result_text(), "It's a draw!");
}

/// Wins only when every corner holds the same symbol.
#[derive(Debug)]
struct FourCorners;

impl WinStrategy for FourCorners {
    fn check_winner(&self, board: &Board) -> bool {
        let corners = [0, 2, 6, 8].map(|i| board.get(i));
        corners[0] != Some(Cell::Empty) && corners.iter().all(|c| *c == corners[0])
    }
}

#[test]
fn test_custom_strategy_replaces_standard_rules() {
    let mut game = GameEngine::with_strategy(Roster::default(), Box::new(FourCorners));
    // A standard row win is not a win here.
    play(&mut game, &[3, 0, 4, 1, 5]);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_finished_state_and_roster_survive_json() {
    let mut game = GameEngine::new(roster(("Ada", "q"), ("Bob", "z")));
    for cell in [0, 3, 1, 4, 2] {
        game.make_move(cell).unwrap();
    }

    let state_json = serde_json::to_string(game.state()).unwrap();
    let state: noughts_core::GameState = serde_json::from_str(&state_json).unwrap();
    assert_eq!(&state, game.state());
    assert_eq!(state.status(), GameStatus::Won { winner: 0 });

    let roster_json = serde_json::to_string(game.players()).unwrap();
    let players: Roster = serde_json::from_str(&roster_json).unwrap();
    assert_eq!(&players, game.players());
    assert_eq!(players.second().symbol(), Symbol::new('z'));
}
