//! Notification tests - subscription lifecycle and per-engine isolation

use std::sync::{Arc, Mutex};
use std::thread;

use tile_rise::core::{EngineConfig, GridEngine};
use tile_rise::types::Coord;

fn flat_engine() -> GridEngine {
    GridEngine::new(EngineConfig {
        min_value: 3,
        max_value: 3,
        ..EngineConfig::seeded(1)
    })
    .unwrap()
}

#[test]
fn test_listeners_survive_new_game() {
    let mut engine = flat_engine();
    let scores = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&scores);
    engine.on_score_changed(move |score| s.lock().unwrap().push(score));

    assert!(engine.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    engine.new_game();
    assert!(engine.try_resolve_pair(Coord::new(3, 0), Coord::new(4, 0)));

    assert_eq!(*scores.lock().unwrap(), vec![6, 0, 6]);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut engine = flat_engine();
    let boards = Arc::new(Mutex::new(0u32));
    let b = Arc::clone(&boards);
    let id = engine.on_board_changed(move |_| *b.lock().unwrap() += 1);
    assert_eq!(engine.subscriber_count(), 1);

    assert!(engine.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    assert_eq!(*boards.lock().unwrap(), 1);

    assert!(engine.unsubscribe(id));
    assert!(!engine.unsubscribe(id));
    assert_eq!(engine.subscriber_count(), 0);

    assert!(engine.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    assert_eq!(*boards.lock().unwrap(), 1);
}

#[test]
fn test_board_handler_sees_post_move_grid() {
    let mut engine = flat_engine();
    let seen = Arc::new(Mutex::new(None));
    let s = Arc::clone(&seen);
    engine.on_board_changed(move |grid| {
        *s.lock().unwrap() = Some((grid.cell(0, 3), grid.occupied_count()));
    });

    assert!(engine.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    assert_eq!(*seen.lock().unwrap(), Some((None, 18)));
}

#[test]
fn test_engines_do_not_share_listeners() {
    let mut a = flat_engine();
    let mut b = flat_engine();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let h = Arc::clone(&hits);
    a.on_score_changed(move |score| h.lock().unwrap().push(("a", score)));

    assert!(b.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    assert!(hits.lock().unwrap().is_empty());

    assert!(a.try_resolve_pair(Coord::new(0, 0), Coord::new(1, 0)));
    assert_eq!(*hits.lock().unwrap(), vec![("a", 6)]);
}

#[test]
fn test_engine_behind_mutex_is_usable_from_threads() {
    let engine = Arc::new(Mutex::new(flat_engine()));
    let total = Arc::new(Mutex::new(0u32));
    {
        let t = Arc::clone(&total);
        engine
            .lock()
            .unwrap()
            .on_score_changed(move |score| *t.lock().unwrap() = score);
    }

    let handles: Vec<_> = (0..2)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let x = i * 2;
                engine
                    .lock()
                    .unwrap()
                    .try_resolve_pair(Coord::new(x, 0), Coord::new(x + 1, 0))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(engine.lock().unwrap().moves(), 2);
    assert_eq!(*total.lock().unwrap(), 12);
}
