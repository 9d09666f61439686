// ABOUTME: End-to-end tests: dice, games, and analyzers working together.
// ABOUTME: Includes property tests over arbitrary face sets and trial counts.

use dicesim::{Analyzer, Die, Error, Game, Layout, Table};
use proptest::prelude::*;

fn d6() -> Die<u32> {
    Die::new(1..=6).unwrap()
}

#[test]
fn loaded_die_always_rolls_its_face() {
    let mut die = d6();
    for face in 2..=6 {
        die.set_weight(&face, 0).unwrap();
    }
    assert_eq!(die.roll(5).unwrap(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn two_dice_five_trials() {
    let mut game = Game::new(vec![d6(), d6()]).unwrap();
    game.play(5).unwrap();

    match game.show(Layout::Wide).unwrap() {
        Table::Wide(table) => {
            assert_eq!(table.len(), 5);
            assert_eq!(table.die_count(), 2);
        }
        Table::Narrow(_) => panic!("Expected wide layout"),
    }

    let analyzer = Analyzer::new(&game).unwrap();
    let total: usize = analyzer.combo().iter().map(|c| c.count).sum();
    assert_eq!(total, 5);
}

#[test]
fn forced_heads_is_always_a_jackpot() {
    let mut coin = Die::new(["H", "T"]).unwrap();
    coin.set_weight(&"T", 0).unwrap();

    let mut game = Game::new(vec![coin.clone(), coin]).unwrap();
    game.play(3).unwrap();
    assert_eq!(Analyzer::new(&game).unwrap().jackpot(), 3);
}

#[test]
fn unknown_layout_is_rejected() {
    let mut game = Game::new(vec![d6()]).unwrap();
    game.play(2).unwrap();
    let err = "X".parse::<Layout>().unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}

#[test]
fn weights_can_change_between_plays() {
    let mut game = Game::new(vec![d6(), d6()]).unwrap();
    game.play_seeded(20, 3).unwrap();
    let before = Analyzer::new(&game).unwrap();

    for index in 0..2 {
        let die = game.die_mut(index).unwrap();
        for face in 1..=5 {
            die.set_weight(&face, "0").unwrap();
        }
    }
    game.play(20).unwrap();
    let after = Analyzer::new(&game).unwrap();

    assert_eq!(after.jackpot(), 20);
    assert_eq!(after.combo().len(), 1);
    assert_eq!(after.combo()[0].faces, vec![6, 6]);
    // the earlier snapshot is untouched
    assert_eq!(before.trial_count(), 20);
    assert_eq!(before.wide().die_count(), 2);
}

#[test]
fn tables_serialize_as_records() {
    let mut game = Game::new(vec![Die::new(["a"]).unwrap(), Die::new(["a"]).unwrap()]).unwrap();
    game.play(1).unwrap();

    let narrow = serde_json::to_value(game.narrow().unwrap()).unwrap();
    assert_eq!(
        narrow,
        serde_json::json!({
            "rows": [
                {"trial": 1, "die": 1, "face": "a"},
                {"trial": 1, "die": 2, "face": "a"},
            ]
        })
    );

    let combos = serde_json::to_value(Analyzer::new(&game).unwrap().combo()).unwrap();
    assert_eq!(combos, serde_json::json!([{"faces": ["a", "a"], "count": 1}]));
}

proptest! {
    #[test]
    fn faces_are_deduplicated(faces in prop::collection::vec(0u8..20, 1..40)) {
        let die = Die::new(faces.clone()).unwrap();
        let mut distinct = faces;
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(die.faces(), distinct.as_slice());
        prop_assert!(die.show().iter().all(|fw| fw.weight == 1.0));
    }

    #[test]
    fn unknown_face_leaves_weights_alone(face in 7u32..100, weight in 0.0f64..10.0) {
        let mut die = d6();
        let before = die.clone();
        prop_assert!(matches!(die.set_weight(&face, weight), Err(Error::UnknownFace(_))));
        prop_assert_eq!(die, before);
    }

    #[test]
    fn roll_returns_count_faces(count in 0usize..200, seed in any::<u64>()) {
        let die = Die::new(["x", "y", "z"]).unwrap();
        let rolls = die.roll_seeded(count, seed).unwrap();
        prop_assert_eq!(rolls.len(), count);
        prop_assert!(rolls.iter().all(|f| die.faces().contains(f)));
    }

    #[test]
    fn layouts_hold_the_same_values(dice in 1usize..5, trials in 0usize..60, seed in any::<u64>()) {
        let mut game = Game::new(vec![d6(); dice]).unwrap();
        game.play_seeded(trials, seed).unwrap();

        let wide = game.wide().unwrap();
        let narrow = game.narrow().unwrap();
        prop_assert_eq!(wide.len(), trials);
        prop_assert_eq!(narrow.len(), trials * dice);

        let mut wide_faces: Vec<u32> = wide.rows().iter().flat_map(|r| r.faces.clone()).collect();
        let mut narrow_faces: Vec<u32> = narrow.rows().iter().map(|r| r.face).collect();
        wide_faces.sort();
        narrow_faces.sort();
        prop_assert_eq!(wide_faces, narrow_faces);
    }

    #[test]
    fn single_die_jackpots_every_trial(trials in 0usize..100, seed in any::<u64>()) {
        let mut game = Game::new(vec![d6()]).unwrap();
        game.play_seeded(trials, seed).unwrap();
        prop_assert_eq!(Analyzer::new(&game).unwrap().jackpot(), trials);
    }

    #[test]
    fn combo_counts_sum_to_trials(dice in 1usize..4, trials in 0usize..100, seed in any::<u64>()) {
        let mut game = Game::new(vec![d6(); dice]).unwrap();
        game.play_seeded(trials, seed).unwrap();
        let analyzer = Analyzer::new(&game).unwrap();

        let combos: usize = analyzer.combo().iter().map(|c| c.count).sum();
        prop_assert_eq!(combos, trials);
        prop_assert!(analyzer.jackpot() <= trials);
        for combo in analyzer.combo() {
            prop_assert!(combo.faces.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
