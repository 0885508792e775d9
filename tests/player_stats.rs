//! Integration tests for player goal/assist counters and their floors.

use racha_web::{record_player_assist, record_player_goal, Adjustment, Player, TournamentError};

fn roster() -> Vec<Player> {
    vec![
        Player::new("Carlos", "Lima", 4).with_nickname("Carlão"),
        Player::new("João", "Pereira", 3),
    ]
}

#[test]
fn incrementing_raises_both_counters() {
    let mut players = roster();
    let id = players[0].id;
    record_player_goal(&mut players, id, Adjustment::Increment).unwrap();
    record_player_goal(&mut players, id, Adjustment::Increment).unwrap();
    assert_eq!(players[0].goals, 2);
    assert_eq!(players[0].goals_total, 2);
}

#[test]
fn decrementing_floors_both_counters_at_zero() {
    let mut players = roster();
    let id = players[0].id;
    record_player_goal(&mut players, id, Adjustment::Increment).unwrap();
    record_player_goal(&mut players, id, Adjustment::Decrement).unwrap();
    record_player_goal(&mut players, id, Adjustment::Decrement).unwrap();
    assert_eq!(players[0].goals, 0);
    assert_eq!(players[0].goals_total, 0);
}

#[test]
fn lifetime_counter_at_zero_stays_put_while_tournament_counter_drops() {
    let mut players = roster();
    // The counters do not mirror each other: after a tournament reset the
    // per-tournament counter can sit above a lifetime total of zero.
    players[0].goals = 2;
    players[0].goals_total = 0;
    let id = players[0].id;

    record_player_goal(&mut players, id, Adjustment::Decrement).unwrap();
    assert_eq!(players[0].goals, 1);
    assert_eq!(players[0].goals_total, 0);
}

#[test]
fn assists_follow_the_same_rules() {
    let mut players = roster();
    let id = players[1].id;
    record_player_assist(&mut players, id, Adjustment::Increment).unwrap();
    record_player_assist(&mut players, id, Adjustment::Decrement).unwrap();
    record_player_assist(&mut players, id, Adjustment::Decrement).unwrap();
    assert_eq!(players[1].assists, 0);
    assert_eq!(players[1].assists_total, 0);
}

#[test]
fn unknown_player_is_rejected() {
    let mut players = roster();
    let bogus = uuid::Uuid::new_v4();
    assert!(matches!(
        record_player_goal(&mut players, bogus, Adjustment::Increment),
        Err(TournamentError::PlayerNotFound(_))
    ));
}

#[test]
fn display_name_includes_the_nickname_when_set() {
    let players = roster();
    assert_eq!(players[0].display_name(), "Carlos Lima \"Carlão\"");
    assert_eq!(players[1].display_name(), "João Pereira");
}

#[test]
fn skill_is_clamped_to_the_valid_range() {
    assert_eq!(Player::new("A", "B", 0).skill, 1);
    assert_eq!(Player::new("A", "B", 9).skill, 5);
}
