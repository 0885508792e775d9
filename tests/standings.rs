//! Integration tests for the league table comparator.

use racha_web::{rank, Team, TeamId};

fn team(name: &str, points: u32, scored: u32, conceded: u32) -> Team {
    let mut t = Team::new(name);
    t.points = points;
    t.goals_scored = scored;
    t.goals_conceded = conceded;
    t
}

#[test]
fn points_dominate_all_other_keys() {
    let teams = vec![
        team("Azul", 3, 10, 0),
        team("Verde", 9, 1, 5),
        team("Branco", 6, 4, 4),
    ];
    let table = rank(&teams);
    let names: Vec<_> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Verde", "Branco", "Azul"]);
}

#[test]
fn goal_difference_breaks_point_ties() {
    let teams = vec![team("Verde", 6, 4, 4), team("Azul", 6, 7, 2)];
    let table = rank(&teams);
    assert_eq!(table[0].name, "Azul");
}

#[test]
fn goals_scored_breaks_equal_difference() {
    // Both +2 on goal difference, but Azul scored more.
    let teams = vec![team("Verde", 6, 3, 1), team("Azul", 6, 5, 3)];
    let table = rank(&teams);
    assert_eq!(table[0].name, "Azul");
}

#[test]
fn fully_tied_teams_keep_input_order() {
    let teams = vec![team("Verde", 6, 5, 5), team("Azul", 6, 5, 5)];
    let table = rank(&teams);
    assert_eq!(table[0].name, "Verde");
    assert_eq!(table[1].name, "Azul");
}

#[test]
fn ranking_is_independent_of_input_permutation() {
    let verde = team("Verde", 9, 6, 0);
    let amarelo = team("Amarelo", 6, 3, 2);
    let branco = team("Branco", 3, 2, 4);
    let azul = team("Azul", 0, 0, 5);

    let forward = vec![verde.clone(), amarelo.clone(), branco.clone(), azul.clone()];
    let backward = vec![azul, branco, amarelo, verde];

    let ids = |teams: &[Team]| -> Vec<TeamId> { rank(teams).iter().map(|t| t.id).collect() };
    assert_eq!(ids(&forward), ids(&backward));
}

#[test]
fn rank_does_not_mutate_its_input() {
    let teams = vec![team("Azul", 0, 0, 0), team("Verde", 9, 9, 0)];
    let _ = rank(&teams);
    assert_eq!(teams[0].name, "Azul");
}
