mod common;

use common::{ship, Game, EMERALD, HOME, TRANSWARP};
use pforecast_lib::{get_optimum_warp, Point};

fn game() -> Game {
    let mut game = Game::new("PHost 4.0.5");
    game.add_ship(ship(1, EMERALD, TRANSWARP));
    game
}

#[test]
fn keeps_max_warp_when_slower_arrives_later() {
    let game = game();
    let warp = get_optimum_warp(&game.ctx(), 1, HOME, Point::new(2080, 2000));
    assert_eq!(warp, 9);
}

#[test]
fn drops_warp_while_arrival_turn_is_unchanged() {
    // 100 ly take two turns at warp 9 and warp 8, three at warp 7.
    let game = game();
    let warp = get_optimum_warp(&game.ctx(), 1, HOME, Point::new(2100, 2000));
    assert_eq!(warp, 8);
}

#[test]
fn short_hop_in_deep_space_uses_warp_one() {
    let game = game();
    let warp = get_optimum_warp(&game.ctx(), 1, HOME, Point::new(2001, 2000));
    assert_eq!(warp, 1);
}

#[test]
fn target_in_foreign_gravity_well_needs_warp_two() {
    let mut game = game();
    game.add_planet(7, Point::new(2003, 2000), 2);
    let warp = get_optimum_warp(&game.ctx(), 1, HOME, Point::new(2001, 2000));
    assert_eq!(warp, 2);
}

#[test]
fn unreachable_target_returns_max_warp() {
    let game = game();
    let warp = get_optimum_warp(&game.ctx(), 1, HOME, Point::new(4500, 2000));
    assert_eq!(warp, 9);
}

#[test]
fn unknown_ship_has_no_optimum() {
    let game = game();
    assert_eq!(get_optimum_warp(&game.ctx(), 99, HOME, Point::new(2100, 2000)), 0);
}
