use glam::{UVec2, Vec2};
use isowalk::map::iso::IsoProjection;
use isowalk::map::state::Cell;
use pretty_assertions::assert_eq;
use sdl2::rect::Rect;
use speculoos::prelude::*;

fn projection() -> IsoProjection {
    IsoProjection::centered(UVec2::new(800, 600), UVec2::new(128, 64), 5, 5)
}

#[test]
fn test_origin_centers_diamond() {
    let iso = projection();
    assert_eq!(iso.origin(), Vec2::new(336.0, 140.0));

    // Left, right, top and bottom extents are equally far from the window edges.
    let left = iso.cell_to_screen(Cell::new(4, 0)).x;
    let right = iso.cell_to_screen(Cell::new(0, 4)).x + 128.0;
    let top = iso.cell_to_screen(Cell::new(0, 0)).y;
    let bottom = iso.cell_to_screen(Cell::new(4, 4)).y + 64.0;
    assert_eq!(left, 800.0 - right);
    assert_eq!(top, 600.0 - bottom);
}

#[test]
fn test_origin_centers_rectangular_map() {
    let iso = IsoProjection::centered(UVec2::new(800, 600), UVec2::new(64, 32), 6, 3);

    let left = iso.cell_to_screen(Cell::new(2, 0)).x;
    let right = iso.cell_to_screen(Cell::new(0, 5)).x + 64.0;
    assert_eq!(left, 800.0 - right);
}

#[test]
fn test_cell_to_screen_steps() {
    let iso = projection();
    let origin = iso.origin();

    assert_eq!(iso.cell_to_screen(Cell::new(0, 0)), origin);
    assert_eq!(iso.cell_to_screen(Cell::new(0, 1)), origin + Vec2::new(64.0, 32.0));
    assert_eq!(iso.cell_to_screen(Cell::new(1, 0)), origin + Vec2::new(-64.0, 32.0));
    assert_eq!(iso.cell_to_screen(Cell::new(1, 1)), origin + Vec2::new(0.0, 64.0));
}

#[test]
fn test_screen_to_cell_inverts_every_cell() {
    let iso = projection();
    for row in 0..5 {
        for col in 0..5 {
            let cell = Cell::new(row, col);
            assert_eq!(iso.screen_to_cell(iso.cell_to_screen(cell)), Some(cell));
        }
    }
}

#[test]
fn test_screen_to_cell_outside_map() {
    let iso = projection();
    assert_that(&iso.screen_to_cell(iso.origin() - Vec2::new(0.0, 64.0))).is_none();
    assert_that(&iso.screen_to_cell(Vec2::ZERO)).is_none();
}

#[test]
fn test_point_to_cell_uses_tile_center() {
    let iso = projection();
    let cell = Cell::new(3, 1);
    let center = iso.cell_to_screen(cell) + Vec2::new(64.0, 32.0);

    assert_eq!(iso.point_to_cell(center), Some(cell));
}

#[test]
fn test_tile_and_sprite_rects() {
    let iso = projection();

    assert_eq!(iso.tile_rect(Cell::new(0, 0)), Rect::new(336, 140, 128, 64));
    // Sprite is centered a quarter tile below the top corner.
    assert_eq!(iso.sprite_rect(Cell::new(0, 0)), Rect::new(336, 124, 128, 64));
}
