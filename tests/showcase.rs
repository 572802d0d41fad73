use glam::Vec2;
use isowalk::constants::SHOWCASE_SPRITES;
use isowalk::showcase::Sprite;
use pretty_assertions::assert_eq;
use sdl2::rect::Rect;

#[test]
fn test_sprite_rect_is_centered() {
    let sprite = Sprite::new(Vec2::new(400.0, 400.0), Vec2::splat(100.0), 0);
    assert_eq!(sprite.dest_rect(), Rect::new(350, 350, 100, 100));
    assert_eq!(sprite.rotation, 0.0);
}

#[test]
fn test_default_placements() {
    let rects: Vec<Rect> = SHOWCASE_SPRITES
        .iter()
        .enumerate()
        .map(|(i, &(position, size))| Sprite::new(position, size, i).dest_rect())
        .collect();

    assert_eq!(rects, vec![Rect::new(350, 350, 100, 100), Rect::new(125, 125, 150, 150)]);
}

#[test]
fn test_negative_scale_clamped() {
    let sprite = Sprite::new(Vec2::new(10.0, 10.0), Vec2::new(-4.0, 8.0), 0);
    // SDL clamps zero-sized rects to one pixel.
    assert_eq!(sprite.dest_rect().width(), 1);
    assert_eq!(sprite.dest_rect().height(), 8);
}
