use eframe_sketch_board::{Board, BoardConfig, InputEvent, InputMode};
use egui::{Pos2, pos2};

// Raw positions equal device pixels when nothing is oversampled
fn unscaled_board() -> Board {
    let config = BoardConfig {
        magnification: 1.0,
        ..Default::default()
    };
    Board::new(100, 100, config).unwrap()
}

fn draw(board: &mut Board, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    board.handle_event(InputEvent::PointerDown { position: *first });
    for point in rest {
        board.handle_event(InputEvent::PointerMove { position: *point });
    }
    board.handle_event(InputEvent::PointerUp);
}

#[test]
fn test_stroke_then_undo_restores_blank_canvas() {
    let mut board = unscaled_board();
    let blank = board.snapshot();

    draw(
        &mut board,
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(30.0, 10.0), pos2(40.0, 10.0)],
    );

    assert_eq!(board.paths().len(), 1);
    assert_eq!(board.paths()[0].geometry().segments().len(), 2);
    assert_eq!(board.history().len(), 2);
    assert_eq!(board.history().index(), 1);
    assert_eq!(board.mode(), InputMode::Draw);
    assert_ne!(board.snapshot(), blank);

    board.undo();
    assert_eq!(board.history().index(), 0);
    assert_eq!(board.snapshot(), blank);
    // Paths are not affected by undo
    assert_eq!(board.paths().len(), 1);
}

#[test]
fn test_segments_are_drawn_while_the_pointer_moves() {
    let mut board = unscaled_board();
    board.pointer_down(pos2(10.0, 50.0));
    board.pointer_move(pos2(30.0, 50.0));
    assert!(board.snapshot().is_blank());

    board.pointer_move(pos2(50.0, 50.0));
    assert_eq!(board.mode(), InputMode::Drawing);
    assert_eq!(board.active_stroke().unwrap().geometry().segments().len(), 1);

    let image = board.snapshot().to_image();
    assert_eq!(image.get_pixel(20, 50).0, [255, 0, 0, 255]);
    // Nothing is committed until the pointer is released
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_tap_commits_an_empty_path() {
    let mut board = unscaled_board();
    draw(&mut board, &[pos2(10.0, 10.0), pos2(12.0, 10.0)]);

    assert_eq!(board.paths().len(), 1);
    assert!(board.paths()[0].geometry().is_empty());
    assert_eq!(board.history().len(), 2);
    assert_eq!(board.history().current(), &board.history().entries()[0]);
}

#[test]
fn test_strokes_join_the_active_group() {
    let mut board = unscaled_board();
    let first = board.active_group().unwrap();
    draw(&mut board, &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(30.0, 10.0)]);

    let second = board.create_group(Some("outline"));
    assert_eq!(board.active_group(), Some(second));
    draw(&mut board, &[pos2(10.0, 60.0), pos2(20.0, 60.0), pos2(30.0, 60.0)]);

    assert_eq!(board.paths()[0].group(), Some(first));
    assert_eq!(board.paths()[1].group(), Some(second));
    assert_eq!(board.group(second).unwrap().label(), "outline");
}

#[test]
fn test_renaming_a_group_keeps_path_membership() {
    let mut board = unscaled_board();
    let group = board.active_group().unwrap();
    draw(&mut board, &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(30.0, 10.0)]);

    board.rename_group(group, "sky").unwrap();
    assert_eq!(board.group(group).unwrap().label(), "sky");
    assert_eq!(board.paths()[0].group(), Some(group));
}

#[test]
fn test_pointer_up_without_stroke_is_ignored() {
    let mut board = unscaled_board();
    board.pointer_up();
    board.pointer_move(pos2(40.0, 40.0));
    assert!(board.paths().is_empty());
    assert_eq!(board.history().len(), 1);
}
