use eframe_sketch_board::{Board, BoardConfig, BoardError, InputEvent, InputMode};
use egui::pos2;

fn board_with(config: BoardConfig) -> Board {
    let config = BoardConfig {
        magnification: 1.0,
        ..config
    };
    Board::new(100, 100, config).unwrap()
}

// Two horizontal strokes: y = 20 and y = 70, x from 10 to 75
fn board_with_two_strokes(config: BoardConfig) -> Board {
    let mut board = board_with(config);
    for y in [20.0, 70.0] {
        board.pointer_down(pos2(10.0, y));
        for x in [30.0, 50.0, 70.0, 80.0] {
            board.pointer_move(pos2(x, y));
        }
        board.pointer_up();
    }
    board.set_mode(InputMode::Select).unwrap();
    board
}

fn touched(board: &Board) -> Vec<bool> {
    board.paths().iter().map(|p| p.is_touched()).collect()
}

#[test]
fn test_click_toggles_only_the_hit_path() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    assert_eq!(board.history().index(), 2);

    board.handle_event(InputEvent::Click { position: pos2(40.0, 22.0) });
    assert_eq!(touched(&board), [true, false]);
    assert_eq!(board.history().index(), 3);

    let image = board.snapshot().to_image();
    assert_eq!(image.get_pixel(40, 20).0, [0, 128, 0, 255]);
    assert_eq!(image.get_pixel(40, 70).0, [255, 0, 0, 255]);

    board.click(pos2(40.0, 21.0));
    assert_eq!(touched(&board), [false, false]);
    assert_eq!(board.history().index(), 4);
}

#[test]
fn test_click_outside_still_commits() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    // Full redraw first so the pixels compare against the same rendering path
    board.redraw(|_, _| false);
    let before = board.snapshot();

    board.click(pos2(40.0, 45.0));
    assert_eq!(touched(&board), [false, false]);
    assert_eq!(board.snapshot(), before);
    assert_eq!(board.history().len(), 4);
    assert_eq!(board.history().index(), 3);
    assert_eq!(board.history().current(), &before);
}

#[test]
fn test_click_in_draw_mode_is_ignored() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    board.set_mode(InputMode::Draw).unwrap();
    board.click(pos2(40.0, 20.0));
    assert_eq!(touched(&board), [false, false]);
}

#[test]
fn test_hover_does_not_toggle_by_default() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    board.pointer_move(pos2(40.0, 20.0));
    assert_eq!(touched(&board), [false, false]);
}

#[test]
fn test_hover_toggles_when_enabled() {
    let config = BoardConfig {
        toggle_on_hover: true,
        ..Default::default()
    };
    let mut board = board_with_two_strokes(config);
    board.pointer_move(pos2(40.0, 70.0));
    assert_eq!(touched(&board), [false, true]);
    // Hover previews are not recorded
    assert_eq!(board.history().len(), 3);

    board.pointer_move(pos2(40.0, 45.0));
    assert_eq!(touched(&board), [false, true]);
}

#[test]
fn test_select_group_toggles_its_paths() {
    let mut board = board_with(BoardConfig::default());
    let first = board.active_group().unwrap();
    board.pointer_down(pos2(10.0, 20.0));
    board.pointer_move(pos2(30.0, 20.0));
    board.pointer_move(pos2(50.0, 20.0));
    board.pointer_up();

    let second = board.create_group(None);
    board.pointer_down(pos2(10.0, 70.0));
    board.pointer_move(pos2(30.0, 70.0));
    board.pointer_move(pos2(50.0, 70.0));
    board.pointer_up();

    board.select_group(first).unwrap();
    assert_eq!(board.active_group(), Some(first));
    assert_eq!(touched(&board), [true, false]);

    board.select_group(second).unwrap();
    assert_eq!(touched(&board), [true, true]);

    board.select_group(first).unwrap();
    assert_eq!(touched(&board), [false, true]);
}

#[test]
fn test_select_unknown_group_fails() {
    let mut board = board_with(BoardConfig::default());
    let mut other = board_with(BoardConfig::default());
    other.create_group(None);
    let foreign = other.create_group(None);

    assert!(matches!(board.select_group(foreign), Err(BoardError::UnknownGroup(_))));
    assert!(matches!(board.rename_group(foreign, "x"), Err(BoardError::UnknownGroup(_))));
}

#[test]
fn test_redraw_without_toggles_reproduces_raster() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    board.click(pos2(40.0, 20.0));
    let before = board.snapshot();

    assert_eq!(board.redraw(|_, _| false), 0);
    let once = board.snapshot();
    assert_eq!(board.redraw(|_, _| false), 0);
    assert_eq!(board.snapshot(), once);
    assert_eq!(once, before);
}

#[test]
fn test_keyboard_undo_redo_in_any_mode() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    let after_both = board.snapshot();

    let undo = InputEvent::from_key_code(true, 90).unwrap();
    let redo = InputEvent::from_key_code(true, 89).unwrap();

    board.handle_event(undo.clone());
    assert_eq!(board.history().index(), 1);
    board.handle_event(undo.clone());
    board.handle_event(undo.clone());
    assert_eq!(board.history().index(), 0);
    assert!(board.snapshot().is_blank());

    board.handle_event(redo.clone());
    board.handle_event(redo.clone());
    board.handle_event(redo);
    assert_eq!(board.history().index(), 2);
    assert_eq!(board.snapshot(), after_both);
    assert_eq!(board.mode(), InputMode::Select);
}

#[test]
fn test_new_stroke_after_undo_truncates_redo_branch() {
    let mut board = board_with_two_strokes(BoardConfig::default());
    board.click(pos2(40.0, 20.0));
    assert_eq!(board.history().len(), 4);

    board.undo();
    board.undo();
    assert_eq!(board.history().index(), 1);

    board.set_mode(InputMode::Draw).unwrap();
    board.pointer_down(pos2(10.0, 90.0));
    board.pointer_move(pos2(30.0, 90.0));
    board.pointer_move(pos2(50.0, 90.0));
    board.pointer_up();

    assert_eq!(board.history().len(), 3);
    assert_eq!(board.history().index(), 2);
    assert!(!board.history().can_redo());
}
