use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, pos2};
use raster_paint::coordinator::Coordinator;
use raster_paint::dialogs::{Dialogs, ExitChoice};
use raster_paint::element::ElementType;
use raster_paint::error::FileError;
use raster_paint::tools::ToolKind;

/// Dialogs with canned answers that record every message shown.
struct ScriptedDialogs {
    open_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    exit_choice: ExitChoice,
    errors: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
    exit_prompts: Cell<usize>,
}

impl ScriptedDialogs {
    fn new() -> Self {
        Self {
            open_path: None,
            save_path: None,
            exit_choice: ExitChoice::Cancel,
            errors: RefCell::new(Vec::new()),
            infos: RefCell::new(Vec::new()),
            exit_prompts: Cell::new(0),
        }
    }

    fn saving_to(path: &Path) -> Self {
        Self {
            save_path: Some(path.to_path_buf()),
            ..Self::new()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_image_to_open(&self) -> Option<PathBuf> {
        self.open_path.clone()
    }

    fn pick_save_destination(&self) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn show_error(&self, _title: &str, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }

    fn show_info(&self, _title: &str, message: &str) {
        self.infos.borrow_mut().push(message.to_owned());
    }

    fn confirm_exit(&self) -> ExitChoice {
        self.exit_prompts.set(self.exit_prompts.get() + 1);
        self.exit_choice
    }
}

fn draw_line(coordinator: &mut Coordinator) {
    coordinator.select_tool(ToolKind::Line);
    coordinator.pointer_down(pos2(10.0, 10.0));
    coordinator.pointer_move(pos2(60.0, 60.0));
    coordinator.pointer_up(pos2(60.0, 60.0));
}

fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]))
        .save(path)
        .unwrap();
}

#[test]
fn saving_to_an_unsupported_extension_shows_an_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bmp");
    let dialogs = ScriptedDialogs::saving_to(&path);
    let mut coordinator = Coordinator::default();

    coordinator.save_image(&dialogs);

    assert_eq!(dialogs.errors.borrow().as_slice(), ["Unsupported file format."]);
    assert!(!coordinator.take_capture_request());
    assert!(!coordinator.is_save_pending());
    assert!(!path.exists());
}

#[test]
fn saving_png_writes_the_captured_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let dialogs = ScriptedDialogs::saving_to(&path);
    let mut coordinator = Coordinator::default();

    coordinator.save_image(&dialogs);
    assert!(coordinator.take_capture_request());
    assert!(!coordinator.take_capture_request());
    assert!(coordinator.is_save_pending());

    let capture = ColorImage::new([40, 30], Color32::RED);
    coordinator.finish_save(&capture, &dialogs);

    assert!(!coordinator.is_save_pending());
    assert_eq!(dialogs.infos.borrow().as_slice(), ["Image saved successfully."]);
    assert!(dialogs.errors.borrow().is_empty());
    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (40, 30));
    assert_eq!(saved.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn cancelled_save_dialog_does_nothing() {
    let dialogs = ScriptedDialogs::new();
    let mut coordinator = Coordinator::default();

    coordinator.save_image(&dialogs);

    assert!(!coordinator.take_capture_request());
    assert!(dialogs.errors.borrow().is_empty());
    assert!(!coordinator.should_exit());
}

#[test]
fn empty_capture_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let dialogs = ScriptedDialogs::saving_to(&path);
    let mut coordinator = Coordinator::default();

    coordinator.save_image(&dialogs);
    coordinator.finish_save(&ColorImage::new([0, 0], Color32::WHITE), &dialogs);

    assert_eq!(dialogs.errors.borrow().len(), 1);
    assert!(!path.exists());
}

#[test]
fn opened_image_replaces_the_canvas_centered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    write_png(&path, 100, 50);
    let mut coordinator = Coordinator::default();
    draw_line(&mut coordinator);

    let id = coordinator.open_image_from(&path).unwrap();

    let canvas = coordinator.canvas();
    assert_eq!(canvas.len(), 1);
    match &canvas.get(id).unwrap().element {
        ElementType::Bitmap(bitmap) => {
            assert_eq!(bitmap.position(), pos2(575.0, 275.0));
            assert_eq!(bitmap.image().size, [100, 50]);
        }
        _ => panic!("expected a bitmap"),
    }
}

#[test]
fn odd_sized_image_position_rounds_down() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odd.png");
    write_png(&path, 101, 51);
    let mut coordinator = Coordinator::default();

    let id = coordinator.open_image_from(&path).unwrap();

    match &coordinator.canvas().get(id).unwrap().element {
        ElementType::Bitmap(bitmap) => assert_eq!(bitmap.position(), pos2(574.0, 274.0)),
        _ => panic!("expected a bitmap"),
    }
}

#[test]
fn failed_open_keeps_the_drawing_and_shows_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("broken.png");
    std::fs::write(&garbage, b"not an image").unwrap();
    let mut coordinator = Coordinator::default();
    draw_line(&mut coordinator);

    assert!(matches!(
        coordinator.open_image_from(&garbage),
        Err(FileError::Decode { .. })
    ));
    assert!(matches!(
        coordinator.open_image_from(&dir.path().join("missing.png")),
        Err(FileError::Read { .. })
    ));

    let dialogs = ScriptedDialogs {
        open_path: Some(garbage),
        ..ScriptedDialogs::new()
    };
    coordinator.open_image(&dialogs);

    assert_eq!(coordinator.canvas().len(), 1);
    assert_eq!(dialogs.errors.borrow().len(), 1);
}

#[test]
fn clear_screen_removes_drawing_and_anchor() {
    let mut coordinator = Coordinator::default();
    draw_line(&mut coordinator);
    assert!(coordinator.state().anchor().is_some());

    coordinator.clear_screen();

    assert!(coordinator.canvas().is_empty());
    assert_eq!(coordinator.state().anchor(), None);
}

#[test]
fn cancelling_the_exit_prompt_keeps_running() {
    let mut coordinator = Coordinator::default();
    let dialogs = ScriptedDialogs::new();

    coordinator.exit_application(&dialogs);

    assert_eq!(dialogs.exit_prompts.get(), 1);
    assert!(!coordinator.should_exit());
}

#[test]
fn discarding_on_exit_closes_without_saving() {
    let mut coordinator = Coordinator::default();
    let dialogs = ScriptedDialogs {
        exit_choice: ExitChoice::Discard,
        ..ScriptedDialogs::new()
    };

    coordinator.exit_application(&dialogs);

    assert!(coordinator.should_exit());
    assert!(!coordinator.take_capture_request());
}

#[test]
fn saving_on_exit_closes_after_the_capture_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("final.png");
    let mut coordinator = Coordinator::default();
    let dialogs = ScriptedDialogs {
        exit_choice: ExitChoice::Save,
        ..ScriptedDialogs::saving_to(&path)
    };

    coordinator.exit_application(&dialogs);
    assert!(!coordinator.should_exit());
    assert!(coordinator.take_capture_request());

    coordinator.finish_save(&ColorImage::new([8, 8], Color32::WHITE), &dialogs);

    assert!(path.exists());
    assert!(coordinator.should_exit());
}

#[test]
fn saving_on_exit_with_a_cancelled_picker_still_exits() {
    let mut coordinator = Coordinator::default();
    let dialogs = ScriptedDialogs {
        exit_choice: ExitChoice::Save,
        ..ScriptedDialogs::new()
    };

    coordinator.exit_application(&dialogs);

    assert!(coordinator.should_exit());
}
