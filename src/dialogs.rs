use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::file_handler::IMAGE_FILTERS;

/// Answer to the "save before exit?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Save,
    Discard,
    Cancel,
}

/// Blocking dialogs used by the coordinator.
pub trait Dialogs {
    fn pick_image_to_open(&self) -> Option<PathBuf>;
    fn pick_save_destination(&self) -> Option<PathBuf>;
    fn show_error(&self, title: &str, message: &str);
    fn show_info(&self, title: &str, message: &str);
    fn confirm_exit(&self) -> ExitChoice;
}

/// Native dialogs through `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_image_to_open(&self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().set_title("Open Image");
        for (name, extensions) in IMAGE_FILTERS {
            dialog = dialog.add_filter(name, extensions);
        }
        dialog.add_filter("All files", &["*"]).pick_file()
    }

    fn pick_save_destination(&self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Save Image")
            .set_file_name("untitled.png");
        for (name, extensions) in IMAGE_FILTERS {
            dialog = dialog.add_filter(name, extensions);
        }
        dialog.save_file()
    }

    fn show_error(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_info(&self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm_exit(&self) -> ExitChoice {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Save Image")
            .set_description("Do you want to save the image before exiting?")
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match answer {
            MessageDialogResult::Yes => ExitChoice::Save,
            MessageDialogResult::No => ExitChoice::Discard,
            _ => ExitChoice::Cancel,
        }
    }
}
