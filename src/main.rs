use fltk::{app, enums::Event, prelude::*};

use jotter::app::{AppState, Message};
use jotter::ui::{main_window, menu};

fn main() {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = main_window::build_main_window();
    menu::build_menu(&mut widgets.menu, &sender);

    // Route the window manager's close button through the regular
    // quit path; Escape keeps the window open.
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::FileQuit);
        }
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FilePrint => state.file_print(),
                Message::FileQuit => app.quit(),
                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::EditCut => state.edit_cut(),
                Message::EditCopy => state.edit_copy(),
                Message::EditPaste => state.edit_paste(),
            }
        }
    }
}
