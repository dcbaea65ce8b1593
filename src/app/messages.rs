/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main
/// handles them one at a time on the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FilePrint,
    FileQuit,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,
}
