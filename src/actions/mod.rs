pub(crate) mod confirm_action;
pub(crate) mod delete_file;
pub(crate) mod list_directory;
pub(crate) mod patch_file;
pub(crate) mod rename_file;
