/// reading mechanism files and writing output documents
pub mod load_from_file;
