pub mod check;
pub mod parse;
pub mod source_loader;
