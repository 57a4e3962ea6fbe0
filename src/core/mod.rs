pub mod ast;
pub mod text;
