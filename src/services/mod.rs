// Services module for parsing and resolution logic
pub mod loose;
pub mod parser;
pub mod resolver;
