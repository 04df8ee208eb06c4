pub mod input;
pub mod notices;
pub mod results;
