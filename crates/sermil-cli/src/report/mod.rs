pub mod input;
pub mod util;
