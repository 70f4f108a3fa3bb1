pub mod analyse;
pub mod ping;
