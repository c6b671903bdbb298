pub mod poly;
mod rabin;
