pub mod product;

pub use self::product::{CategoryQuery, Product};
