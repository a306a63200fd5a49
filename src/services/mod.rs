pub mod seed;

pub use self::seed::{ImportReport, SeedImporter};
