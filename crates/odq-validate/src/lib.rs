mod countries;
mod format;
mod index;
mod summer;

pub use countries::{CountrySplit, classify_country, split_countries};
pub use format::is_valid_code_format;
pub use index::ReferenceIndex;
pub use summer::{SummerSplit, classify_medal, split_summer};
