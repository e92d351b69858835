pub mod career;
pub mod vault;
