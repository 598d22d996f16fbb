pub mod entities;
pub mod genres;
pub mod unit_of_work;

pub use entities::*;
pub use unit_of_work::UnitOfWork;
