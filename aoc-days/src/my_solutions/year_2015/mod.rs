pub mod day_4;
pub mod day_25;
