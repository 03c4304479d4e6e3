pub mod day_2;
pub mod day_3;
pub mod day_4;
