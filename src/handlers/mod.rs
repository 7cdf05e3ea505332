pub mod bien;
pub mod biens;
