pub mod means;
pub mod resample;
pub mod reshape;
pub mod weekends;
