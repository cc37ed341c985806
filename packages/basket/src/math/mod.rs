pub mod percentage;
pub mod safe_math;
