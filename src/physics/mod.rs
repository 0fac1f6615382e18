pub mod kinematics;
pub mod units;
