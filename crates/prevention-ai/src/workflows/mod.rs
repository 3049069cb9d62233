pub mod advisory;
pub mod duerp;
pub mod roster;
