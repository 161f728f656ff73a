pub mod score;
pub mod v2;
pub mod v3;
pub mod v4;
