pub mod serve;
pub mod traffic;
