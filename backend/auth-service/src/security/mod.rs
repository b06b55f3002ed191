/// Security primitives
pub mod password;
