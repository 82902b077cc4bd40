pub mod compose_ops;
pub mod config_ops;
pub mod decode_ops;
