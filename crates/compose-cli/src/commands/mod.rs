pub mod lookup_ops;
pub mod replay_ops;
pub mod table_ops;
