/// Crate-wide result; typed errors live beside the code raising them and can be recovered with
/// `downcast_ref`
pub type Result<T = ()> = anyhow::Result<T>;
