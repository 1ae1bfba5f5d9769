pub mod bindings;
pub mod layout;
pub mod probe_loader;
pub mod query;
