mod own_entries;
mod to_boolean;

pub use own_entries::OwnEntries;
pub use to_boolean::ToBoolean;
