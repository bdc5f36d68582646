pub mod collapsible_group;

pub use collapsible_group::CollapsibleGroup;
