pub(crate) mod divider;
pub(crate) mod item;
pub(crate) mod pane;
pub(crate) mod sash;
pub(crate) mod settings;
