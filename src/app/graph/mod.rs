mod interaction;
mod layout;
mod view;

pub(super) use layout::group_layout;
