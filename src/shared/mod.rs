pub mod api;
pub mod patch_field;
pub mod position;
pub mod slug;
pub mod text;
