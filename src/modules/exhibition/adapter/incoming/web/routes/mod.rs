mod create_exhibition;
mod delete_exhibition;
mod get_exhibition_images;
mod get_exhibitions;
mod get_public_exhibitions;
mod get_public_single_exhibition;
mod get_single_exhibition;
mod replace_exhibition_images;
mod update_exhibition;

pub use create_exhibition::*;
pub use delete_exhibition::*;
pub use get_exhibition_images::*;
pub use get_exhibitions::*;
pub use get_public_exhibitions::*;
pub use get_public_single_exhibition::*;
pub use get_single_exhibition::*;
pub use replace_exhibition_images::*;
pub use update_exhibition::*;
