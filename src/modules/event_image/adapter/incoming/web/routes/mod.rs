mod event_images;

pub use event_images::*;
