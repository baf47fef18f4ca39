mod breadcrumb;
mod edit_link;
mod index;

pub use breadcrumb::{breadcrumb_trail, display_case};
pub use edit_link::edit_url;
pub use index::{Page, SiteIndex};
