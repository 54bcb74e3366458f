//! HTTP request handlers.

mod health;
mod redirect;
mod shorten;
mod tags;
mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use tags::tag_list_handler;
pub use urls::{url_clicks_handler, url_delete_handler, url_detail_handler, url_list_handler};
