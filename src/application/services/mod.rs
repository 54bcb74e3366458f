mod click_service;
mod tag_service;
mod url_service;

pub use click_service::ClickService;
pub use tag_service::{TagService, parse_tag_titles};
pub use url_service::{CreateUrl, UrlService};
