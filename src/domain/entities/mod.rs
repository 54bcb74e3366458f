mod click;
mod tag;
mod url;

pub use click::{Click, NewClick};
pub use tag::Tag;
pub use url::{NewUrl, Url, UrlWithClicks};
