mod click_repository;
mod tag_repository;
mod url_repository;

pub use click_repository::ClickRepository;
pub use tag_repository::TagRepository;
pub use url_repository::{UrlListFilter, UrlRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
