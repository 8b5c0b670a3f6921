//! Turning the pages of a decoded configuration into image requests.

use crate::config::read_pages;
use crate::error::Result;
use crate::filename::generate_filename;
use crate::fragment::TileFragment;
use crate::page::{PageRequest, PageSpec};
use publus_pack::{DecodedPack, Keys};

/// The keys of a book together with the location its page images are
/// served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    keys: Keys,
    image_url_prefix: String,
}

impl Session {
    /// Create a new session. `image_url_prefix` is prepended verbatim to
    /// every generated filename and should end with a slash.
    pub fn new(keys: Keys, image_url_prefix: impl Into<String>) -> Self {
        Self {
            keys,
            image_url_prefix: image_url_prefix.into(),
        }
    }

    /// Create a session from a decoded configuration pack.
    pub fn from_pack(pack: &DecodedPack, image_url_prefix: impl Into<String>) -> Self {
        Self::new(pack.keys, image_url_prefix)
    }

    /// The keys of the book.
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Build the request for a single page.
    ///
    /// Scrambled pages carry their unscrambling parameters in the URL
    /// fragment.
    pub fn page_request(&self, page: &PageSpec) -> Result<PageRequest> {
        let mut url = format!(
            "{}{}",
            self.image_url_prefix,
            generate_filename(&page.page_id, &self.keys)
        );

        if page.scrambled {
            let fragment = TileFragment {
                page_id: page.page_id.clone(),
                attributes: page.attributes,
                keys: self.keys,
            };

            url.push('#');
            url.push_str(&fragment.encode()?);
        }

        Ok(PageRequest {
            index: page.index,
            url,
        })
    }

    /// Build the requests for a list of pages, in order.
    pub fn page_requests(&self, pages: &[PageSpec]) -> Result<Vec<PageRequest>> {
        pages.iter().map(|page| self.page_request(page)).collect()
    }
}

/// Read the pages of a decoded configuration pack and build their requests.
pub fn generate_pages(pack: &DecodedPack, image_url_prefix: &str) -> Result<Vec<PageRequest>> {
    let pages = read_pages(&pack.json)?;
    ldebug!("generating requests for {} pages", pages.len());

    Session::from_pack(pack, image_url_prefix).page_requests(&pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use publus_tiles::PageAttributes;

    fn page(scrambled: bool) -> PageSpec {
        PageSpec {
            index: 3,
            page_id: "0001".to_string(),
            attributes: PageAttributes {
                number: 4,
                ns: 1,
                ps: 2,
                rs: 3,
                block_width: 32,
                block_height: 32,
                content_width: 0,
                content_height: 0,
            },
            scrambled,
        }
    }

    #[test]
    fn unscrambled_page_has_no_fragment() {
        let session = Session::new(Keys::default(), "https://host/book/");
        let request = session.page_request(&page(false)).unwrap();

        assert_eq!(request.index, 3);
        assert_eq!(
            request.url,
            format!("https://host/book/{}", generate_filename("0001", session.keys()))
        );
    }

    #[test]
    fn scrambled_page_carries_fragment() {
        let session = Session::new(Keys::default(), "https://host/book/");
        let request = session.page_request(&page(true)).unwrap();

        let (base, token) = request.url.split_once('#').unwrap();
        assert!(base.starts_with("https://host/book/0001/10"));
        assert!(base.ends_with(".jpeg"));

        let fragment = TileFragment::decode(token).unwrap();
        assert_eq!(fragment.page_id, "0001");
        assert_eq!(fragment.attributes, page(true).attributes);
        assert_eq!(fragment.keys, Keys::default());
    }
}
