use publus_tiles::PageAttributes;

/// A page as listed by the decoded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    /// The position of the page in the book.
    pub index: usize,
    /// The content file the page is stored as, also used as its identifier.
    pub page_id: String,
    /// The scrambling parameters.
    pub attributes: PageAttributes,
    /// Whether the page image is scrambled. Unscrambled pages are requested
    /// without a fragment.
    pub scrambled: bool,
}

/// A page ready to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// The position of the page in the book.
    pub index: usize,
    /// The image URL, including the fragment for scrambled pages.
    pub url: String,
}
