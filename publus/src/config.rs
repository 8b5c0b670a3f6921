//! Reading the page list out of a decoded configuration document.

use crate::error::{ConfigError, Result, bail};
use crate::page::PageSpec;
use publus_tiles::PageAttributes;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The block size assumed for pages that declare none.
pub const DEFAULT_BLOCK_SIZE: u32 = 32;

#[derive(Debug, Deserialize)]
struct Configuration {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    file: String,
    #[serde(default)]
    index: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PageConfig {
    file_link_info: FileLinkInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FileLinkInfo {
    page_link_info_list: Vec<PageLinkInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PageLinkInfo {
    page: PageDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PageDetails {
    no: i32,
    #[serde(rename = "NS")]
    ns: i64,
    #[serde(rename = "PS")]
    ps: i64,
    #[serde(rename = "RS")]
    rs: i64,
    #[serde(default)]
    block_width: u32,
    #[serde(default)]
    block_height: u32,
    size: Size,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Size {
    width: u32,
    height: u32,
}

/// Read the pages of a decoded configuration document, in listing order.
///
/// The document holds a `configuration.contents` list of content files, and
/// one entry per content file describing its page. A page with a zero block
/// dimension is not scrambled.
pub fn read_pages(json: &str) -> Result<Vec<PageSpec>> {
    let root: Map<String, Value> =
        serde_json::from_str(json).map_err(|_| ConfigError::InvalidJson)?;

    let Some(configuration) = root.get("configuration") else {
        bail!(ConfigError::MissingConfiguration);
    };

    let configuration =
        Configuration::deserialize(configuration).map_err(|_| ConfigError::InvalidJson)?;

    configuration
        .contents
        .into_iter()
        .enumerate()
        .map(|(position, content)| read_page(&root, position, content))
        .collect()
}

fn read_page(root: &Map<String, Value>, position: usize, content: Content) -> Result<PageSpec> {
    let Some(entry) = root.get(&content.file) else {
        bail!(ConfigError::MissingPage);
    };

    let config = PageConfig::deserialize(entry).map_err(|_| ConfigError::InvalidJson)?;

    let Some(link) = config.file_link_info.page_link_info_list.into_iter().next() else {
        bail!(ConfigError::EmptyPageList);
    };

    let page = link.page;
    let or_default = |v: u32| if v == 0 { DEFAULT_BLOCK_SIZE } else { v };

    Ok(PageSpec {
        index: content.index.unwrap_or(position),
        scrambled: page.block_width > 0 && page.block_height > 0,
        attributes: PageAttributes {
            number: page.no,
            ns: page.ns,
            ps: page.ps,
            rs: page.rs,
            block_width: or_default(page.block_width),
            block_height: or_default(page.block_height),
            content_width: page.size.width,
            content_height: page.size.height,
        },
        page_id: content.file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const DOCUMENT: &str = r#"{
        "configuration": {
            "contents": [
                { "file": "item/xhtml/p-001.xhtml", "index": 0 },
                { "file": "item/xhtml/p-002.xhtml" }
            ]
        },
        "item/xhtml/p-001.xhtml": {
            "FileLinkInfo": {
                "PageLinkInfoList": [{
                    "Page": {
                        "No": 1, "NS": 123, "PS": -456, "RS": 789,
                        "BlockWidth": 64, "BlockHeight": 48,
                        "Size": { "Width": 960, "Height": 1380 }
                    }
                }]
            }
        },
        "item/xhtml/p-002.xhtml": {
            "FileLinkInfo": {
                "PageLinkInfoList": [{
                    "Page": {
                        "No": 2, "NS": 1, "PS": 2, "RS": 3,
                        "BlockWidth": 0, "BlockHeight": 0,
                        "Size": { "Width": 960, "Height": 1380 }
                    }
                }]
            }
        }
    }"#;

    #[test]
    fn reads_pages() {
        let pages = read_pages(DOCUMENT).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_id, "item/xhtml/p-001.xhtml");
        assert_eq!(pages[0].index, 0);
        assert!(pages[0].scrambled);
        assert_eq!(
            pages[0].attributes,
            PageAttributes {
                number: 1,
                ns: 123,
                ps: -456,
                rs: 789,
                block_width: 64,
                block_height: 48,
                content_width: 960,
                content_height: 1380,
            }
        );
    }

    #[test]
    fn unscrambled_page_gets_default_blocks() {
        let pages = read_pages(DOCUMENT).unwrap();

        assert_eq!(pages[1].index, 1);
        assert!(!pages[1].scrambled);
        assert_eq!(pages[1].attributes.block_width, DEFAULT_BLOCK_SIZE);
        assert_eq!(pages[1].attributes.block_height, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn missing_entries() {
        assert!(matches!(
            read_pages("[]"),
            Err(Error::Config(ConfigError::InvalidJson))
        ));
        assert!(matches!(
            read_pages(r#"{"note": 1}"#),
            Err(Error::Config(ConfigError::MissingConfiguration))
        ));
        assert!(matches!(
            read_pages(r#"{"configuration": {"contents": [{"file": "a"}]}}"#),
            Err(Error::Config(ConfigError::MissingPage))
        ));
        assert!(matches!(
            read_pages(
                r#"{"configuration": {"contents": [{"file": "a"}]},
                    "a": {"FileLinkInfo": {"PageLinkInfoList": []}}}"#
            ),
            Err(Error::Config(ConfigError::EmptyPageList))
        ));
    }
}
