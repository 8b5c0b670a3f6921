mod common;

use common::{attributes, keys};
use publus_tiles::{Error, Move, PageAttributes, Raster, plan_moves, unscramble};

const PAGE: &str = "item/xhtml/p-010.xhtml";

fn original(width: u32, height: u32, channels: u8) -> Raster {
    let data = (0..width * height * u32::from(channels))
        .map(|i| (i * 7 % 251) as u8)
        .collect();

    Raster::new(width, height, channels, data).unwrap()
}

fn scramble(page: &Raster, attrs: &PageAttributes) -> Raster {
    let moves = plan_moves(page.width(), page.height(), PAGE, attrs, &keys()).unwrap();
    let mut out = Raster::blank(page.width(), page.height(), page.channels()).unwrap();

    for mv in &moves {
        let inverse = Move {
            src_x: mv.dest_x,
            src_y: mv.dest_y,
            dest_x: mv.src_x,
            dest_y: mv.src_y,
            ..*mv
        };
        out.blit(page, &inverse).unwrap();
    }

    out
}

#[test]
fn restores_scrambled_page() {
    for (width, height, block) in [(37, 35, 8), (64, 48, 16), (50, 7, 4)] {
        let page = original(width, height, 3);
        let attrs = attributes(block, block);
        let scrambled = scramble(&page, &attrs);

        if width == 37 {
            assert_ne!(scrambled, page);
        }

        assert_eq!(unscramble(scrambled, PAGE, &attrs, &keys()).unwrap(), page);
    }
}

#[test]
fn crops_to_content_size() {
    let page = original(40, 40, 4);
    let attrs = PageAttributes {
        content_width: 33,
        content_height: 38,
        ..attributes(8, 8)
    };
    let out = unscramble(scramble(&page, &attrs), PAGE, &attrs, &keys()).unwrap();

    assert_eq!(out, page.crop(33, 38));
}

#[test]
fn oversized_content_is_clamped() {
    let page = original(24, 24, 1);
    let attrs = PageAttributes {
        content_width: 30,
        content_height: 20,
        ..attributes(8, 8)
    };
    let out = unscramble(scramble(&page, &attrs), PAGE, &attrs, &keys()).unwrap();

    assert_eq!((out.width(), out.height()), (24, 20));
}

#[test]
fn zero_content_size_keeps_dimensions() {
    let page = original(24, 16, 1);
    let attrs = PageAttributes {
        content_width: 0,
        content_height: 12,
        ..attributes(8, 8)
    };
    let out = unscramble(scramble(&page, &attrs), PAGE, &attrs, &keys()).unwrap();

    assert_eq!(out, page);
}

#[test]
fn matching_content_size_is_a_no_op() {
    let page = original(24, 16, 2);
    let attrs = PageAttributes {
        content_width: 24,
        content_height: 16,
        ..attributes(8, 8)
    };
    let out = unscramble(scramble(&page, &attrs), PAGE, &attrs, &keys()).unwrap();

    assert_eq!(out, page);
}

#[test]
fn rejects_zero_block_size() {
    let page = original(8, 8, 1);

    assert_eq!(
        unscramble(page, PAGE, &attributes(0, 8), &keys()),
        Err(Error::InvalidBlockSize)
    );
}

#[cfg(feature = "image")]
#[test]
fn unscrambles_through_image_buffers() {
    let page = original(30, 20, 3);
    let attrs = attributes(6, 6);
    let image = scramble(&page, &attrs).into_image().unwrap();

    let out = unscramble(Raster::from_image(image), PAGE, &attrs, &keys()).unwrap();

    assert_eq!(out.into_image().unwrap().to_rgb8().into_raw(), page.into_data());
}
