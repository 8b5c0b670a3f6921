use publus_pack::Keys;
use publus_tiles::PageAttributes;

pub fn keys() -> Keys {
    let mut keys = Keys::default();

    for i in 0..32 {
        keys.k1[i] = (i * 7 + 3) as u8;
        keys.k2[i] = (i * 13 + 101) as u8;
        keys.k3[i] = (255 - i * 5) as u8;
    }

    keys
}

pub fn attributes(block_width: u32, block_height: u32) -> PageAttributes {
    PageAttributes {
        number: 3,
        ns: 123_456_789,
        ps: 987_654_321,
        rs: 555,
        block_width,
        block_height,
        content_width: 0,
        content_height: 0,
    }
}
