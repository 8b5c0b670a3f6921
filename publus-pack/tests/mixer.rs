use publus_pack::KEY_LEN;
use publus_pack::keystream::KeySchedule;
use publus_pack::mixer::mix;

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

fn keys() -> ([u8; KEY_LEN], [u8; KEY_LEN], [u8; KEY_LEN]) {
    let mut k1 = [0; KEY_LEN];
    let mut k2 = [0; KEY_LEN];
    let mut k3 = [0; KEY_LEN];

    for i in 0..KEY_LEN {
        k1[i] = (i * 7 + 3) as u8;
        k2[i] = (i * 13 + 101) as u8;
        k3[i] = (255 - i * 5) as u8;
    }

    (k1, k2, k3)
}

fn payload() -> Vec<u8> {
    (0..40).map(|i| (i * 29 + 11) as u8).collect()
}

#[test]
fn mix_payload() {
    let (k1, k2, k3) = keys();
    let mut block = payload();
    mix(&mut block, &[&k1, &k2, &k3]);

    assert_eq!(
        hex(&block),
        "4368a59e113ad7fc73448da0291ce3d8557eb1860f22cbe46d5099b63f0afbcc81aa2734ddf0794e"
    );
}

#[test]
fn mix_keys() {
    let (k1, k2, k3) = keys();

    let mut out = k3;
    mix(&mut out, &[&k1, &k2]);
    assert_eq!(
        hex(&out),
        "70f5f20f09dc3b3eb87d7afff96cebee189d9a5f598c4b4ec82d2aafa934b3b6"
    );

    let mut out = k2;
    mix(&mut out, &[&k1, &k3]);
    assert_eq!(
        hex(&out),
        "b605201c39cbecd6f042659bbc8eab10b5c7e2defb48ee557340e6597f8c6993"
    );

    let mut out = k1;
    mix(&mut out, &[&k2, &k3]);
    assert_eq!(
        hex(&out),
        "bd724be2d33a07aa9b5677c6e7103180a16859f0c92415b8854c6dd4f502239c"
    );
}

#[test]
fn mix_without_shift() {
    let zero = [0; KEY_LEN];
    let mut k2 = [0; KEY_LEN];
    k2[0] = 3;

    let mut block = payload();
    mix(&mut block, &[&zero, &k2, &zero]);

    assert_eq!(
        hex(&block),
        "dc895128e0976e36fda17804cfbe4a12d98c542fe79a6239f1a47f0bc3b24d153cf49d6523ea805b"
    );
}

#[test]
fn schedule_from_two_keys() {
    let (k1, k2, _) = keys();
    let schedule = KeySchedule::new(&[&k1, &k2]);

    assert_eq!(
        hex(&schedule.table()[..16]),
        "034f21403b8768f53219ca3594a854e0"
    );
}
