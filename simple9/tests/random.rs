use rand::prelude::*;
use simple9::{decode, decode_fast, encode, Decoder, MAX_VALUE};

const NITEMS: [usize; 4] = [32, 128, 1024, 65_536];
const MAX_VALUES: [u32; 8] = [4, 8, 32, 128, 512, 16_384, 262_144, MAX_VALUE + 1];

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn list<R: Rng>(rng: &mut R, nitems: usize, bound: u32) -> Vec<u32> {
    (0..nitems).map(|_| rng.gen_range(0..bound)).collect()
}

fn check(values: &[u32], decoder: Decoder) {
    let mut file = Vec::new();
    let written = encode(values, &mut file).unwrap();
    assert_eq!(written, file.len());

    let (data, read) = decoder.decode(&file[..]).unwrap();
    assert_eq!(read, written);
    assert_eq!(data.len(), values.len());
    for (i, (d, v)) in data.iter().zip(values).enumerate() {
        assert_eq!(d, v, "data[{}] = {}, should equal {}", i, d, v);
    }
}

#[test]
fn random_lists() {
    init();
    let mut rng = StdRng::seed_from_u64(0x5139);
    for &n in NITEMS.iter() {
        for &bound in MAX_VALUES.iter() {
            let values = list(&mut rng, n, bound);
            check(&values, Decoder::Checked);
            check(&values, Decoder::Unrolled);
        }
    }
}

#[test]
fn narrow_values_compress() {
    init();
    let mut rng = StdRng::seed_from_u64(7);
    let values = list(&mut rng, 28 * 100, 2);

    let mut file = Vec::new();
    let written = encode(&values, &mut file).unwrap();
    assert_eq!(written, 2 + 4 * 100);
}

#[test]
fn concatenated_streams() {
    init();
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![MAX_VALUE; 3];

    let mut file = Vec::new();
    let na = encode(&a, &mut file).unwrap();
    let nb = encode(&b, &mut file).unwrap();

    let mut r = &file[..];
    assert_eq!(decode(&mut r).unwrap(), (a, na));
    assert_eq!(decode_fast(&mut r).unwrap(), (b, nb));
    assert!(r.is_empty());
}
