#![feature(test)]

extern crate test;

use rand::Rng;
use simple9::{decode, decode_fast, encode, vbyte};
use test::Bencher;

const NITEMS: usize = 4096;

fn data(bound: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..NITEMS).map(|_| rng.gen_range(0..bound)).collect()
}

fn encoded(bound: u32) -> Vec<u8> {
    simple9::to_vec(&data(bound)).unwrap()
}

#[bench]
fn vbyte_encode(b: &mut Bencher) {
    let data = data(1 << 14);
    let mut buf = vec![0u8; NITEMS * vbyte::MAX_VBYTE_LEN32];

    b.iter(|| {
        let mut n = 0;
        for d in &data {
            n += vbyte::encode(&mut buf[n..], d);
        }
        n
    })
}

#[bench]
fn encode_narrow(b: &mut Bencher) {
    let data = data(4);
    let mut buf = Vec::with_capacity(NITEMS * 4);
    b.iter(|| {
        buf.clear();
        encode(&data, &mut buf).unwrap()
    })
}

#[bench]
fn encode_wide(b: &mut Bencher) {
    let data = data(1 << 14);
    let mut buf = Vec::with_capacity(NITEMS * 4);
    b.iter(|| {
        buf.clear();
        encode(&data, &mut buf).unwrap()
    })
}

#[bench]
fn decode_narrow(b: &mut Bencher) {
    let buf = encoded(4);
    b.iter(|| decode(&buf[..]).unwrap())
}

#[bench]
fn decode_fast_narrow(b: &mut Bencher) {
    let buf = encoded(4);
    b.iter(|| decode_fast(&buf[..]).unwrap())
}

#[bench]
fn decode_wide(b: &mut Bencher) {
    let buf = encoded(1 << 14);
    b.iter(|| decode(&buf[..]).unwrap())
}

#[bench]
fn decode_fast_wide(b: &mut Bencher) {
    let buf = encoded(1 << 14);
    b.iter(|| decode_fast(&buf[..]).unwrap())
}
