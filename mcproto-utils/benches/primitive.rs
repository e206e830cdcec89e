use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mcproto_utils::codec::VarInt;
use mcproto_utils::serial::{ReadFrom, WriteTo};

fn varint_round_trip(c: &mut Criterion) {
    c.bench_function("varint_write_read_300", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(VarInt::MAX_SIZE);
            VarInt(black_box(300)).write(&mut buf).unwrap();
            let mut cursor = Cursor::new(buf.as_slice());
            black_box(VarInt::read(&mut cursor).unwrap());
        });
    });
}

criterion_group!(benches, varint_round_trip);
criterion_main!(benches);
