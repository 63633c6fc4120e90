#![allow(dead_code)]

use criterion::{criterion_group, criterion_main, Criterion};
use needle::{Class, Container, Dependencies, InstantiateErrorKind, Registry, Signature};
use std::{hint::black_box, sync::Arc};

struct A(Arc<B>, Arc<C>, Arc<D>);
struct B(i32);
struct C(i64);
struct D;

fn class() -> Class<A> {
    Class::new("function A($b, $c, $d, options)", |mut deps: Dependencies| {
        Ok::<_, InstantiateErrorKind>(A(deps.next()?, deps.next()?, deps.next()?))
    })
    .unwrap()
}

fn container() -> Container {
    Container::new(Registry::new().provide("b", B(1)).provide("c", C(2)).provide("d", D))
}

fn instantiate_benchmark(c: &mut Criterion) {
    let container = container();
    let class = class();

    c.bench_function("instantiate", |b| {
        b.iter(|| container.instantiate(black_box(&class), ()).unwrap());
    })
    .bench_function("instantiate_with_missing", |b| {
        let container = Container::new(Registry::new().provide("b", B(1)));
        let class = Class::new("function A($b, $missing)", |mut deps: Dependencies| {
            Ok::<_, InstantiateErrorKind>(deps.next::<B>()?.0)
        })
        .unwrap();
        b.iter(|| container.instantiate(black_box(&class), ()).unwrap());
    })
    .bench_function("parse_signature", |b| {
        b.iter(|| Signature::parse(black_box("function Service($logger, $db, $cache, options = {}) {}")).unwrap());
    });
}

criterion_group!(benches, instantiate_benchmark);
criterion_main!(benches);
