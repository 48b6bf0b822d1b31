#![allow(dead_code)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use wirebox::{registry, Container, Registry};

trait Service: Send + Sync {}

struct A(Arc<B>, Arc<C>);
struct B(i32);
struct C(Arc<CA>);
struct CA(Arc<CAA>);
struct CAA(Arc<CAAA>);
struct CAAA(Arc<CAAAA>);
struct CAAAA(Arc<CAAAAA>);
struct CAAAAA;

impl Service for CAAAAA {}

#[inline]
fn graph_registry() -> Registry {
    registry! {
        interface(dyn Service),
        concrete(CAAAAA) [ public(|| Ok(CAAAAA)) ],
        concrete(CAAAA) [ public(|caaaaa: Arc<CAAAAA>| Ok(CAAAA(caaaaa))) ],
        concrete(CAAA) [ public(|caaaa: Arc<CAAAA>| Ok(CAAA(caaaa))) ],
        concrete(CAA) [ public(|caaa: Arc<CAAA>| Ok(CAA(caaa))) ],
        concrete(CA) [ public(|caa: Arc<CAA>| Ok(CA(caa))) ],
        concrete(C) [ public(|ca: Arc<CA>| Ok(C(ca))) ],
        concrete(B) [ public(|| Ok(B(2))) ],
        concrete(A) [ public(|b: Arc<B>, c: Arc<C>| Ok(A(b, c))) ],
    }
}

#[inline]
fn singleton_registry() -> Registry {
    registry! {
        singleton(B) [ public(|| Ok(B(2))) ],
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("resolve_transient_single", |b| {
        let container = Container::new(graph_registry());
        b.iter(|| container.resolve::<B>().unwrap());
    })
    .bench_function("resolve_transient_many", |b| {
        let container = Container::new(graph_registry());
        b.iter(|| container.resolve::<A>().unwrap());
    })
    .bench_function("resolve_singleton", |b| {
        let container = Container::new(singleton_registry());
        b.iter(|| container.resolve::<B>().unwrap());
    })
    .bench_function("resolve_interface", |b| {
        let container = Container::new(graph_registry());
        container.bind_with::<dyn Service, CAAAAA>(|service| service).unwrap();
        b.iter(|| container.resolve::<dyn Service>().unwrap());
    })
    .bench_function("verify_bindings", |b| {
        let container = Container::new(graph_registry());
        container.bind_self::<A>().unwrap();
        container.bind_self::<C>().unwrap();
        b.iter(|| container.verify_bindings().unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
