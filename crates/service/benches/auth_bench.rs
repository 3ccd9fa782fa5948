use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::service::AuthService;
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::{RegisterInput, LoginInput};
use service::auth::JwtTokenIssuer;

fn bench_login_and_verify(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let svc = AuthService::new(repo, JwtTokenIssuer::new("secret"));

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.register(RegisterInput { name: "Bench".into(), email: "bench@example.com".into(), password: "Benchmark1".into() }));

    c.bench_function("auth_login", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() })).unwrap();
        });
    });

    let token = rt
        .block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() }))
        .unwrap()
        .token;
    c.bench_function("auth_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.verify(&token)).unwrap();
        });
    });
}

criterion_group!(benches, bench_login_and_verify);
criterion_main!(benches);
