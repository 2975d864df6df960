use std::sync::Arc;

use rust_decimal::Decimal;

use catalog_core::domain::product::{Product, ProductId};
use catalog_db::{InMemoryProductRepository, ProductRepository, SampleCatalog};

const ROUNDS: usize = 200;

fn variant(tag: &str, cents: i64, stock: i32) -> Product {
    Product {
        id: ProductId::default(),
        name: format!("name-{tag}"),
        description: format!("description-{tag}"),
        price: Decimal::new(cents, 2),
        stock,
        category: Some(format!("category-{tag}")),
        image_url: Some(format!("https://img.example/{tag}.png")),
    }
}

fn is_one_of(found: &Product, candidates: &[&Product]) -> bool {
    candidates.iter().any(|candidate| *candidate == found)
}

async fn seeded_repo() -> Arc<InMemoryProductRepository> {
    let repo = Arc::new(InMemoryProductRepository::default());
    SampleCatalog::load(&*repo).await.expect("seed sample catalog");
    repo
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_replaces_never_mix_fields() {
    let repo = seeded_repo().await;
    let id = ProductId(1);
    let original = repo.find_by_id(id).await.expect("find").expect("seeded");
    let left = variant("left", 1_000, 1).with_id(id);
    let right = variant("right", 2_000, 2).with_id(id);

    let mut handles = Vec::with_capacity(ROUNDS * 3);
    for round in 0..ROUNDS {
        let writer = Arc::clone(&repo);
        let record = if round % 2 == 0 { left.clone() } else { right.clone() };
        handles.push(tokio::spawn(async move {
            writer.replace(id, record).await.expect("replace").expect("present");
        }));

        let reader = Arc::clone(&repo);
        let (left, right, original) = (left.clone(), right.clone(), original.clone());
        handles.push(tokio::spawn(async move {
            let found = reader.find_by_id(id).await.expect("find").expect("present");
            assert!(
                is_one_of(&found, &[&left, &right, &original]),
                "observed a mixed record: {found:?}"
            );
        }));
    }

    for handle in handles {
        handle.await.expect("task should not panic");
    }

    let last = repo.find_by_id(id).await.expect("find").expect("present");
    assert!(is_one_of(&last, &[&left, &right]), "final record was mixed: {last:?}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_replaces_of_absent_id_never_insert() {
    let repo = seeded_repo().await;
    let absent = ProductId(999);

    let handles: Vec<_> = (0..ROUNDS)
        .map(|round| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let stored = repo
                    .replace(absent, variant(&round.to_string(), 100, 1))
                    .await
                    .expect("replace");
                assert_eq!(stored, None);
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task should not panic");
    }

    assert_eq!(repo.find_by_id(absent).await.expect("find"), None);
    assert_eq!(repo.len().await, 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn writes_to_one_id_leave_other_ids_untouched() {
    let repo = seeded_repo().await;
    let untouched = SampleCatalog::products();

    let handles: Vec<_> = (0..ROUNDS)
        .map(|round| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                let stock = i32::try_from(round).expect("round fits in i32");
                repo.replace(ProductId(1), variant("busy", 100, stock))
                    .await
                    .expect("replace")
                    .expect("present");
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task should not panic");
    }

    for (index, expected) in untouched.into_iter().enumerate().skip(1) {
        let id = ProductId(i32::try_from(index + 1).expect("small index"));
        let found = repo.find_by_id(id).await.expect("find");
        assert_eq!(found, Some(expected.with_id(id)));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_assign_unique_increasing_ids() {
    let repo = Arc::new(InMemoryProductRepository::default());

    let handles: Vec<_> = (0..ROUNDS)
        .map(|round| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.create(variant(&round.to_string(), 100, 1)).await.expect("create").id
            })
        })
        .collect();

    let mut ids = Vec::with_capacity(ROUNDS);
    for handle in handles {
        ids.push(handle.await.expect("task should not panic"));
    }
    ids.sort();

    let expected: Vec<ProductId> =
        (1..=i32::try_from(ROUNDS).expect("rounds fit in i32")).map(ProductId).collect();
    assert_eq!(ids, expected);

    let next = repo.create(variant("after", 100, 1)).await.expect("create");
    assert!(next.id > *expected.last().expect("non-empty"));
}
