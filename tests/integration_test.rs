// Integration tests for laprec
use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::test as actix_test;
use actix_web::{web, App};
use laprec_api::{configure, OptionsService, RecommendationService, MAX_RECOMMENDATIONS};
use laprec_core::{CurrencyConverter, Error, Field};
use laprec_storage::{ModelStore, StoreConfig};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn open_store() -> Arc<ModelStore> {
    Arc::new(ModelStore::open(&StoreConfig::in_dir(fixtures())).unwrap())
}

fn recommender() -> RecommendationService {
    RecommendationService::new(open_store(), CurrencyConverter::default())
}

fn names(recs: &[laprec_api::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_store_loads_fixtures() {
    let store = open_store();
    let catalog = store.catalog();
    assert_eq!(catalog.len(), 8);
    assert_eq!(store.index().len(), catalog.len());
    assert!(catalog.columns().iter().any(|c| c == "Model Name"));
    assert!(catalog.columns().iter().any(|c| c == "Storage"));
    assert_eq!(
        catalog.row_at(0).unwrap().formatted_name,
        "Apple MacBook Pro Ultrabook Intel Core i5 2.3GHz"
    );
}

#[test]
fn test_store_in_copied_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    for file in ["laptops.csv", "label_encoders.json", "knn_model.json"] {
        std::fs::copy(fixtures().join(file), temp_dir.path().join(file)).unwrap();
    }
    let store = ModelStore::open(&StoreConfig::in_dir(temp_dir.path())).unwrap();
    assert_eq!(store.catalog().len(), 8);

    std::fs::write(temp_dir.path().join("knn_model.json"), "{").unwrap();
    assert!(matches!(
        ModelStore::open(&StoreConfig::in_dir(temp_dir.path())),
        Err(Error::Load { .. })
    ));
}

#[test]
fn test_recommend_deduplicates_without_backfill() {
    let recs = recommender().recommend("Apple", "MacBook Pro", "Ultrabook").unwrap();
    assert_eq!(
        names(&recs),
        vec![
            "Apple MacBook Pro Ultrabook Intel Core i5 2.3GHz",
            "Apple MacBook Air Ultrabook Intel Core i5 1.8GHz",
        ]
    );
    assert_eq!(recs[0].price_tzs, 3_851_502);
    assert_eq!(recs[0].storage, "128GB SSD");
    assert_eq!(recs[1].price_tzs, 2_584_381);
}

#[test]
fn test_recommend_three_unique() {
    let recs = recommender().recommend("HP", "250 G6", "Notebook").unwrap();
    assert_eq!(
        names(&recs),
        vec![
            "HP 250 G6 Notebook Intel Core i5 7200U 2.5GHz",
            "Dell Inspiron 3567 Notebook Intel Core i3 6006U 2GHz",
            "Acer Aspire 3 Notebook AMD A9-Series 9420 3GHz",
        ]
    );
    let prices: Vec<u64> = recs.iter().map(|r| r.price_tzs).collect();
    assert_eq!(prices, vec![1_653_079, 1_434_298, 1_149_968]);
    assert_eq!(recs[0].screen_size, "15.6 inches");
    assert_eq!(recs[0].screen, "Full HD 1920x1080");
    assert_eq!(recs[0].ram, "8GB");
    assert_eq!(recs[0].gpu, "Intel HD Graphics 620");
}

#[test]
fn test_recommend_combination_outside_catalog() {
    let recs = recommender().recommend("Apple", "XPS 13", "Gaming").unwrap();
    assert_eq!(
        names(&recs),
        vec![
            "Acer Predator Helios Gaming Intel Core i7 7700HQ 2.8GHz",
            "Dell XPS 13 Ultrabook Intel Core i7 8550U 1.8GHz",
            "Apple MacBook Pro Ultrabook Intel Core i5 2.3GHz",
        ]
    );
}

#[test]
fn test_recommend_every_catalog_triple() {
    let service = recommender();
    let store = open_store();
    for row in store.catalog().rows() {
        let recs = service
            .recommend(&row.manufacturer, &row.model_name, &row.category)
            .unwrap();
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        assert!(!recs.is_empty());
        let unique: HashSet<_> = recs.iter().map(|r| &r.name).collect();
        assert_eq!(unique.len(), recs.len());
        assert_eq!(recs[0].name, row.formatted_name);
    }
}

#[test]
fn test_recommend_unknown_values() {
    let service = recommender();
    for (m, n, c) in [
        ("Lenovo", "MacBook Pro", "Ultrabook"),
        ("Apple", "ThinkPad X1", "Ultrabook"),
        ("Apple", "MacBook Pro", "Workstation"),
        ("apple", "MacBook Pro", "Ultrabook"),
    ] {
        let err = service.recommend(m, n, c).unwrap_err();
        assert!(err.is_encoding(), "{m}/{n}/{c}: {err}");
    }
}

#[test]
fn test_recommend_is_idempotent() {
    let service = recommender();
    let first = service.recommend("Dell", "XPS 13", "Ultrabook").unwrap();
    for _ in 0..5 {
        assert_eq!(service.recommend("Dell", "XPS 13", "Ultrabook").unwrap(), first);
    }
}

#[test]
fn test_options_match_catalog() {
    let store = open_store();
    let options = OptionsService::new(store.clone()).list_options();
    let catalog = store.catalog();

    assert_eq!(options.manufacturers, vec!["Apple", "HP", "Acer", "Dell"]);
    assert_eq!(options.manufacturers, catalog.distinct(Field::Manufacturer));
    assert_eq!(options.model_names.len(), options.manufacturers.len());

    for manufacturer in &options.manufacturers {
        let expected: HashSet<&str> = catalog
            .rows_where(Field::Manufacturer, manufacturer)
            .map(|r| r.model_name.as_str())
            .collect();
        let models = options.model_names.get(manufacturer).unwrap();
        assert_eq!(models.len(), expected.len());
        assert_eq!(models.iter().map(String::as_str).collect::<HashSet<_>>(), expected);
    }
    assert_eq!(options.categories, vec!["Ultrabook", "Notebook", "Gaming"]);
}

#[test]
fn test_price_conversion_property() {
    assert_eq!(
        CurrencyConverter::default().convert(999.99),
        (999.99_f64 * 2874.92).round() as u64
    );
}

#[actix_web::test]
async fn test_http_round_trip() {
    let store = open_store();
    let app = actix_test::init_service(
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .app_data(web::Data::new(RecommendationService::new(
                store.clone(),
                CurrencyConverter::default(),
            )))
            .app_data(web::Data::new(OptionsService::new(store)))
            .configure(configure),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/recommend/")
        .set_json(json!({
            "manufacturer": "HP",
            "model_name": "250 G6",
            "category": "Notebook"
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(
        recs[0],
        json!({
            "name": "HP 250 G6 Notebook Intel Core i5 7200U 2.5GHz",
            "screen_size": "15.6 inches",
            "screen": "Full HD 1920x1080",
            "ram": "8GB",
            "storage": "256GB SSD",
            "gpu": "Intel HD Graphics 620",
            "price_tzs": 1653079
        })
    );

    let req = actix_test::TestRequest::get().uri("/api/options/").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["manufacturers"], json!(["Apple", "HP", "Acer", "Dell"]));
    assert_eq!(body["model_names"]["Acer"], json!(["Aspire 3", "Predator Helios"]));

    for req in [
        actix_test::TestRequest::get().uri("/api/recommend/").to_request(),
        actix_test::TestRequest::put().uri("/api/recommend/").to_request(),
        actix_test::TestRequest::post().uri("/api/options/").to_request(),
        actix_test::TestRequest::delete().uri("/api/options/").to_request(),
    ] {
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    let req = actix_test::TestRequest::post()
        .uri("/api/recommend/")
        .set_json(json!({
            "manufacturer": "HP",
            "model_name": "250 G6",
            "category": "Workstation"
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Workstation"));
}
