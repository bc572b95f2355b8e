// Integration tests for the profile query and mutation services
// Run with: cargo test --test profile_service_test

mod common;

use common::*;
use filament_profiles::{
    auth::Actor,
    entities::{
        account, filament, filament_brand, filament_material, filament_profile, printer,
        printer_brand, profile_like, session,
        user::{self, Role},
    },
    error::ServiceError,
    services::{
        NewProfile, ProfileMutations, ProfileQueries, Revalidator, LISTING_PATH, MAX_OFFSET,
        PAGE_SIZE,
    },
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use serde_json::json;
use std::collections::HashSet;

fn new_profile(owner: &user::Model, filament_id: uuid::Uuid, name: &str) -> NewProfile {
    NewProfile {
        user_id: Some(owner.id),
        filament_id: Some(filament_id),
        filament_profile_name: Some(name.to_string()),
        ..Default::default()
    }
}

#[actix_web::test]
async fn test_list_orders_by_submission_and_skips_unresolved_rows() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let unbranded = insert_filament(&db, None, Some(material)).await;

    insert_profile(&db, &owner, filament_id, None, "Third", minutes_after_base(20)).await;
    insert_profile(&db, &owner, filament_id, None, "First", minutes_after_base(0)).await;
    insert_profile(&db, &owner, filament_id, None, "Second", minutes_after_base(10)).await;
    insert_profile(&db, &owner, unbranded, None, "No brand", minutes_after_base(5)).await;

    let page = ProfileQueries::new(db.clone())
        .list_profiles("", 0)
        .await
        .expect("Listing should succeed");

    let names: Vec<&str> = page
        .profiles
        .iter()
        .map(|p| p.filament_profile_name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert_eq!(page.total, 3, "Total should only count listable rows");
    assert_eq!(page.next_offset, None, "A short page has no next offset");

    let first = &page.profiles[0];
    assert_eq!(first.brand_name, "Prusament");
    assert_eq!(first.material_name, "PLA");
    assert_eq!(first.diameter, Some(1.75));
    assert_eq!(first.created_at, minutes_after_base(0));
}

#[actix_web::test]
async fn test_search_matches_brand_or_material_ignoring_case() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let prusament = insert_brand(&db, "Prusament").await;
    let esun = insert_brand(&db, "eSUN").await;
    let pla = insert_material(&db, "PLA").await;
    let petg = insert_material(&db, "PETG").await;

    let prusa_pla = insert_filament(&db, Some(prusament), Some(pla)).await;
    let esun_petg = insert_filament(&db, Some(esun), Some(petg)).await;
    let esun_pla = insert_filament(&db, Some(esun), Some(pla)).await;

    insert_profile(&db, &owner, prusa_pla, None, "Prusa PLA", minutes_after_base(0)).await;
    insert_profile(&db, &owner, esun_petg, None, "eSUN PETG", minutes_after_base(1)).await;
    insert_profile(&db, &owner, esun_pla, None, "eSUN PLA", minutes_after_base(2)).await;

    let queries = ProfileQueries::new(db.clone());

    let petg_page = queries.list_profiles("pet", 0).await.unwrap();
    let names: Vec<&str> = petg_page
        .profiles
        .iter()
        .map(|p| p.filament_profile_name.as_str())
        .collect();
    assert_eq!(names, vec!["eSUN PETG"]);
    assert_eq!(petg_page.total, 1);

    let esun_page = queries.list_profiles("ESUN", 0).await.unwrap();
    assert_eq!(esun_page.total, 2);
    for profile in &esun_page.profiles {
        assert_eq!(profile.brand_name, "eSUN");
    }

    let pla_page = queries.list_profiles("  pla  ", 0).await.unwrap();
    assert_eq!(pla_page.total, 2, "Surrounding whitespace is ignored");
    for profile in &pla_page.profiles {
        assert_eq!(profile.material_name, "PLA");
    }

    let blank = queries.list_profiles("   ", 0).await.unwrap();
    assert_eq!(blank.total, 3, "Whitespace-only search does not filter");

    let wildcard = queries.list_profiles("%", 0).await.unwrap();
    assert_eq!(wildcard.total, 0, "LIKE wildcards match literally");
}

#[actix_web::test]
async fn test_pagination_walks_every_row_once() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Polymaker").await;
    let material = insert_material(&db, "ASA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let count = 7;
    for i in 0..count {
        insert_profile(
            &db,
            &owner,
            filament_id,
            None,
            &format!("Profile {}", i),
            minutes_after_base(i),
        )
        .await;
    }

    let queries = ProfileQueries::new(db.clone());
    let mut seen = HashSet::new();
    let mut offset = Some(0);
    let mut pages = 0;

    while let Some(current) = offset {
        let page = queries.list_profiles("", current).await.unwrap();
        assert!(page.profiles.len() as u64 <= PAGE_SIZE);
        assert_eq!(page.total, count as u64);
        for profile in &page.profiles {
            assert!(
                seen.insert(profile.filament_profile_id),
                "Profile listed twice"
            );
        }
        offset = page.next_offset;
        pages += 1;
    }

    assert_eq!(seen.len(), count as usize);
    assert_eq!(pages, 2);
}

#[actix_web::test]
async fn test_full_last_page_is_followed_by_an_empty_page() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Polymaker").await;
    let material = insert_material(&db, "ASA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    for i in 0..PAGE_SIZE as i64 {
        insert_profile(&db, &owner, filament_id, None, "Profile", minutes_after_base(i)).await;
    }

    let queries = ProfileQueries::new(db.clone());
    let first = queries.list_profiles("", 0).await.unwrap();
    assert_eq!(first.profiles.len() as u64, PAGE_SIZE);
    assert_eq!(first.next_offset, Some(PAGE_SIZE));

    let second = queries.list_profiles("", PAGE_SIZE).await.unwrap();
    assert!(second.profiles.is_empty());
    assert_eq!(second.next_offset, None);
}

#[actix_web::test]
async fn test_listing_joins_printer_when_present() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Bambu Lab").await;
    let material = insert_material(&db, "PETG").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let printer_id = insert_printer(&db, "Prusa", "MK4").await;

    insert_profile(&db, &owner, filament_id, Some(printer_id), "On MK4", minutes_after_base(0)).await;
    insert_profile(&db, &owner, filament_id, None, "Any printer", minutes_after_base(1)).await;

    let page = ProfileQueries::new(db.clone()).list_profiles("", 0).await.unwrap();
    assert_eq!(page.total, 2);

    let with_printer = &page.profiles[0];
    assert_eq!(with_printer.printer_id, Some(printer_id));
    assert_eq!(with_printer.printer_brand_name.as_deref(), Some("Prusa"));
    assert_eq!(with_printer.printer_model_name.as_deref(), Some("MK4"));

    let without_printer = &page.profiles[1];
    assert_eq!(without_printer.printer_id, None);
    assert_eq!(without_printer.printer_brand_name, None);
}

#[actix_web::test]
async fn test_missing_rating_reads_as_zero() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Sunlu").await;
    let material = insert_material(&db, "TPU").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let mut row = filament_profile::ActiveModel::new();
    row.user_id = Set(Some(owner.id));
    row.filament_id = Set(Some(filament_id));
    row.filament_profile_name = Set("Unrated".to_string());
    row.community_rating = Set(None);
    row.insert(&db).await.unwrap();

    let page = ProfileQueries::new(db.clone()).list_profiles("", 0).await.unwrap();
    assert_eq!(page.profiles.len(), 1);
    assert_eq!(page.profiles[0].community_rating, 0.0);
}

#[actix_web::test]
async fn test_create_stores_known_settings_and_drops_unknown_keys() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PETG").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let revalidator = Revalidator::new();
    let mut stale = revalidator.subscribe();
    let mutations = ProfileMutations::new(db.clone(), revalidator);

    let mut input = new_profile(&owner, filament_id, "Galaxy Black PETG");
    input.slicer_settings = json!({
        "nozzleTemp": 220,
        "bogusField": "x",
        "tags": ["petg", "glossy"],
    })
    .as_object()
    .cloned()
    .unwrap();

    let created = mutations
        .create_profile(&actor(&owner), input)
        .await
        .expect("Create should succeed");

    assert_eq!(created.nozzle_temp, Some(220));
    assert_eq!(created.bed_temp, None);
    assert_eq!(created.community_rating, Some(Decimal::ZERO));
    assert_eq!(created.supports_enabled, Some(false));
    assert!(created.submission_date.is_some());

    let stored = filament_profile::Entity::find_by_id(created.filament_profile_id)
        .one(&db)
        .await
        .unwrap()
        .expect("Profile should be stored");
    assert_eq!(stored.filament_profile_name, "Galaxy Black PETG");
    assert_eq!(stored.user_id, Some(owner.id));
    assert_eq!(stored.nozzle_temp, Some(220));
    assert_eq!(
        stored.tags.map(|t| t.0),
        Some(vec!["petg".to_string(), "glossy".to_string()])
    );

    assert_eq!(stale.try_recv().unwrap(), LISTING_PATH);

    let page = ProfileQueries::new(db.clone()).list_profiles("", 0).await.unwrap();
    assert_eq!(page.profiles[0].community_rating, 0.0);
}

#[actix_web::test]
async fn test_create_without_name_writes_nothing() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());
    let mut input = new_profile(&owner, filament_id, "");
    input.filament_profile_name = None;

    let err = mutations
        .create_profile(&actor(&owner), input)
        .await
        .expect_err("Create without a name should fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["filamentProfileName"]);
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_create_rejects_out_of_range_and_unknown_enum_values() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());

    let mut hot = new_profile(&owner, filament_id, "Too hot");
    hot.slicer_settings = json!({ "nozzleTemp": 9000 }).as_object().cloned().unwrap();
    let err = mutations.create_profile(&actor(&owner), hot).await.unwrap_err();
    assert_eq!(err.field_errors()[0].field, "nozzleTemp");

    let mut odd = new_profile(&owner, filament_id, "Odd slicer");
    odd.slicer_settings = json!({ "sourceSlicer": "Simplify3D" }).as_object().cloned().unwrap();
    let err = mutations.create_profile(&actor(&owner), odd).await.unwrap_err();
    assert_eq!(err.field_errors()[0].field, "sourceSlicer");

    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_create_requires_a_session_and_ownership() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let other = insert_user(&db, "other@example.com", Role::User).await;
    let admin = insert_user(&db, "admin@example.com", Role::Admin).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());

    let err = mutations
        .create_profile(&None::<Actor>, new_profile(&owner, filament_id, "Anonymous"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));

    let err = mutations
        .create_profile(&actor(&other), new_profile(&owner, filament_id, "Impostor"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden));
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 0);

    let created = mutations
        .create_profile(&actor(&admin), new_profile(&owner, filament_id, "On behalf"))
        .await
        .expect("Admins may create profiles for other users");
    assert_eq!(created.user_id, Some(owner.id));
}

#[actix_web::test]
async fn test_delete_removes_the_filament_and_all_its_profiles() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let shared = insert_filament(&db, Some(brand), Some(material)).await;
    let kept = insert_filament(&db, Some(brand), Some(material)).await;

    insert_profile(&db, &owner, shared, None, "P1", minutes_after_base(0)).await;
    insert_profile(&db, &owner, shared, None, "P2", minutes_after_base(1)).await;
    let survivor = insert_profile(&db, &owner, kept, None, "P3", minutes_after_base(2)).await;

    let revalidator = Revalidator::new();
    let mut stale = revalidator.subscribe();
    let mutations = ProfileMutations::new(db.clone(), revalidator);

    mutations
        .delete_profile(&actor(&owner), Some(shared))
        .await
        .expect("Delete should succeed");

    assert!(filament::Entity::find_by_id(shared).one(&db).await.unwrap().is_none());
    let remaining: Vec<_> = filament_profile::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.filament_profile_id)
        .collect();
    assert_eq!(remaining, vec![survivor]);
    assert_eq!(stale.try_recv().unwrap(), LISTING_PATH);
}

#[actix_web::test]
async fn test_delete_requires_owning_every_affected_profile() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let other = insert_user(&db, "other@example.com", Role::User).await;
    let admin = insert_user(&db, "admin@example.com", Role::Admin).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let shared = insert_filament(&db, Some(brand), Some(material)).await;

    insert_profile(&db, &owner, shared, None, "Mine", minutes_after_base(0)).await;
    insert_profile(&db, &other, shared, None, "Theirs", minutes_after_base(1)).await;

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());

    let err = mutations
        .delete_profile(&None::<Actor>, Some(shared))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));

    let err = mutations
        .delete_profile(&actor(&owner), Some(shared))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden));
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 2);

    let err = mutations.delete_profile(&actor(&owner), None).await.unwrap_err();
    assert_eq!(err.field_errors()[0].field, "id");

    mutations
        .delete_profile(&actor(&admin), Some(shared))
        .await
        .expect("Admins may delete any filament");
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_like_and_unlike() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let fan = insert_user(&db, "fan@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let profile_id = insert_profile(&db, &owner, filament_id, None, "Liked", minutes_after_base(0)).await;

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());

    assert!(mutations.like_profile(&actor(&fan), profile_id).await.unwrap());
    assert!(!mutations.like_profile(&actor(&fan), profile_id).await.unwrap());
    assert!(mutations.unlike_profile(&actor(&fan), profile_id).await.unwrap());
    assert!(!mutations.unlike_profile(&actor(&fan), profile_id).await.unwrap());

    let err = mutations
        .like_profile(&actor(&fan), uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[actix_web::test]
async fn test_deleting_a_user_keeps_their_profiles_but_drops_their_sessions() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let profile_id = insert_profile(&db, &owner, filament_id, None, "Orphan", minutes_after_base(0)).await;

    account::ActiveModel {
        user_id: Set(owner.id),
        account_type: Set("oauth".to_string()),
        provider: Set("github".to_string()),
        provider_account_id: Set("12345".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    session::ActiveModel {
        session_token: Set("session-token".to_string()),
        user_id: Set(owner.id),
        expires: Set(minutes_after_base(60)),
    }
    .insert(&db)
    .await
    .unwrap();

    let mutations = ProfileMutations::new(db.clone(), Revalidator::new());
    assert!(mutations.like_profile(&actor(&owner), profile_id).await.unwrap());

    user::Entity::delete_by_id(owner.id).exec(&db).await.unwrap();

    let stored = filament_profile::Entity::find_by_id(profile_id)
        .one(&db)
        .await
        .unwrap()
        .expect("Profile should survive its owner");
    assert_eq!(stored.user_id, None);

    assert_eq!(account::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(session::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(profile_like::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_emails_are_unique_ignoring_case() {
    let db = setup_db().await;
    insert_user(&db, "Maker@Example.com", Role::User).await;

    let mut duplicate = user::ActiveModel::new();
    duplicate.email = Set(Some("maker@example.com".to_string()));
    assert!(duplicate.insert(&db).await.is_err());
}

#[actix_web::test]
async fn test_offset_beyond_the_driver_range_is_rejected() {
    let db = setup_db().await;
    let queries = ProfileQueries::new(db.clone());

    let err = queries
        .list_profiles("", u64::MAX)
        .await
        .expect_err("Offsets above i64::MAX should be rejected");
    assert_eq!(err.field_errors()[0].field, "offset");

    let page = queries
        .list_profiles("", MAX_OFFSET)
        .await
        .expect("The largest accepted offset should list nothing");
    assert!(page.profiles.is_empty());
    assert_eq!(page.next_offset, None);
}

#[actix_web::test]
async fn test_search_folds_ascii_case_on_sqlite() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Élan").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    insert_profile(&db, &owner, filament_id, None, "Élan PLA", minutes_after_base(0)).await;

    let queries = ProfileQueries::new(db.clone());
    assert_eq!(queries.list_profiles("Élan", 0).await.unwrap().total, 1);
    assert_eq!(queries.list_profiles("ÉLAN", 0).await.unwrap().total, 1);
    // SQLite's lower() leaves non-ASCII letters alone.
    assert_eq!(queries.list_profiles("élan", 0).await.unwrap().total, 0);
}

#[actix_web::test]
async fn test_deleting_a_printer_removes_only_its_profiles() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let printer_id = insert_printer(&db, "Prusa", "MK4").await;

    insert_profile(&db, &owner, filament_id, Some(printer_id), "On MK4", minutes_after_base(0)).await;
    let kept = insert_profile(&db, &owner, filament_id, None, "Any printer", minutes_after_base(1)).await;

    printer::Entity::delete_by_id(printer_id).exec(&db).await.unwrap();

    let remaining: Vec<_> = filament_profile::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.filament_profile_id)
        .collect();
    assert_eq!(remaining, vec![kept]);
    assert!(filament::Entity::find_by_id(filament_id).one(&db).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_deleting_a_printer_brand_removes_its_printers_and_profiles() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let brand = insert_brand(&db, "Prusament").await;
    let material = insert_material(&db, "PLA").await;
    let filament_id = insert_filament(&db, Some(brand), Some(material)).await;
    let printer_id = insert_printer(&db, "Creality", "K1").await;
    insert_profile(&db, &owner, filament_id, Some(printer_id), "On K1", minutes_after_base(0)).await;

    let printer_brand_id = printer::Entity::find_by_id(printer_id)
        .one(&db)
        .await
        .unwrap()
        .and_then(|p| p.brand_id)
        .expect("Printer should have a brand");

    printer_brand::Entity::delete_by_id(printer_brand_id)
        .exec(&db)
        .await
        .unwrap();

    assert_eq!(printer::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 0);
}

#[actix_web::test]
async fn test_deleting_a_filament_brand_or_material_cascades_to_profiles() {
    let db = setup_db().await;
    let owner = insert_user(&db, "maker@example.com", Role::User).await;
    let prusament = insert_brand(&db, "Prusament").await;
    let esun = insert_brand(&db, "eSUN").await;
    let pla = insert_material(&db, "PLA").await;
    let petg = insert_material(&db, "PETG").await;

    let prusa_pla = insert_filament(&db, Some(prusament), Some(pla)).await;
    let esun_petg = insert_filament(&db, Some(esun), Some(petg)).await;
    let esun_pla = insert_filament(&db, Some(esun), Some(pla)).await;

    insert_profile(&db, &owner, prusa_pla, None, "Prusa PLA", minutes_after_base(0)).await;
    insert_profile(&db, &owner, esun_petg, None, "eSUN PETG", minutes_after_base(1)).await;
    let kept = insert_profile(&db, &owner, esun_pla, None, "eSUN PLA", minutes_after_base(2)).await;

    filament_brand::Entity::delete_by_id(prusament).exec(&db).await.unwrap();
    assert!(filament::Entity::find_by_id(prusa_pla).one(&db).await.unwrap().is_none());
    assert_eq!(filament_profile::Entity::find().count(&db).await.unwrap(), 2);

    filament_material::Entity::delete_by_id(petg).exec(&db).await.unwrap();
    assert!(filament::Entity::find_by_id(esun_petg).one(&db).await.unwrap().is_none());

    let remaining: Vec<_> = filament_profile::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.filament_profile_id)
        .collect();
    assert_eq!(remaining, vec![kept]);
}
