use std::collections::HashSet;

use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use cathouse_server::entity::cat;

use crate::common::{TestApp, routes};

fn tom(owner_id: i32) -> serde_json::Value {
    json!({
        "nickname": "Tom",
        "age": 3,
        "vaccinated": true,
        "description": "orange",
        "owner_id": owner_id,
    })
}

mod cat_creation {
    use super::*;

    #[tokio::test]
    async fn example_scenario_round_trips() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("a@x.com").await;

        let created = app.post(routes::CATS, &tom(owner_id)).await;

        assert_eq!(created.status, 201, "{}", created.text);
        assert_eq!(created.body["nickname"], "Tom");
        assert_eq!(created.body["age"], 3);
        assert_eq!(created.body["vaccinated"], true);
        assert_eq!(created.body["description"], "orange");
        assert_eq!(created.body["owner_id"], owner_id);
        assert_eq!(created.body["owner"]["id"], owner_id);
        assert_eq!(created.body["owner"]["email"], "a@x.com");

        let fetched = app.get(&routes::cat(created.id())).await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body, created.body);
    }

    #[tokio::test]
    async fn defaults_apply_to_omitted_fields() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("d@x.com").await;

        let res = app
            .post(
                routes::CATS,
                &json!({ "age": 5, "description": "quiet", "owner_id": owner_id }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["nickname"], "Kitty");
        assert_eq!(res.body["vaccinated"], false);
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found_and_nothing_is_stored() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::CATS, &tom(404)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Owner not found");

        let stored = cat::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(stored, 0);
    }

    #[tokio::test]
    async fn out_of_range_fields_are_rejected_before_storage() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("v@x.com").await;

        let cases = [
            ("nickname", json!({ "nickname": "Al" })),
            ("nickname", json!({ "nickname": "Maximilianus" })),
            ("age", json!({ "age": 0 })),
            ("age", json!({ "age": 21 })),
        ];
        for (field, patch) in cases {
            let mut body = tom(owner_id);
            for (k, v) in patch.as_object().unwrap() {
                body[k] = v.clone();
            }

            let res = app.post(routes::CATS, &body).await;

            assert_eq!(res.status, 400, "{patch}");
            assert_eq!(res.body["field"], field, "{patch}");
        }

        assert!(app.get(routes::CATS).await.ids().is_empty());
    }

    #[tokio::test]
    async fn wrong_types_and_missing_description_are_rejected() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("t@x.com").await;

        let mut body = tom(owner_id);
        body["age"] = json!("three");
        assert_eq!(app.post(routes::CATS, &body).await.status, 400);

        let mut body = tom(owner_id);
        body.as_object_mut().unwrap().remove("description");
        assert_eq!(app.post(routes::CATS, &body).await.status, 400);
    }
}

mod cat_reads {
    use super::*;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::cat(12)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Cat not found");
    }

    #[tokio::test]
    async fn list_defaults_to_ten() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("many@x.com").await;
        for i in 0..12 {
            app.create_cat(&format!("Cat{i:02}"), owner_id).await;
        }

        let res = app.get(routes::CATS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.ids().len(), 10);
    }

    #[tokio::test]
    async fn consecutive_pages_are_disjoint() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("pages@x.com").await;
        for name in ["Ann", "Bob", "Cid", "Dot", "Eve"] {
            app.create_cat(name, owner_id).await;
        }

        let first: HashSet<i64> = app.get(&routes::cats_page(2, 0)).await.ids().into_iter().collect();
        let second: HashSet<i64> = app.get(&routes::cats_page(2, 2)).await.ids().into_iter().collect();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert!(first.is_disjoint(&second));
    }

    #[tokio::test]
    async fn list_items_embed_their_owner() {
        let app = TestApp::spawn().await;
        let a = app.create_owner("oa@x.com").await;
        let b = app.create_owner("ob@x.com").await;
        app.create_cat("Tom", a).await;
        app.create_cat("Jerry", b).await;

        let res = app.get(routes::CATS).await;

        let items = res.body.as_array().unwrap();
        assert_eq!(items[0]["owner"]["email"], "oa@x.com");
        assert_eq!(items[1]["owner"]["email"], "ob@x.com");
    }

    #[tokio::test]
    async fn list_rejects_bad_window() {
        let app = TestApp::spawn().await;

        assert_eq!(app.get("/cats?limit=0").await.status, 400);
        assert_eq!(app.get("/cats?limit=1001").await.status, 400);
        assert_eq!(app.get("/cats?offset=-1").await.status, 400);
        assert_eq!(app.get("/cats?limit=1000").await.status, 200);
    }

    #[tokio::test]
    async fn offset_beyond_bigint_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.get("/cats?offset=18446744073709551615").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["field"], "offset");
        assert_eq!(app.get("/cats?offset=9223372036854775807").await.status, 200);
    }
}

mod cat_update {
    use super::*;

    #[tokio::test]
    async fn replaces_every_mutable_field() {
        let app = TestApp::spawn().await;
        let first = app.create_owner("u1@x.com").await;
        let second = app.create_owner("u2@x.com").await;
        let id = app.create_cat("Tom", first).await;

        let res = app
            .put(
                &routes::cat(id),
                &json!({
                    "nickname": "Thomas",
                    "age": 4,
                    "vaccinated": true,
                    "description": "older now",
                    "owner_id": second,
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.id(), id);
        assert_eq!(res.body["nickname"], "Thomas");
        assert_eq!(res.body["age"], 4);
        assert_eq!(res.body["vaccinated"], true);
        assert_eq!(res.body["description"], "older now");
        assert_eq!(res.body["owner"]["id"], second);

        let fetched = app.get(&routes::cat(id)).await;
        assert_eq!(fetched.body, res.body);
    }

    #[tokio::test]
    async fn unknown_cat_is_not_found() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("x@x.com").await;

        let res = app.put(&routes::cat(99), &tom(owner_id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Cat not found");
    }

    #[tokio::test]
    async fn unknown_owner_is_rejected_and_cat_is_unchanged() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("y@x.com").await;
        let id = app.create_cat("Tom", owner_id).await;
        let before = app.get(&routes::cat(id)).await;

        let res = app.put(&routes::cat(id), &tom(owner_id + 100)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Owner not found");
        assert_eq!(app.get(&routes::cat(id)).await.body, before.body);
    }
}

mod cat_deletion {
    use super::*;

    #[tokio::test]
    async fn deletes_the_cat_not_the_owner() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("z@x.com").await;
        let id = app.create_cat("Tom", owner_id).await;

        let res = app.delete(&routes::cat(id)).await;

        assert_eq!(res.status, 204);
        assert!(res.text.is_empty());
        assert_eq!(app.get(&routes::cat(id)).await.status, 404);
        assert_eq!(app.get(&routes::owner(owner_id)).await.status, 200);
    }

    #[tokio::test]
    async fn cat_id_matching_an_owner_id_is_still_not_found() {
        let app = TestApp::spawn().await;
        let owner_id = app.create_owner("w@x.com").await;

        let res = app.delete(&routes::cat(owner_id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["message"], "Cat not found");
    }
}
