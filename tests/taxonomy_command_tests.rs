use std::sync::Arc;

use jotter_core::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use jotter_core::application::commands::tags::{
    CreateTagCommand, DeleteTagCommand, UpdateTagCommand,
};
use jotter_core::application::error::ErrorKind;
use jotter_core::domain::category::CategoryId;

mod support;
use support::{InMemoryContent, PostBuilder, author, fixed_now, services};

fn category(name: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        description: None,
    }
}

#[tokio::test]
async fn category_slug_follows_name() {
    let content = Arc::new(InMemoryContent::new());
    let svc = services(&content);

    let created = svc
        .category_commands
        .create_category(&author(1), category("Web Development"))
        .await
        .unwrap();
    assert_eq!(created.slug, "web-development");
    assert_eq!(created.post_count, 0);
}

#[tokio::test]
async fn category_fallback_uses_category_prefix() {
    let content = Arc::new(InMemoryContent::new());
    let svc = services(&content);

    let created = svc
        .category_commands
        .create_category(&author(1), category("技術"))
        .await
        .unwrap();
    assert_eq!(
        created.slug,
        format!("category-{}", fixed_now().timestamp_millis())
    );
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let content = Arc::new(InMemoryContent::new());
    content.put_category("News", "news");
    let svc = services(&content);

    let err = svc
        .category_commands
        .create_category(&author(1), category("News"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn category_slug_collision_gets_suffix() {
    let content = Arc::new(InMemoryContent::new());
    content.put_category("C++", "c");
    let svc = services(&content);

    let created = svc
        .category_commands
        .create_category(&author(1), category("C"))
        .await
        .unwrap();
    assert_eq!(created.slug, "c-1");
}

#[tokio::test]
async fn category_rename_and_description_clear() {
    let content = Arc::new(InMemoryContent::new());
    let existing = content.put_category("Misc", "misc");
    let svc = services(&content);

    svc.category_commands
        .update_category(
            &author(1),
            UpdateCategoryCommand {
                id: existing.id.0,
                description: Some(Some("odds and ends".into())),
                ..UpdateCategoryCommand::default()
            },
        )
        .await
        .unwrap();

    let renamed = svc
        .category_commands
        .update_category(
            &author(1),
            UpdateCategoryCommand {
                id: existing.id.0,
                name: Some("Miscellany".into()),
                description: Some(None),
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Miscellany");
    assert_eq!(renamed.slug, "miscellany");
    assert!(renamed.description.is_none());
}

#[tokio::test]
async fn category_rename_to_existing_name_conflicts() {
    let content = Arc::new(InMemoryContent::new());
    content.put_category("News", "news");
    let misc = content.put_category("Misc", "misc");
    let svc = services(&content);

    let err = svc
        .category_commands
        .update_category(
            &author(1),
            UpdateCategoryCommand {
                id: misc.id.0,
                name: Some("News".into()),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let content = Arc::new(InMemoryContent::new());
    let news = content.put_category("News", "news");
    let mut post = PostBuilder::new().build();
    post.category_id = Some(CategoryId::new(news.id.0).unwrap());
    content.put_post(post);
    let svc = services(&content);

    let err = svc
        .category_commands
        .delete_category(&author(1), DeleteCategoryCommand { id: news.id.0 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let listed = svc.category_queries.list_categories().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].post_count, 1);
}

#[tokio::test]
async fn unused_category_is_deleted() {
    let content = Arc::new(InMemoryContent::new());
    let news = content.put_category("News", "news");
    let svc = services(&content);

    svc.category_commands
        .delete_category(&author(1), DeleteCategoryCommand { id: news.id.0 })
        .await
        .unwrap();
    assert!(svc.category_queries.list_categories().await.unwrap().is_empty());

    let err = svc
        .category_commands
        .delete_category(&author(1), DeleteCategoryCommand { id: news.id.0 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn tag_lifecycle() {
    let content = Arc::new(InMemoryContent::new());
    let svc = services(&content);

    let created = svc
        .tag_commands
        .create_tag(&author(1), CreateTagCommand { name: "Rust Lang".into() })
        .await
        .unwrap();
    assert_eq!(created.slug, "rust-lang");

    let renamed = svc
        .tag_commands
        .update_tag(
            &author(1),
            UpdateTagCommand {
                id: created.id,
                name: "Rust".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "rust");

    let by_slug = svc.tag_queries.get_tag_by_slug("rust").await.unwrap();
    assert_eq!(by_slug.id, created.id);
}

#[tokio::test]
async fn numeric_tag_name_falls_back() {
    let content = Arc::new(InMemoryContent::new());
    let svc = services(&content);

    let short = svc
        .tag_commands
        .create_tag(&author(1), CreateTagCommand { name: "42".into() })
        .await
        .unwrap();
    assert_eq!(short.slug, format!("tag-{}", fixed_now().timestamp_millis()));

    let year = svc
        .tag_commands
        .create_tag(&author(1), CreateTagCommand { name: "2024".into() })
        .await
        .unwrap();
    assert_eq!(year.slug, "2024");
}

#[tokio::test]
async fn tag_rename_race_is_retried() {
    let content = Arc::new(InMemoryContent::new());
    let tag = content.put_tag("Go", "go");
    content.rival_claims("tags", "golang");
    let svc = services(&content);

    let renamed = svc
        .tag_commands
        .update_tag(
            &author(1),
            UpdateTagCommand {
                id: tag.id.0,
                name: "Golang".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "golang-1");
}

#[tokio::test]
async fn deleting_a_tag_detaches_it_from_posts() {
    let content = Arc::new(InMemoryContent::new());
    let tag = content.put_tag("Rust", "rust");
    content.put_post(PostBuilder::new().tags(&[tag.id.0]).published().build());
    let svc = services(&content);

    let listed = svc.tag_queries.list_tags().await.unwrap();
    assert_eq!(listed[0].post_count, 1);

    svc.tag_commands
        .delete_tag(&author(1), DeleteTagCommand { id: tag.id.0 })
        .await
        .unwrap();
    assert!(content.posts()[0].tag_ids.is_empty());
}

#[tokio::test]
async fn tag_counts_ignore_drafts() {
    let content = Arc::new(InMemoryContent::new());
    let tag = content.put_tag("Rust", "rust");
    content.put_post(PostBuilder::new().slug("a").tags(&[tag.id.0]).build());
    content.put_post(PostBuilder::new().slug("b").tags(&[tag.id.0]).published().build());
    let svc = services(&content);

    let listed = svc.tag_queries.list_tags().await.unwrap();
    assert_eq!(listed[0].post_count, 1);
}
