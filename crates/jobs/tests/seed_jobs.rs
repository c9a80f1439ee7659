//! Integration tests for `seed-media` and `seed-members`.

mod common;

use common::{media_root, seed_member, write_file};
use lookbook_db::repositories::{MediaFileRepo, MemberImageRepo, TeamMemberRepo};
use lookbook_jobs::roster::{default_roster, RosterEntry};
use lookbook_jobs::seed::{seed_media, seed_members, SeedMediaReport};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_media_scans_categories_and_does_not_duplicate(pool: PgPool) {
    let root = media_root();
    write_file(root.path(), "logos/logo.png", b"png");
    write_file(root.path(), "videos/intro.MP4", b"mp4");
    write_file(root.path(), "images/b.jpg", b"jpg");
    write_file(root.path(), "images/a.jpeg", b"jpg");
    write_file(root.path(), "images/notes.txt", b"skip me");
    write_file(root.path(), "logos/old.gif", b"skip me");

    let mut out = Vec::new();
    let report = seed_media(&pool, root.path(), &mut out).await.unwrap();

    assert_eq!(
        report,
        SeedMediaReport {
            created: 4,
            existing: 0,
            conflicts: 0
        }
    );
    let files = MediaFileRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["logo.png", "intro.MP4", "a.jpeg", "b.jpg"]);
    assert_eq!(files[0].media_type, "logo");
    assert_eq!(files[0].file_path.as_deref(), Some("logos/logo.png"));
    assert_eq!(files[0].description, "Logo file: logo.png");
    assert_eq!(files[1].description, "Video file: intro.MP4");
    assert_eq!(files[2].file_path.as_deref(), Some("images/a.jpeg"));
    assert_eq!(files[2].description, "Fashion image: a.jpeg");
    assert!(String::from_utf8(out).unwrap().contains("Created logo: logo.png"));

    // Re-running creates nothing.
    let report = seed_media(&pool, root.path(), &mut Vec::new()).await.unwrap();
    assert_eq!(report.created, 0);
    assert_eq!(report.existing, 4);
    assert_eq!(MediaFileRepo::list(&pool).await.unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_media_reports_cross_category_name_clash(pool: PgPool) {
    let root = media_root();
    write_file(root.path(), "logos/shared.png", b"png");
    write_file(root.path(), "images/shared.png", b"png");

    let mut out = Vec::new();
    let report = seed_media(&pool, root.path(), &mut out).await.unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(report.conflicts, 1);
    let files = MediaFileRepo::list(&pool).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].media_type, "logo");
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Skipped image shared.png: name already used by another category"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_media_skips_missing_directories(pool: PgPool) {
    let root = tempfile::tempdir().unwrap();
    write_file(root.path(), "videos/intro.mp4", b"mp4");

    let report = seed_media(&pool, root.path(), &mut Vec::new()).await.unwrap();

    assert_eq!(report.created, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seed_members_replaces_roster_and_skips_missing_images(pool: PgPool) {
    let root = media_root();
    write_file(root.path(), "images/1.jpg", b"1");
    write_file(root.path(), "images/3.jpg", b"3");
    let stale = seed_member(&pool, "Former Member").await;
    common::seed_image(&pool, stale.id, None, Some("images/old.jpg"), 0).await;

    let roster = vec![RosterEntry {
        name: "Sarah Johnson".into(),
        title: "Creative Designer".into(),
        view_url: "/designer/sarah-johnson".into(),
        images: vec!["1.jpg".into(), "2.jpg".into(), "3.jpg".into()],
    }];

    let mut out = Vec::new();
    let report = seed_members(&pool, root.path(), &roster, &mut out).await.unwrap();

    assert_eq!(report.removed, 1);
    assert_eq!(report.members, 1);
    assert_eq!(report.images, 2);
    assert_eq!(report.missing_images, 1);

    let members = TeamMemberRepo::list(&pool).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Sarah Johnson");

    let images = MemberImageRepo::list_by_member(&pool, members[0].id).await.unwrap();
    let gallery: Vec<(Option<&str>, i32)> = images
        .iter()
        .map(|i| (i.image_file.as_deref(), i.sort_order))
        .collect();
    assert_eq!(gallery, vec![(Some("images/1.jpg"), 0), (Some("images/3.jpg"), 2)]);
    assert!(images.iter().all(|i| i.image_url.is_none()));
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("Warning: image 2.jpg for Sarah Johnson not found"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_roster_seeds_four_members(pool: PgPool) {
    let root = media_root();
    write_file(root.path(), "images/1.jpg", b"1");

    let report = seed_members(&pool, root.path(), &default_roster(), &mut Vec::new())
        .await
        .unwrap();

    assert_eq!(report.members, 4);
    assert_eq!(report.images, 1);
    assert_eq!(report.missing_images, 19);
    let names: Vec<String> = TeamMemberRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(
        names,
        vec!["Sarah Johnson", "Emma Wilson", "Maya Patel", "Jessica Chen"]
    );
}
