use std::path::PathBuf;

use newsdesk::models::news::{CreateNewsRequest, NewsFilter, UNKNOWN_AUTHOR};
use newsdesk::services::catalog;
use newsdesk::{AppError, Category, GameTag};

use crate::common::{TestApp, temp_image};

mod create {
    use super::*;

    #[tokio::test]
    async fn admin_can_publish_news_for_a_game() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;

        let req =
            CreateNewsRequest::from_labels("Patch 1.0", "Fixed bugs", "Updates", "CS2", admin)
                .unwrap();
        let news = catalog::create_news(&app.state, req).await.unwrap();

        assert_eq!(news.title, "Patch 1.0");
        assert_eq!(news.content, "Fixed bugs");
        assert_eq!(news.category, Category::Updates);
        assert_eq!(news.game, Some(GameTag::Cs2));
        assert_eq!(news.author_id, admin);
    }

    #[tokio::test]
    async fn empty_game_is_stored_as_absent() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;

        let id = app.create_news(admin, "Servers down", "Technical", "").await;

        let detail = catalog::get_news(&app.state, id).await.unwrap();
        assert_eq!(detail.news.game, None);
    }

    #[tokio::test]
    async fn cannot_publish_without_title_or_content() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;

        for (title, content) in [("", "Fixed bugs"), ("Patch 1.0", ""), ("  ", "x")] {
            let req =
                CreateNewsRequest::from_labels(title, content, "Updates", "", admin).unwrap();
            let err = catalog::create_news(&app.state, req).await.unwrap_err();
            assert_eq!(err.code(), "INVALID_INPUT");
        }
        assert_eq!(app.row_counts().await.news, 0);
    }

    #[tokio::test]
    async fn regular_users_cannot_publish() {
        let app = TestApp::spawn().await;
        let reader = app.create_user("alice").await;

        let req =
            CreateNewsRequest::from_labels("Leak", "Secret", "Releases", "DOTA2", reader).unwrap();
        let err = catalog::create_news(&app.state, req).await.unwrap_err();

        assert!(matches!(err, AppError::PermissionDenied));
        assert_eq!(app.row_counts().await.news, 0);
    }

    #[tokio::test]
    async fn unknown_author_is_not_found() {
        let app = TestApp::spawn().await;

        let req = CreateNewsRequest::from_labels("Patch", "Notes", "Updates", "", 42).unwrap();
        let err = catalog::create_news(&app.state, req).await.unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn most_recent_news_comes_first() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let first = app.create_news(admin, "First", "Updates", "CS2").await;
        let second = app.create_news(admin, "Second", "Releases", "").await;
        let third = app.create_news(admin, "Third", "Technical", "Deadlock").await;

        let list = catalog::list_news(&app.state, NewsFilter::default())
            .await
            .unwrap();

        let ids: Vec<i32> = list.iter().map(|s| s.news.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        assert!(
            list.windows(2)
                .all(|w| w[0].news.date_posted >= w[1].news.date_posted)
        );
    }

    #[tokio::test]
    async fn filters_by_exact_category() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        app.create_news(admin, "Patch", "Updates", "CS2").await;
        app.create_news(admin, "Launch", "Releases", "CS2").await;
        app.create_news(admin, "Hotfix", "Updates", "").await;

        let filter = NewsFilter::from_labels("Updates", "All games").unwrap();
        let list = catalog::list_news(&app.state, filter).await.unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|s| s.news.category == Category::Updates));
    }

    #[tokio::test]
    async fn filters_by_game_and_category_together() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        app.create_news(admin, "CS patch", "Updates", "CS2").await;
        let wanted = app.create_news(admin, "Dota patch", "Updates", "DOTA2").await;
        app.create_news(admin, "Dota launch", "Releases", "DOTA2").await;
        app.create_news(admin, "General", "Updates", "").await;

        let filter = NewsFilter::new(Some(Category::Updates), Some(GameTag::Dota2));
        let list = catalog::list_news(&app.state, filter).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].news.id, wanted);
    }

    #[tokio::test]
    async fn game_filter_excludes_untagged_news() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        app.create_news(admin, "General", "Updates", "").await;
        app.create_news(admin, "Deadlock", "Updates", "Deadlock").await;

        let filter = NewsFilter::from_labels("All news", "Deadlock").unwrap();
        let list = catalog::list_news(&app.state, filter).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].news.game, Some(GameTag::Deadlock));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let app = TestApp::spawn().await;

        let list = catalog::list_news(&app.state, NewsFilter::default())
            .await
            .unwrap();

        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn rows_carry_author_name_and_view_count() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("editor").await;
        let alice = app.create_user("alice").await;
        let bob = app.create_user("bob").await;
        let viewed = app.create_news(admin, "Viewed", "Updates", "").await;
        let unviewed = app.create_news(admin, "Unviewed", "Updates", "").await;

        catalog::record_view(&app.state, alice, viewed).await.unwrap();
        catalog::record_view(&app.state, bob, viewed).await.unwrap();

        let list = catalog::list_news(&app.state, NewsFilter::default())
            .await
            .unwrap();

        let row = |id| list.iter().find(|s| s.news.id == id).unwrap();
        assert_eq!(row(viewed).view_count, 2);
        assert_eq!(row(unviewed).view_count, 0);
        assert_eq!(row(viewed).author_name, "editor");
    }
}

mod views {
    use super::*;

    #[tokio::test]
    async fn repeated_visits_count_once() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let reader = app.create_user("reader").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;

        let first = catalog::record_view(&app.state, reader, news).await.unwrap();
        let second = catalog::record_view(&app.state, reader, news).await.unwrap();

        assert_eq!(first.view_count, 1);
        assert_eq!(second.view_count, 1);
        assert_eq!(catalog::view_count(&app.state, news).await.unwrap(), 1);
        assert_eq!(app.row_counts().await.views, 1);
    }

    #[tokio::test]
    async fn each_user_counts_separately() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let reader = app.create_user("reader").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;

        catalog::record_view(&app.state, admin, news).await.unwrap();
        let detail = catalog::record_view(&app.state, reader, news).await.unwrap();

        assert_eq!(detail.view_count, 2);
    }

    #[tokio::test]
    async fn opening_detail_without_recording_leaves_count_alone() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;

        let detail = catalog::get_news(&app.state, news).await.unwrap();

        assert_eq!(detail.view_count, 0);
        assert_eq!(detail.author_name, "admin");
    }

    #[tokio::test]
    async fn unknown_news_or_user_is_not_found() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;

        let missing_news = catalog::record_view(&app.state, admin, 999).await.unwrap_err();
        let missing_user = catalog::record_view(&app.state, 999, news).await.unwrap_err();

        assert_eq!(missing_news.code(), "NOT_FOUND");
        assert_eq!(missing_user.code(), "NOT_FOUND");
        assert_eq!(app.row_counts().await.views, 0);
    }
}

mod editing {
    use super::*;

    #[tokio::test]
    async fn content_is_replaced_and_post_date_kept() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let id = app.create_news(admin, "Patch", "Updates", "").await;
        let before = catalog::get_news(&app.state, id).await.unwrap().news;

        let edited = catalog::edit_news_content(&app.state, id, "  Rolled back \n")
            .await
            .unwrap();

        assert_eq!(edited.content, "Rolled back");
        assert_eq!(edited.date_posted, before.date_posted);
        assert_eq!(edited.title, before.title);
    }

    #[tokio::test]
    async fn blank_content_is_rejected_and_nothing_changes() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let id = app.create_news(admin, "Patch", "Updates", "").await;

        let err = catalog::edit_news_content(&app.state, id, " \n\t ")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INVALID_INPUT");
        let news = catalog::get_news(&app.state, id).await.unwrap().news;
        assert_eq!(news.content, "Some content");
    }

    #[tokio::test]
    async fn editing_unknown_news_is_not_found() {
        let app = TestApp::spawn().await;

        let err = catalog::edit_news_content(&app.state, 7, "text")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }
}

mod images {
    use super::*;

    #[tokio::test]
    async fn missing_file_cannot_be_attached() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;

        let err = catalog::add_image(&app.state, news, "/nonexistent.png")
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::FileNotFound(ref p) if p == &PathBuf::from("/nonexistent.png"))
        );
        assert_eq!(app.row_counts().await.images, 0);
    }

    #[tokio::test]
    async fn existing_file_is_attached_by_path() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;
        let path = app.image_file("shot.png");

        let image = catalog::add_image(&app.state, news, &path).await.unwrap();

        assert_eq!(image.news_id, news);
        assert_eq!(image.image_path, path.to_string_lossy());
        assert!(catalog::image_available(&image));
    }

    #[tokio::test]
    async fn same_path_can_be_attached_twice() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;
        let path = app.image_file("shot.png");

        catalog::add_image(&app.state, news, &path).await.unwrap();
        catalog::add_image(&app.state, news, &path).await.unwrap();

        let images = catalog::list_images(&app.state, news).await.unwrap();
        assert_eq!(images.len(), 2);
    }

    #[tokio::test]
    async fn attaching_to_unknown_news_is_not_found() {
        let app = TestApp::spawn().await;
        let path = app.image_file("shot.png");

        let err = catalog::add_image(&app.state, 5, &path).await.unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn batch_attach_skips_missing_files() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;
        let a = app.image_file("a.png");
        let b = app.image_file("b.jpg");
        let missing = app.files.path().join("gone.png");

        let added = catalog::add_images(&app.state, news, &[a.clone(), missing, b.clone()])
            .await
            .unwrap();

        let paths: Vec<&str> = added.iter().map(|i| i.image_path.as_str()).collect();
        assert_eq!(paths, vec![a.to_str().unwrap(), b.to_str().unwrap()]);

        let detail = catalog::get_news(&app.state, news).await.unwrap();
        assert_eq!(detail.images, added);
    }

    #[tokio::test]
    async fn deleted_image_disappears_from_the_item() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;
        let keep = catalog::add_image(&app.state, news, app.image_file("keep.png"))
            .await
            .unwrap();
        let removed = catalog::add_image(&app.state, news, app.image_file("drop.png"))
            .await
            .unwrap();

        catalog::delete_image(&app.state, removed.id).await.unwrap();

        let images = catalog::list_images(&app.state, news).await.unwrap();
        assert_eq!(images, vec![keep]);
        // The file itself is not managed by the catalog.
        assert!(std::path::Path::new(&removed.image_path).exists());
    }

    #[tokio::test]
    async fn deleting_unknown_image_is_not_found() {
        let app = TestApp::spawn().await;

        let err = catalog::delete_image(&app.state, 123).await.unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn image_removed_from_disk_is_reported_unavailable() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let news = app.create_news(admin, "Patch", "Updates", "").await;
        let file = temp_image();

        let image = catalog::add_image(&app.state, news, file.path()).await.unwrap();
        assert!(catalog::image_available(&image));

        file.close().unwrap();
        assert!(!catalog::image_available(&image));
    }
}

mod deletion {
    use super::*;

    #[tokio::test]
    async fn deleting_news_removes_its_images_and_views() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("admin").await;
        let reader = app.create_user("reader").await;
        let doomed = app.create_news(admin, "Doomed", "Updates", "").await;
        let kept = app.create_news(admin, "Kept", "Updates", "").await;

        catalog::add_image(&app.state, doomed, app.image_file("a.png"))
            .await
            .unwrap();
        catalog::add_image(&app.state, kept, app.image_file("b.png"))
            .await
            .unwrap();
        catalog::record_view(&app.state, reader, doomed).await.unwrap();
        catalog::record_view(&app.state, admin, doomed).await.unwrap();
        catalog::record_view(&app.state, reader, kept).await.unwrap();

        catalog::delete_news(&app.state, doomed).await.unwrap();

        let counts = app.row_counts().await;
        assert_eq!(counts.news, 1);
        assert_eq!(counts.images, 1);
        assert_eq!(counts.views, 1);
        assert_eq!(
            catalog::get_news(&app.state, doomed).await.unwrap_err().code(),
            "NOT_FOUND"
        );
        assert_eq!(catalog::view_count(&app.state, kept).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_unknown_news_is_not_found() {
        let app = TestApp::spawn().await;

        let err = catalog::delete_news(&app.state, 1).await.unwrap_err();

        assert_eq!(err.code(), "NOT_FOUND");
    }
}

mod authors {
    use super::*;

    #[tokio::test]
    async fn author_name_resolves_the_username() {
        let app = TestApp::spawn().await;
        let admin = app.create_admin("editor").await;

        let name = catalog::author_name(&app.state, admin).await.unwrap();

        assert_eq!(name, "editor");
    }

    #[tokio::test]
    async fn unresolvable_author_is_unknown() {
        let app = TestApp::spawn().await;

        let name = catalog::author_name(&app.state, 404).await.unwrap();

        assert_eq!(name, UNKNOWN_AUTHOR);
    }
}
