//! Read-only checks against a real server.

use super::common::live_credentials;
use opensubsonic::{AlbumListArgs, AlbumListType, SearchQuery, SubsonicApi};

async fn live_api() -> Option<SubsonicApi> {
    let creds = live_credentials()?;
    Some(
        SubsonicApi::connect(creds.into_config_builder().build())
            .await
            .expect("ping against SUBSONIC_URL failed"),
    )
}

#[tokio::test]
#[ignore]
async fn live_ping_and_folders() {
    let Some(api) = live_api().await else { return };

    let pong = api.ping().await.expect("ping failed");
    println!("server: {:?} {:?}", pong.server_type, pong.server_version);

    let folders = api.get_music_folders().await.expect("getMusicFolders failed");
    println!("{} music folders", folders.len());
}

#[tokio::test]
#[ignore]
async fn live_album_roundtrip() {
    let Some(api) = live_api().await else { return };

    let albums = api
        .get_album_list2(AlbumListArgs::new(AlbumListType::AlphabeticalByName).with_page(5, 0))
        .await
        .expect("getAlbumList2 failed");

    for summary in albums {
        let album = api.get_album(&summary.id).await.expect("getAlbum failed");
        assert_eq!(album.album.id, summary.id);
        assert_eq!(album.song.len() as u32, album.album.song_count);
    }
}

#[tokio::test]
#[ignore]
async fn live_search_and_cover_art() {
    let Some(api) = live_api().await else { return };

    let hits = api
        .search3(SearchQuery::new("a"))
        .await
        .expect("search3 failed");

    if let Some(cover) = hits.album.iter().find_map(|a| a.cover_art.clone()) {
        let art = api
            .get_cover_art(&cover, Some(64))
            .await
            .expect("getCoverArt failed");
        assert!(!art.body().is_empty());
    }
}
