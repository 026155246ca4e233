use opensubsonic_client::{Params, Response};
use tracing::instrument;

use crate::error::Result;
use crate::media::{Lyrics, StreamArgs, StructuredLyrics};

impl super::SubsonicApi {
    /// Stream a media file, transcoded if requested.
    #[instrument(skip(self))]
    pub async fn stream(&self, args: StreamArgs) -> Result<Response> {
        self.fetch_media("stream", args.into_params()).await
    }

    /// Download a media file without transcoding.
    #[instrument(skip(self))]
    pub async fn download(&self, id: &str) -> Result<Response> {
        self.fetch_media("download", Params::new().with("id", id))
            .await
    }

    /// Get an HLS playlist. The body is an `.m3u8` document.
    #[instrument(skip(self))]
    pub async fn hls(
        &self,
        id: &str,
        bit_rate: Option<u32>,
        audio_track: Option<&str>,
    ) -> Result<Response> {
        let params = Params::new()
            .with("id", id)
            .with("bitRate", bit_rate)
            .with("audioTrack", audio_track);
        self.fetch_media("hls", params).await
    }

    /// Get video captions, as `srt` or `vtt`.
    #[instrument(skip(self))]
    pub async fn get_captions(&self, id: &str, format: Option<&str>) -> Result<Response> {
        let params = Params::new().with("id", id).with("format", format);
        self.fetch_media("getCaptions", params).await
    }

    /// Get a cover art image, scaled to `size` pixels if given.
    #[instrument(skip(self))]
    pub async fn get_cover_art(&self, id: &str, size: Option<u32>) -> Result<Response> {
        let params = Params::new().with("id", id).with("size", size);
        self.fetch_media("getCoverArt", params).await
    }

    /// Get a user's avatar image.
    #[instrument(skip(self))]
    pub async fn get_avatar(&self, username: &str) -> Result<Response> {
        self.fetch_media("getAvatar", Params::new().with("username", username))
            .await
    }

    /// Search lyrics by artist and title.
    #[instrument(skip(self))]
    pub async fn get_lyrics(&self, artist: Option<&str>, title: Option<&str>) -> Result<Lyrics> {
        let params = Params::new().with("artist", artist).with("title", title);
        let lyrics = self.fetch_optional("getLyrics", "lyrics", params).await?;
        Ok(lyrics.unwrap_or_default())
    }

    /// Structured lyrics of a song (OpenSubsonic `songLyrics`).
    #[instrument(skip(self))]
    pub async fn get_lyrics_by_song_id(&self, id: &str) -> Result<Vec<StructuredLyrics>> {
        self.fetch_list(
            "getLyricsBySongId",
            "lyricsList",
            "structuredLyrics",
            Params::new().with("id", id),
        )
        .await
    }
}
