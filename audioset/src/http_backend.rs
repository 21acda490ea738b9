//! HTTP access to remote AudioSet record files
//!
//! The header is probed with a range request so a remote file can be
//! inspected without downloading it. Only available with the "http" feature.

#[cfg(feature = "http")]
pub mod http_impl {
    use audioset_core::AudioSetHeader;
    use reqwest::Client;

    use crate::{Codec, Error, Labels, Result, Waveform};

    /// Remote record reachable over HTTP
    pub struct HttpRecord {
        client: Client,
        url: String,
        header: AudioSetHeader,
    }

    impl HttpRecord {
        /// Connect to a remote record and validate its header
        pub async fn new(url: &str) -> Result<Self> {
            let client = Client::new();

            let header_bytes = Self::fetch_range(&client, url, 0, AudioSetHeader::SIZE).await?;
            let header = AudioSetHeader::from_bytes(&header_bytes)?;
            tracing::debug!(url, ?header, "probed remote record");

            Ok(Self {
                client,
                url: url.to_string(),
                header,
            })
        }

        /// Fetch a byte range from the remote file
        ///
        /// Servers that ignore `Range` answer with the whole body, which is
        /// fine: decoding only consumes what the header declares.
        async fn fetch_range(client: &Client, url: &str, start: usize, len: usize) -> Result<Vec<u8>> {
            let end = start + len - 1;
            let range_header = format!("bytes={start}-{end}");

            let response = client.get(url).header("Range", range_header).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus(status.as_u16()));
            }

            Ok(response.bytes().await?.to_vec())
        }

        /// Header of the remote record
        pub fn header(&self) -> &AudioSetHeader {
            &self.header
        }

        /// URL of the remote record
        pub fn url(&self) -> &str {
            &self.url
        }

        /// Download the whole record and decode it
        pub async fn fetch(&self, codec: &Codec) -> Result<(Waveform, Labels)> {
            let len = self.header.record_size()?;
            let bytes = Self::fetch_range(&self.client, &self.url, 0, len).await?;
            tracing::debug!(url = %self.url, bytes = bytes.len(), "fetched remote record");

            let mut body = bytes.as_slice();
            codec.decode(&mut body)
        }
    }
}

#[cfg(feature = "http")]
pub use http_impl::HttpRecord;
