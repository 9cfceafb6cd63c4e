use super::Result;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

/// San Francisco open data export of the Mobile Food Facility Permit dataset.
pub const PERMITS_URL: &str =
    "https://data.sfgov.org/api/views/rqzj-sfat/rows.csv?accessType=DOWNLOAD";

#[instrument(name = "Download permit data", level = "info")]
pub fn download_permits() -> Result<NamedTempFile> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let client = Client::new();
        download_to_temp_file(&client, PERMITS_URL).await
    })
}

/// Download the permit CSV and persist it at `dest`, creating parent directories.
#[instrument(name = "Download permit data to path", level = "info")]
pub fn download_permits_to(dest: &Path) -> Result<()> {
    let temp_file = download_permits()?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(temp_file.path(), dest)?;
    info!(path = ?dest, "Permit data saved");
    Ok(())
}

async fn download_to_temp_file(client: &Client, url: &str) -> Result<NamedTempFile> {
    info!(url, "Starting download");
    let response = client.get(url).send().await?.error_for_status()?;

    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░"),
    );
    pb.set_message("Downloading mobile food facility permits");

    let temp_file = NamedTempFile::with_suffix(".csv")?;
    let mut dest_file = tokio::fs::File::create(temp_file.path()).await?;

    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = item?;
        dest_file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    dest_file.flush().await?;
    pb.finish_and_clear();
    Ok(temp_file)
}
